use chrono::Local;

/// Long clock text, e.g. `Sat 08/08/2026 03:14 PM`.
pub fn date_text() -> String {
    Local::now().format("%a %m/%d/%Y %I:%M %p").to_string()
}

/// Short clock text, e.g. `03:14 PM`.
pub fn short_date_text() -> String {
    Local::now().format("%I:%M %p").to_string()
}
