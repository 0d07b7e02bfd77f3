use super::command_stdout;

#[derive(Debug, Clone, Copy)]
pub struct BatteryInfo {
    pub on_ac: bool,
    pub percent: u32,
}

/// Charge state from `pmset -g batt`. `None` when the machine has no
/// battery or the power tool is unavailable.
pub async fn battery_info() -> Option<BatteryInfo> {
    let out = command_stdout("pmset", &["-g", "batt"]).await?;
    // Second tab-separated field looks like "87%; discharging; ...".
    let line = out.split('\t').nth(1)?;
    let percent = line.split('%').next()?.trim().parse().ok()?;
    Some(BatteryInfo {
        on_ac: out.contains("AC"),
        percent,
    })
}
