use super::command_stdout;

#[derive(Debug, Clone)]
pub struct TrackInfo {
    pub text: String,
    pub playing: bool,
}

async fn osascript(script: &str) -> Option<String> {
    command_stdout("osascript", &["-e", script]).await
}

/// Current Spotify track as `name - artist`, with both fields truncated
/// to `field_length` characters. `None` when the player is not running.
pub async fn track_info(field_length: usize) -> Option<TrackInfo> {
    let state = osascript("tell application \"Spotify\" to return player state as string").await?;
    let name =
        osascript("tell application \"Spotify\" to return name of current track as string").await?;
    let artist =
        osascript("tell application \"Spotify\" to return artist of current track as string")
            .await?;

    Some(TrackInfo {
        text: format!(
            "{} - {}",
            truncate_field(&name, field_length),
            truncate_field(&artist, field_length)
        ),
        playing: state == "playing",
    })
}

/// Ten-slot playback position bar, e.g. `[---|-------]`.
pub async fn song_tick_text() -> Option<String> {
    let tick: usize = osascript(
        "tell application \"Spotify\" to return player position / ((duration of current track) / 1000) * 10 as integer",
    )
    .await?
    .parse()
    .ok()?;
    let tick = tick.min(10);
    Some(format!("[{}|{}]", "-".repeat(tick), "-".repeat(10 - tick)))
}

/// Shorten overlong fields with a `..` marker.
pub fn truncate_field(text: &str, length: usize) -> String {
    if text.chars().count() > length {
        let kept: String = text.chars().take(length.saturating_sub(2)).collect();
        format!("{}..", kept)
    } else {
        text.to_string()
    }
}
