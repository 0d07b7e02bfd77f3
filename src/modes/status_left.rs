use crate::collectors::host;
use crate::config::Config;
use crate::render::{resolve, Dialect, Direction, Segment};
use crate::themes::StatusPalette;
use anyhow::Result;

/// Expanded by tmux when it draws the status bar.
const SESSION_TEXT: &str = "#{client_session}";

/// tmux status-left: host identity plus session name. Tmux dialect,
/// forward composition.
pub async fn render_status_left(config: &Config) -> Result<String> {
    let palette = StatusPalette::for_theme(config.theme);
    let segments = vec![
        Segment::new(&host::host_text().await, palette.host),
        Segment::new(SESSION_TEXT, palette.session),
    ];
    Ok(resolve(
        &segments,
        Direction::Forward,
        Dialect::Tmux,
        config.theme,
    ))
}
