use super::command_stdout;
use crate::utils::debug_with_context;
use tokio::process::Command;

/// Read a tmux option, falling back to `default` when unset or empty.
pub async fn get_option(option: &str, scope: &str, default: &str) -> String {
    let flags = format!("-qv{}", scope);
    match command_stdout("tmux", &["show-options", &flags, option]).await {
        Some(value) => value,
        None => default.to_string(),
    }
}

/// Write a tmux option. Fire-and-forget: the caller never depends on the
/// write landing before it exits.
pub fn set_option(option: &str, scope: &str, value: &str) {
    let flags = format!("-{}", scope);
    if let Err(err) = Command::new("tmux")
        .args(["set", &flags, option, value])
        .spawn()
    {
        debug_with_context("tmux", &format!("failed to set {}: {}", option, err));
    }
}

/// Current tmux window width in columns.
pub async fn window_width() -> Option<u32> {
    command_stdout("tmux", &["display-message", "-p", "#{window_width}"])
        .await?
        .parse()
        .ok()
}
