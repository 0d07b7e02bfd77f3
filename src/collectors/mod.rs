pub mod battery;
pub mod clock;
pub mod directory;
pub mod git;
pub mod host;
pub mod media;
pub mod tmux;

pub use battery::*;
pub use clock::*;
pub use directory::*;
pub use git::*;
pub use host::*;
pub use media::*;
pub use tmux::*;

use tokio::process::Command;

/// Run a command and return its trimmed stdout. `None` covers every kind
/// of unavailability: missing binary, non-zero exit, empty output.
pub(crate) async fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().await.ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Terminal column count, for the prompt width budget.
pub async fn terminal_columns() -> Option<u32> {
    command_stdout("tput", &["cols"]).await?.parse().ok()
}
