pub mod defaults;
pub mod loader;

pub use loader::*;

use crate::themes::Theme;

/// Process-wide settings, read once at startup and passed down to the
/// display modes so no rendering code touches the environment directly.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub theme: Theme,
    /// Prompt width budget as a percentage of the terminal width.
    pub max_prompt_percent: u32,
    /// Render the working directory as a single segment instead of one
    /// segment per path component.
    pub no_split_path: bool,
    /// Whether this process was spawned from inside a tmux session.
    pub inside_tmux: bool,
}
