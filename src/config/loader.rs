use crate::config::Config;
use crate::themes::Theme;
use std::env;

/// Build the configuration from the process environment.
///
/// Unparseable values fall back to the defaults; the variables are owned
/// by the surrounding shell/tmux setup and treated as opaque toggles.
pub fn load_config() -> Config {
    let defaults = Config::default();
    Config {
        theme: Theme::from_name(env::var("BACKGROUND").ok().as_deref()),
        max_prompt_percent: env::var("MAXPROMPTSIZE")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.max_prompt_percent),
        no_split_path: env::var("NOSPLITDIRTEXT").map_or(false, |value| !value.is_empty()),
        inside_tmux: env::var("TMUX").map_or(false, |value| !value.is_empty()),
    }
}
