use crate::config::Config;
use crate::themes::Theme;

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            max_prompt_percent: 33,
            no_split_path: false,
            inside_tmux: false,
        }
    }
}
