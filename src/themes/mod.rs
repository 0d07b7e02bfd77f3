use crate::render::{Color, ColorPair, ColorSpec, Dialect};

/// Light or dark terminal background, selected once at startup from the
/// `BACKGROUND` environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Anything other than an explicit `light` means dark.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// The neutral tone used for thin-separator foregrounds and for the
    /// background closing the open end of a sequence.
    ///
    /// The two dialects do not share a value: the escape dialect uses the
    /// bright variant while tmux names the plain color, matching what each
    /// consumer displays as its default bar tone.
    pub fn neutral(self, dialect: Dialect) -> ColorSpec {
        match (self, dialect) {
            (Theme::Light, Dialect::Escape) => ColorSpec::bright(Color::White),
            (Theme::Dark, Dialect::Escape) => ColorSpec::bright(Color::Black),
            (Theme::Light, Dialect::Tmux) => ColorSpec::new(Color::White),
            (Theme::Dark, Dialect::Tmux) => ColorSpec::new(Color::Black),
        }
    }
}

/// Segment colors for the shell prompt.
#[derive(Debug, Clone, Copy)]
pub struct PromptPalette {
    pub host: ColorPair,
    pub directory: ColorPair,
    pub repo_clean: ColorPair,
    pub repo_dirty: ColorPair,
    pub repo_detached: ColorPair,
}

impl PromptPalette {
    pub fn for_theme(theme: Theme) -> Self {
        let black = ColorSpec::new(Color::Black);
        let (host_bg, dir_bg) = match theme {
            Theme::Light => (ColorSpec::bright(Color::Cyan), ColorSpec::new(Color::Cyan)),
            Theme::Dark => (ColorSpec::bright(Color::Blue), ColorSpec::new(Color::Blue)),
        };
        Self {
            host: ColorPair::new(black, host_bg),
            directory: ColorPair::new(black, dir_bg),
            repo_clean: ColorPair::new(black, ColorSpec::new(Color::Green)),
            repo_dirty: ColorPair::new(black, ColorSpec::new(Color::Yellow)),
            repo_detached: ColorPair::new(black, ColorSpec::new(Color::Red)),
        }
    }
}

/// Segment colors for the tmux status bar. Only the session name follows
/// the theme; the rest are fixed accents.
#[derive(Debug, Clone, Copy)]
pub struct StatusPalette {
    pub host: ColorPair,
    pub session: ColorPair,
    pub prefix: ColorPair,
    pub pane_command: ColorPair,
    pub battery_alarm: ColorPair,
    pub battery_warning: ColorPair,
    pub battery_nominal: ColorPair,
    pub media: ColorPair,
    pub clock: ColorPair,
}

impl StatusPalette {
    pub fn for_theme(theme: Theme) -> Self {
        let black = ColorSpec::new(Color::Black);
        let session_bg = match theme {
            Theme::Light => ColorSpec::new(Color::Cyan),
            Theme::Dark => ColorSpec::new(Color::Blue),
        };
        Self {
            host: ColorPair::new(black, ColorSpec::bright(Color::Blue)),
            session: ColorPair::new(black, session_bg),
            prefix: ColorPair::new(ColorSpec::new(Color::White), ColorSpec::new(Color::Red)),
            pane_command: ColorPair::new(black, ColorSpec::bright(Color::Magenta)),
            battery_alarm: ColorPair::new(black, ColorSpec::new(Color::Red)),
            battery_warning: ColorPair::new(black, ColorSpec::new(Color::Yellow)),
            battery_nominal: ColorPair::new(black, ColorSpec::new(Color::Green)),
            media: ColorPair::new(black, ColorSpec::bright(Color::Green)),
            clock: ColorPair::new(black, ColorSpec::bright(Color::Yellow)),
        }
    }
}
