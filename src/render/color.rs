use std::str::FromStr;
use thiserror::Error;

/// The eight ANSI palette colors plus the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Default,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("unknown color name: {0}")]
    UnknownColor(String),
}

impl Color {
    /// Base palette index shared by the SGR codes and the tmux names.
    pub fn index(self) -> u8 {
        match self {
            Color::Black => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
            Color::White => 7,
            Color::Default => 9,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Default => "default",
        }
    }

    fn from_name(name: &str) -> Result<Self, ColorError> {
        match name {
            "black" => Ok(Color::Black),
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "blue" => Ok(Color::Blue),
            "magenta" => Ok(Color::Magenta),
            "cyan" => Ok(Color::Cyan),
            "white" => Ok(Color::White),
            "default" => Ok(Color::Default),
            other => Err(ColorError::UnknownColor(other.to_string())),
        }
    }
}

/// A palette color together with its bright-variant flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpec {
    pub color: Color,
    pub bright: bool,
}

impl ColorSpec {
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            bright: false,
        }
    }

    pub const fn bright(color: Color) -> Self {
        Self {
            color,
            bright: true,
        }
    }

    /// SGR code selecting this color as a foreground.
    pub fn fg_code(self) -> u8 {
        self.color.index() + 30 + if self.bright { 60 } else { 0 }
    }

    /// SGR code selecting this color as a background.
    pub fn bg_code(self) -> u8 {
        self.color.index() + 40 + if self.bright { 60 } else { 0 }
    }

    /// tmux color name, e.g. `brightcyan`.
    pub fn name(self) -> String {
        if self.bright {
            format!("bright{}", self.color.name())
        } else {
            self.color.name().to_string()
        }
    }
}

impl FromStr for ColorSpec {
    type Err = ColorError;

    /// Parse a color name with an optional `bright` prefix. Unknown names
    /// are a configuration error; there is no fallback color.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (bright, base) = match s.strip_prefix("bright") {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let color =
            Color::from_name(base).map_err(|_| ColorError::UnknownColor(s.to_string()))?;
        Ok(Self { color, bright })
    }
}

/// The foreground/background combination bound to one segment.
///
/// Constructed once per segment at render-setup time; every derived code
/// and name is a pure function of the two color specs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub fg: ColorSpec,
    pub bg: ColorSpec,
}

impl ColorPair {
    pub const fn new(fg: ColorSpec, bg: ColorSpec) -> Self {
        Self { fg, bg }
    }

    /// Inline shell-escape form: one combined SGR pair wrapped in the zsh
    /// prompt-quoting marker so the shell excludes it from width counting.
    pub fn escape_form(&self) -> String {
        format!("%{{\x1b[{};{}m%}}", self.fg.fg_code(), self.bg.bg_code())
    }

    /// tmux form: one directive token per channel, by color name.
    pub fn tmux_form(&self) -> String {
        format!("#[fg={}]#[bg={}]", self.fg.name(), self.bg.name())
    }
}
