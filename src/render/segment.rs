use super::color::ColorPair;
use super::{Dialect, Direction};
use crate::themes::Theme;

// Powerline glyphs from the private-use area. Solid chevrons mark a color
// boundary, thin ones a sub-grouping within a shared background.
const SOLID_RIGHT: char = '\u{e0b0}';
const THIN_RIGHT: char = '\u{e0b1}';
const SOLID_LEFT: char = '\u{e0b2}';
const THIN_LEFT: char = '\u{e0b3}';

/// One padded, colored text unit of a rendered bar.
#[derive(Debug, Clone)]
pub struct Segment {
    text: String,
    pub format: ColorPair,
}

enum Chevron {
    Solid,
    Thin,
}

impl Segment {
    /// Pads the label with one space on each side. The text is otherwise
    /// opaque to the renderer, so tmux placeholders like
    /// `#{pane_current_command}` pass through untouched.
    pub fn new(text: &str, format: ColorPair) -> Self {
        Self {
            text: format!(" {} ", text),
            format,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Render this segment next to its visual neighbor.
    ///
    /// `next` is the following segment's format in forward composition and
    /// the preceding one's in backward composition; `None` marks the open
    /// end of the sequence. Forward emits colors, text, then the transition;
    /// backward emits the transition first with the mirrored chevron set.
    pub fn render(
        &self,
        next: Option<&ColorPair>,
        direction: Direction,
        dialect: Dialect,
        theme: Theme,
    ) -> String {
        let own = match dialect {
            Dialect::Escape => self.format.escape_form(),
            Dialect::Tmux => self.format.tmux_form(),
        };
        let transition = self.transition(next, direction, dialect, theme);
        match direction {
            Direction::Forward => format!("{}{}{}", own, self.text, transition),
            Direction::Backward => format!("{}{}{}", transition, own, self.text),
        }
    }

    /// The glyph-and-color joint between this segment and its neighbor.
    ///
    /// Backgrounds are compared by derived code, never identity, so two
    /// independently built pairs with the same named background always get
    /// the thin-separator treatment.
    fn transition(
        &self,
        next: Option<&ColorPair>,
        direction: Direction,
        dialect: Dialect,
        theme: Theme,
    ) -> String {
        let (fg, bg, chevron, reset) = match next {
            // Open end of the sequence: blend into the neutral background
            // and, when reading forward, drop all attributes afterwards.
            None => (
                self.format.bg,
                theme.neutral(dialect),
                Chevron::Solid,
                direction == Direction::Forward,
            ),
            // Shared background: a low-contrast split inside one block.
            Some(other) if other.bg.bg_code() == self.format.bg.bg_code() => {
                (theme.neutral(dialect), other.bg, Chevron::Thin, false)
            }
            // Color boundary: this background becomes the chevron over the
            // neighbor's background.
            Some(other) => (self.format.bg, other.bg, Chevron::Solid, false),
        };

        let glyph = match (chevron, direction) {
            (Chevron::Solid, Direction::Forward) => SOLID_RIGHT,
            (Chevron::Thin, Direction::Forward) => THIN_RIGHT,
            (Chevron::Solid, Direction::Backward) => SOLID_LEFT,
            (Chevron::Thin, Direction::Backward) => THIN_LEFT,
        };

        match dialect {
            Dialect::Escape => {
                let mut out = format!("%{{\x1b[{};{}m%}}{}", fg.fg_code(), bg.bg_code(), glyph);
                if reset {
                    out.push_str("%{\x1b[0m%}");
                }
                out
            }
            Dialect::Tmux => {
                let mut out = format!("#[fg={}]#[bg={}]{}", fg.name(), bg.name(), glyph);
                if reset {
                    out.push_str("#[default]");
                }
                out
            }
        }
    }
}
