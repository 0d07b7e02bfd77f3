pub mod color;
pub mod segment;

pub use color::*;
pub use segment::*;

use crate::themes::Theme;

/// Output encoding of a rendered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Inline SGR escape sequences wrapped in zsh prompt quoting.
    Escape,
    /// tmux `#[fg=..]`/`#[bg=..]` directive tokens.
    Tmux,
}

/// Composition order of a rendered sequence.
///
/// The segment list is always in left-to-right logical order; `Backward`
/// only changes which end is the open boundary and which chevron set is
/// used. tmux composes its status-right string from the boundary outward,
/// which is why that mode renders backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Compose an ordered segment sequence into one output string.
///
/// Forward rendering walks from the visual start toward the open boundary
/// and appends a trailing space to keep the bar clear of whatever the
/// shell prints next. Backward rendering starts at the open boundary and
/// proceeds outward, with no trailing space.
///
/// Panics on an empty sequence; modes that have nothing to show must not
/// call the renderer at all.
pub fn resolve(
    segments: &[Segment],
    direction: Direction,
    dialect: Dialect,
    theme: Theme,
) -> String {
    assert!(!segments.is_empty(), "segment sequence must be non-empty");

    let mut out = String::new();
    match direction {
        Direction::Forward => {
            for pair in segments.windows(2) {
                out.push_str(&pair[0].render(Some(&pair[1].format), direction, dialect, theme));
            }
            let last = &segments[segments.len() - 1];
            out.push_str(&last.render(None, direction, dialect, theme));
            out.push(' ');
        }
        Direction::Backward => {
            out.push_str(&segments[0].render(None, direction, dialect, theme));
            for pair in segments.windows(2) {
                out.push_str(&pair[1].render(Some(&pair[0].format), direction, dialect, theme));
            }
        }
    }
    out
}
