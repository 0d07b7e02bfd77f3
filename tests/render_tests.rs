use promptline::render::{resolve, Color, ColorError, ColorPair, ColorSpec, Dialect, Direction, Segment};
use promptline::themes::Theme;

const SOLID_RIGHT: char = '\u{e0b0}';
const THIN_RIGHT: char = '\u{e0b1}';
const SOLID_LEFT: char = '\u{e0b2}';
const THIN_LEFT: char = '\u{e0b3}';

fn pair(fg: Color, bg: Color) -> ColorPair {
    ColorPair::new(ColorSpec::new(fg), ColorSpec::new(bg))
}

fn glyph_count(rendered: &str) -> usize {
    rendered
        .chars()
        .filter(|c| [SOLID_RIGHT, THIN_RIGHT, SOLID_LEFT, THIN_LEFT].contains(c))
        .count()
}

#[test]
fn escape_form_is_a_pure_function_of_the_color_names() {
    let format = pair(Color::Black, Color::Blue);
    assert_eq!(format.escape_form(), "%{\u{1b}[30;44m%}");
    assert_eq!(format.escape_form(), format.escape_form());

    let bright = ColorPair::new(ColorSpec::bright(Color::White), ColorSpec::bright(Color::Black));
    assert_eq!(bright.escape_form(), "%{\u{1b}[97;100m%}");
}

#[test]
fn tmux_form_names_both_channels() {
    let format = ColorPair::new(ColorSpec::new(Color::Black), ColorSpec::bright(Color::Cyan));
    assert_eq!(format.tmux_form(), "#[fg=black]#[bg=brightcyan]");
}

#[test]
fn default_color_uses_palette_index_nine() {
    let spec = ColorSpec::new(Color::Default);
    assert_eq!(spec.fg_code(), 39);
    assert_eq!(spec.bg_code(), 49);
}

#[test]
fn unknown_color_names_are_rejected() {
    assert_eq!(
        "chartreuse".parse::<ColorSpec>(),
        Err(ColorError::UnknownColor("chartreuse".to_string()))
    );
    assert_eq!(
        "brightchartreuse".parse::<ColorSpec>(),
        Err(ColorError::UnknownColor("brightchartreuse".to_string()))
    );

    let parsed: ColorSpec = "brightcyan".parse().unwrap();
    assert_eq!(parsed, ColorSpec::bright(Color::Cyan));
    let plain: ColorSpec = "magenta".parse().unwrap();
    assert_eq!(plain, ColorSpec::new(Color::Magenta));
}

#[test]
fn one_transition_glyph_per_segment() {
    let segments = vec![
        Segment::new("one", pair(Color::Black, Color::Blue)),
        Segment::new("two", pair(Color::Black, Color::Blue)),
        Segment::new("three", pair(Color::Black, Color::Green)),
        Segment::new("four", pair(Color::White, Color::Red)),
    ];

    for direction in [Direction::Forward, Direction::Backward] {
        for dialect in [Dialect::Escape, Dialect::Tmux] {
            let rendered = resolve(&segments, direction, dialect, Theme::Dark);
            assert_eq!(glyph_count(&rendered), segments.len());
        }
    }
}

#[test]
fn rendering_is_idempotent() {
    let segments = vec![
        Segment::new("host", pair(Color::Black, Color::Blue)),
        Segment::new("dir", pair(Color::Black, Color::Cyan)),
    ];
    let first = resolve(&segments, Direction::Forward, Dialect::Escape, Theme::Light);
    let second = resolve(&segments, Direction::Forward, Dialect::Escape, Theme::Light);
    assert_eq!(first, second);
}

#[test]
fn equal_backgrounds_get_the_thin_separator_regardless_of_foreground() {
    let segments = vec![
        Segment::new("x", pair(Color::White, Color::Blue)),
        Segment::new("y", pair(Color::Black, Color::Blue)),
    ];

    let forward = resolve(&segments, Direction::Forward, Dialect::Escape, Theme::Dark);
    assert!(forward.contains(THIN_RIGHT));

    let backward = resolve(&segments, Direction::Backward, Dialect::Tmux, Theme::Dark);
    assert!(backward.contains(THIN_LEFT));
}

#[test]
fn two_same_background_segments_forward_escape() {
    // Both segments share blue: one thin split, then the solid boundary
    // into the dark neutral background plus the trailing space.
    let segments = vec![
        Segment::new("a", pair(Color::Black, Color::Blue)),
        Segment::new("b", pair(Color::Black, Color::Blue)),
    ];
    let rendered = resolve(&segments, Direction::Forward, Dialect::Escape, Theme::Dark);
    assert_eq!(
        rendered,
        concat!(
            "%{\u{1b}[30;44m%} a %{\u{1b}[90;44m%}\u{e0b1}",
            "%{\u{1b}[30;44m%} b %{\u{1b}[34;100m%}\u{e0b0}%{\u{1b}[0m%} ",
        )
    );
}

#[test]
fn single_segment_renders_exactly_one_boundary_transition() {
    let segments = vec![Segment::new("clean", pair(Color::Black, Color::Green))];

    let forward = resolve(&segments, Direction::Forward, Dialect::Escape, Theme::Dark);
    assert_eq!(
        forward,
        "%{\u{1b}[30;42m%} clean %{\u{1b}[32;100m%}\u{e0b0}%{\u{1b}[0m%} "
    );

    let backward = resolve(&segments, Direction::Backward, Dialect::Escape, Theme::Dark);
    assert_eq!(backward, "%{\u{1b}[32;100m%}\u{e0b2}%{\u{1b}[30;42m%} clean ");

    assert_eq!(glyph_count(&forward), 1);
    assert_eq!(glyph_count(&backward), 1);
}

#[test]
fn forward_tmux_sequence_blends_backgrounds_and_resets_at_the_boundary() {
    let segments = vec![
        Segment::new("h", ColorPair::new(ColorSpec::new(Color::Black), ColorSpec::bright(Color::Blue))),
        Segment::new("s", pair(Color::Black, Color::Blue)),
    ];
    let rendered = resolve(&segments, Direction::Forward, Dialect::Tmux, Theme::Dark);
    assert_eq!(
        rendered,
        concat!(
            "#[fg=black]#[bg=brightblue] h #[fg=brightblue]#[bg=blue]\u{e0b0}",
            "#[fg=black]#[bg=blue] s #[fg=blue]#[bg=black]\u{e0b0}#[default] ",
        )
    );
}

#[test]
fn backward_first_segment_opens_into_the_neutral_background() {
    let segments = vec![
        Segment::new("prefix", pair(Color::White, Color::Red)),
        Segment::new("cmd", ColorPair::new(ColorSpec::new(Color::Black), ColorSpec::bright(Color::Magenta))),
    ];

    let dark = resolve(&segments, Direction::Backward, Dialect::Tmux, Theme::Dark);
    assert!(dark.starts_with("#[fg=red]#[bg=black]\u{e0b2}"));

    let light = resolve(&segments, Direction::Backward, Dialect::Tmux, Theme::Light);
    assert!(light.starts_with("#[fg=red]#[bg=white]\u{e0b2}"));

    // Backward output carries no trailing space and no reset token.
    assert!(!dark.ends_with(' '));
    assert!(!dark.contains("#[default]"));
}

#[test]
fn light_theme_neutrals_differ_per_dialect() {
    let segments = vec![
        Segment::new("a", pair(Color::Black, Color::Cyan)),
        Segment::new("b", pair(Color::Black, Color::Cyan)),
    ];

    // Escape dialect thin separator uses the bright white foreground.
    let escape = resolve(&segments, Direction::Forward, Dialect::Escape, Theme::Light);
    assert!(escape.contains("%{\u{1b}[97;46m%}\u{e0b1}"));

    // tmux dialect names the plain color.
    let tmux = resolve(&segments, Direction::Forward, Dialect::Tmux, Theme::Light);
    assert!(tmux.contains("#[fg=white]#[bg=cyan]\u{e0b1}"));
}

#[test]
fn background_equality_is_by_value_not_identity() {
    // Independently constructed pairs with the same named background must
    // still trigger the thin separator.
    let first = Segment::new("a", pair(Color::Black, Color::Yellow));
    let second = Segment::new("b", pair(Color::Red, Color::Yellow));
    let rendered = first.render(
        Some(&second.format),
        Direction::Forward,
        Dialect::Escape,
        Theme::Dark,
    );
    assert!(rendered.contains(THIN_RIGHT));
    assert!(!rendered.contains(SOLID_RIGHT));
}

#[test]
fn segment_text_is_padded_exactly_once() {
    let segment = Segment::new("label", pair(Color::Black, Color::Blue));
    assert_eq!(segment.text(), " label ");
}

#[test]
#[should_panic(expected = "non-empty")]
fn resolving_an_empty_sequence_is_a_precondition_violation() {
    resolve(&[], Direction::Forward, Dialect::Escape, Theme::Dark);
}
