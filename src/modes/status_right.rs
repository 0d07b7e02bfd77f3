use crate::collectors::{battery, clock, media, tmux};
use crate::config::Config;
use crate::render::{resolve, ColorPair, Dialect, Direction, Segment};
use crate::themes::StatusPalette;
use anyhow::Result;

const OPT_AUTOSCALE: &str = "@STATUSRIGHTAUTOSCALE";
const OPT_CUTOFF: &str = "@AUTOSCALECUTOFF";
const OPT_NO_SONG_TICK: &str = "@NOSONGTICK";
const OPT_SHORT_DATE: &str = "@SHORTDATE";
const OPT_NO_MEDIA: &str = "@NOSPOTIFY";
const OPT_NO_BATTERY: &str = "@NOBATTERY";
const OPT_FIELD_LENGTH: &str = "@SPOTIFYFIELDLENGTH";

const DEFAULT_CUTOFF: u32 = 150;
const DEFAULT_FIELD_LENGTH: usize = 20;

// The rendered body sits inside a `#{?client_prefix,...}` conditional so
// tmux highlights the first segment only while the prefix key is active.
// The conditional is caller-side templating, not part of the renderer
// contract, which is why the text below carries the closing brace.
const PREFIX_CONDITIONAL: &str = "#{?client_prefix,";
const PREFIX_TEXT: &str = "PREFIX,}";
const PANE_COMMAND_TEXT: &str = "#{pane_current_command}";

/// Which status-right segments to leave out at the current window width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentFlags {
    pub no_song_tick: bool,
    pub short_date: bool,
    pub no_media: bool,
    pub no_battery: bool,
}

/// tmux status-right: prefix indicator, pane command, battery, media and
/// clock. Tmux dialect, backward composition (tmux reads the bar from its
/// right edge outward).
pub async fn render_status_right(config: &Config) -> Result<String> {
    let palette = StatusPalette::for_theme(config.theme);
    let flags = segment_flags().await;

    let mut segments = vec![
        Segment::new(PREFIX_TEXT, palette.prefix),
        Segment::new(PANE_COMMAND_TEXT, palette.pane_command),
    ];

    if !flags.no_battery {
        if let Some(info) = battery::battery_info().await {
            let text = format!("{}{}%", battery_label(info.on_ac, info.percent), info.percent);
            segments.push(Segment::new(&text, battery_pair(&palette, info.percent)));
        }
    }

    if !flags.no_media {
        let field_length = tmux::get_option(OPT_FIELD_LENGTH, "g", "")
            .await
            .parse()
            .unwrap_or(DEFAULT_FIELD_LENGTH);
        if let Some(track) = media::track_info(field_length).await {
            if track.playing {
                segments.push(Segment::new(&track.text, palette.media));
                if !flags.no_song_tick {
                    if let Some(tick) = media::song_tick_text().await {
                        segments.push(Segment::new(&tick, palette.media));
                    }
                }
            }
        }
    }

    let clock_text = if flags.short_date {
        clock::short_date_text()
    } else {
        clock::date_text()
    };
    segments.push(Segment::new(&clock_text, palette.clock));

    let body = resolve(&segments, Direction::Backward, Dialect::Tmux, config.theme);
    Ok(format!("{}{}", PREFIX_CONDITIONAL, body))
}

/// Feature toggles for this refresh: computed from the window width when
/// autoscaling, otherwise read from the tmux options. Autoscaled flags
/// are used directly and written back for inspection, never re-read.
async fn segment_flags() -> SegmentFlags {
    if tmux::get_option(OPT_AUTOSCALE, "g", "false").await == "true" {
        let width = tmux::window_width().await.unwrap_or(0);
        let cutoff = tmux::get_option(OPT_CUTOFF, "g", "")
            .await
            .parse()
            .unwrap_or(DEFAULT_CUTOFF);
        let flags = autoscale_flags(width, cutoff);
        persist_flags(flags);
        flags
    } else {
        SegmentFlags {
            no_song_tick: tmux::get_option(OPT_NO_SONG_TICK, "g", "").await == "true",
            short_date: tmux::get_option(OPT_SHORT_DATE, "g", "").await == "true",
            no_media: tmux::get_option(OPT_NO_MEDIA, "g", "").await == "true",
            no_battery: tmux::get_option(OPT_NO_BATTERY, "g", "").await == "true",
        }
    }
}

/// Staircase of width cutoffs: narrower windows shed segments largest
/// first, ending at the bare prefix/command/clock bar.
pub fn autoscale_flags(width: u32, cutoff: u32) -> SegmentFlags {
    let mut flags = SegmentFlags::default();
    if width < cutoff {
        flags.no_song_tick = true;
        if width < cutoff.saturating_sub(15) {
            flags.short_date = true;
            if width < cutoff.saturating_sub(30) {
                flags.no_media = true;
                if width < cutoff.saturating_sub(75) {
                    flags.no_battery = true;
                }
            }
        }
    }
    flags
}

fn persist_flags(flags: SegmentFlags) {
    tmux::set_option(OPT_NO_SONG_TICK, "g", option_value(flags.no_song_tick));
    tmux::set_option(OPT_SHORT_DATE, "g", option_value(flags.short_date));
    tmux::set_option(OPT_NO_MEDIA, "g", option_value(flags.no_media));
    tmux::set_option(OPT_NO_BATTERY, "g", option_value(flags.no_battery));
}

fn option_value(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Three-tier charge policy: alarm under 20%, warning under 100%,
/// nominal at a full charge.
pub fn battery_pair(palette: &StatusPalette, percent: u32) -> ColorPair {
    if percent < 20 {
        palette.battery_alarm
    } else if percent < 100 {
        palette.battery_warning
    } else {
        palette.battery_nominal
    }
}

pub fn battery_label(on_ac: bool, percent: u32) -> &'static str {
    if !on_ac {
        "Battery: "
    } else if percent < 100 {
        "Charging: "
    } else {
        "Charged: "
    }
}
