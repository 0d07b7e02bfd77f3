use anyhow::Result;
use pico_args::Arguments;
use promptline::config::load_config;
use promptline::modes::{render_prompt, render_status_left, render_status_right};
use std::io::{self, Write};

/// Sentinel written for any selector this binary does not recognize; the
/// exit status stays zero so a misconfigured caller still gets a bar.
const UNKNOWN_SELECTOR: &str = "UNKNOWN";

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = Arguments::from_env();
    let selector: String = match args.free_from_str() {
        Ok(selector) => selector,
        Err(_) => UNKNOWN_SELECTOR.to_string(),
    };

    let config = load_config();

    let output = match selector.as_str() {
        "PROMPT" => render_prompt(&config).await?,
        "TMUXSTATUSLEFT" => render_status_left(&config).await?,
        "TMUXSTATUSRIGHT" => render_status_right(&config).await?,
        _ => UNKNOWN_SELECTOR.to_string(),
    };

    // No trailing newline: the consumers splice this into their own
    // prompt/status templates.
    let mut stdout = io::stdout();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
