use anyhow::{Context, Result};
use std::env;

/// Current working directory with the home-directory prefix shortened
/// to `~`.
pub fn directory_text() -> Result<String> {
    let cwd = env::current_dir().context("failed to read current directory")?;
    let cwd = cwd.to_string_lossy().into_owned();

    if let Some(home) = dirs::home_dir() {
        let home = home.to_string_lossy();
        if let Some(rest) = cwd.strip_prefix(home.as_ref()) {
            if rest.is_empty() {
                return Ok("~".to_string());
            }
            if rest.starts_with('/') {
                return Ok(format!("~{}", rest));
            }
        }
    }
    Ok(cwd)
}
