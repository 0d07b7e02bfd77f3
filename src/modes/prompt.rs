use crate::collectors::{self, directory, git, host};
use crate::config::Config;
use crate::render::{resolve, Dialect, Direction, Segment};
use crate::themes::PromptPalette;
use anyhow::Result;

const FALLBACK_COLUMNS: u32 = 80;

/// Everything the prompt assembly consumes, gathered up front so the
/// assembly itself stays a pure function over synthetic-testable data.
#[derive(Debug, Clone)]
pub struct PromptInputs {
    pub host: String,
    pub directory: String,
    pub repo: Option<git::RepoInfo>,
    pub columns: u32,
}

/// Shell prompt: host, directory components, repository status. Escape
/// dialect, forward composition.
pub async fn render_prompt(config: &Config) -> Result<String> {
    let directory = directory::directory_text()?;
    let repo = git::repo_info(directory.contains(".git")).await;
    let inputs = PromptInputs {
        host: host::host_text().await,
        directory,
        repo,
        columns: collectors::terminal_columns()
            .await
            .unwrap_or(FALLBACK_COLUMNS),
    };
    let segments = assemble_prompt(&inputs, config);
    Ok(resolve(
        &segments,
        Direction::Forward,
        Dialect::Escape,
        config.theme,
    ))
}

/// Build the prompt segment sequence from collected inputs.
pub fn assemble_prompt(inputs: &PromptInputs, config: &Config) -> Vec<Segment> {
    let palette = PromptPalette::for_theme(config.theme);
    let budget = f64::from(inputs.columns) * f64::from(config.max_prompt_percent) / 100.0;
    let repo_text = inputs.repo.as_ref().map_or("", |repo| repo.text.as_str());

    let mut segments = Vec::new();

    // The host only earns its place outside tmux and when the whole line
    // still fits the width budget.
    let full_len = char_len(&inputs.host) + char_len(&inputs.directory) + char_len(repo_text);
    if (full_len as f64) < budget && !config.inside_tmux {
        segments.push(Segment::new(&inputs.host, palette.host));
    }

    let directory = collapse_directory(&inputs.directory, char_len(repo_text), budget);

    if config.no_split_path {
        segments.push(Segment::new(&directory, palette.directory));
    } else {
        for component in directory.split('/') {
            segments.push(Segment::new(component, palette.directory));
        }
    }

    if let Some(repo) = &inputs.repo {
        let pair = match repo.state {
            git::RepoState::Clean => palette.repo_clean,
            git::RepoState::Dirty => palette.repo_dirty,
            git::RepoState::Detached => palette.repo_detached,
        };
        segments.push(Segment::new(&repo.text, pair));
    }

    segments
}

/// Greedily drop leading path components behind a `..` marker until the
/// directory plus repository text fits the width budget, or only one
/// separator remains. One-directional, no backtracking.
pub fn collapse_directory(directory: &str, reserved: usize, budget: f64) -> String {
    let mut text = directory.to_string();
    while ((char_len(&text) + reserved) as f64) > budget && text.matches('/').count() > 1 {
        let components: Vec<&str> = text.split('/').collect();
        text = format!("../{}", components[2..].join("/"));
    }
    text
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
