use crate::utils::debug_with_context;
use std::env;
use std::path::Path;
use tokio::process::Command;

const BRANCH_GLYPH: char = '\u{e0a0}';
const DETACHED_GLYPH: char = '\u{27a6}';

/// Tri-state repository status driving the prompt segment color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoState {
    Clean,
    Dirty,
    Detached,
}

#[derive(Debug, Clone)]
pub struct RepoInfo {
    pub text: String,
    pub state: RepoState,
}

/// Inspect the repository containing the current directory.
///
/// `None` means "not inside a git repository" and the caller skips the
/// segment. `in_git_dir` marks the working directory sitting inside the
/// `.git` folder itself, where the working tree cannot be probed.
pub async fn repo_info(in_git_dir: bool) -> Option<RepoInfo> {
    let cwd = env::current_dir().ok()?;
    let repo = match gix::discover(&cwd) {
        Ok(repo) => repo,
        Err(_) => {
            debug_with_context("git", "not inside a git repository");
            return None;
        }
    };

    match repo.head_ref().ok()? {
        // HEAD points at a commit rather than a branch.
        None => {
            let sha = repo.head_commit().ok()?.id().to_hex_with_len(7).to_string();
            Some(RepoInfo {
                text: format!("{} {}", DETACHED_GLYPH, sha),
                state: RepoState::Detached,
            })
        }
        Some(reference) => {
            if in_git_dir {
                return Some(RepoInfo {
                    text: ".git".to_string(),
                    state: RepoState::Clean,
                });
            }
            let branch = reference.name().shorten().to_string();
            let (state, untracked) = working_tree_state(&cwd).await;
            debug_with_context(
                "git",
                &format!("branch={} state={:?} untracked={}", branch, state, untracked),
            );

            let mut text = format!("{} {}", BRANCH_GLYPH, branch);
            if untracked {
                text.push_str(" \u{00b1}");
            }
            Some(RepoInfo { text, state })
        }
    }
}

/// Dirty check via porcelain status; gix handles discovery and HEAD but
/// the porcelain summary stays with the git binary.
async fn working_tree_state(dir: &Path) -> (RepoState, bool) {
    let output = Command::new("git")
        .args(["status", "--porcelain"])
        .current_dir(dir)
        .output()
        .await;

    match output {
        Ok(output) if output.status.success() => {
            let status = String::from_utf8_lossy(&output.stdout);
            if status.trim().is_empty() {
                (RepoState::Clean, false)
            } else {
                (RepoState::Dirty, status.contains("??"))
            }
        }
        _ => (RepoState::Clean, false),
    }
}
