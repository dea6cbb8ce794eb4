//! Assignment description lookup.
//!
//! Recursively scans the checkout for a task description file and embeds
//! its content verbatim into the prompt. The scan prunes the same
//! directory set the classifier ignores; the first match wins.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::classify;

/// Candidate file names, matched case-insensitively.
pub const ASSIGNMENT_FILE_NAMES: &[&str] = &["readme.md", "task.md", "exercise.md", "assignment.md"];

fn is_pruned(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .map(classify::is_ignored_dir)
        .unwrap_or(false)
}

/// Finds and reads the assignment description under `root`, if any.
///
/// A shallower candidate always wins over a deeper one, so a checkout-root
/// readme beats a nested task file regardless of readdir order. Unreadable
/// candidates are logged and skipped.
pub fn find_assignment_text(root: &Path) -> Option<String> {
    let walker = WalkDir::new(root).into_iter().filter_entry(|e| !is_pruned(e));
    let mut candidates: Vec<(usize, PathBuf)> = Vec::new();
    for entry in walker.filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_lowercase();
        if ASSIGNMENT_FILE_NAMES.contains(&name.as_str()) {
            candidates.push((entry.depth(), entry.into_path()));
        }
    }
    candidates.sort_by_key(|(depth, _)| *depth);

    for (_, path) in candidates {
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!(path = %path.display(), "found task description");
                return Some(content);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read task file");
            }
        }
    }
    None
}
