//! Per-commit feedback assembly.
//!
//! Turns a commit's changed files into prompt-ready diff text, and wraps
//! the generated review into the fixed entry block. The entry prefix
//! ``**[`<short sha>`]**`` is what the ledger later re-parses; keep it in
//! lockstep with `ledger::marker_re`.

pub mod prompt;

use crate::classify;
use crate::types::ChangedFile;

/// Diff text for one commit, restricted to relevant files.
#[derive(Debug, Clone)]
pub struct ChangedContent {
    /// Concatenated per-file blocks, prompt-ready.
    pub text: String,
    /// Number of files that survived classification.
    pub file_count: usize,
}

/// Renders the relevant changed files of a commit into prompt text.
///
/// Files outside the allow-list, under ignored directories, or without a
/// patch contribute nothing. Returns `None` when no file survives, which
/// the pipeline treats as "skip commit, no LLM call".
pub fn render_changed_content(files: &[ChangedFile]) -> Option<ChangedContent> {
    let mut text = String::new();
    let mut file_count = 0;

    for f in files {
        if !classify::is_relevant_path(&f.path) {
            continue;
        }
        let Some(patch) = f.patch.as_deref().filter(|p| !p.is_empty()) else {
            continue;
        };
        text.push_str(&format!("\n--- FILE: {} ---\n", f.path));
        text.push_str(&format!("Status: {}\n", f.status));
        text.push_str(&format!("Changes:\n{}\n", patch));
        file_count += 1;
    }

    if file_count == 0 {
        None
    } else {
        Some(ChangedContent { text, file_count })
    }
}

/// Formats one feedback entry for the combined comment.
///
/// The marker prefix is the round-trip contract with the ledger reader;
/// changing it orphans all previously posted reviews.
pub fn format_entry(short_id: &str, message: &str, feedback: &str) -> String {
    format!("**[`{short_id}`]** {message}\n\n{feedback}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, patch: Option<&str>) -> ChangedFile {
        ChangedFile {
            path: path.to_string(),
            status: "modified".to_string(),
            patch: patch.map(str::to_string),
        }
    }

    #[test]
    fn irrelevant_only_commit_renders_nothing() {
        let files = vec![
            file("node_modules/pkg/index.js", Some("+x")),
            file("photo.png", Some("+binaryish")),
        ];
        assert!(render_changed_content(&files).is_none());
    }

    #[test]
    fn patchless_files_are_skipped() {
        let files = vec![file("src/app.ts", None), file("src/empty.ts", Some(""))];
        assert!(render_changed_content(&files).is_none());
    }

    #[test]
    fn renders_relevant_files_with_fixed_block_shape() {
        let files = vec![
            file("src/app.ts", Some("+const a = 1;")),
            file("dist/bundle.js", Some("+minified")),
        ];
        let content = render_changed_content(&files).unwrap();
        assert_eq!(content.file_count, 1);
        assert_eq!(
            content.text,
            "\n--- FILE: src/app.ts ---\nStatus: modified\nChanges:\n+const a = 1;\n"
        );
    }

    #[test]
    fn entry_starts_with_marker() {
        let entry = format_entry("7b3f1a2", "fix header", "გამარჯობა! 👍");
        assert!(entry.starts_with("**[`7b3f1a2`]** fix header\n\n"));
        assert!(entry.ends_with("გამარჯობა! 👍"));
    }
}
