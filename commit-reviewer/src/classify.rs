//! Changed-file classifier.
//!
//! Decides whether a repo path is worth reviewing: directory segments are
//! checked against a fixed ignore set (VCS internals, build output,
//! dependency caches), then the extension against a fixed allow-list of
//! source/markup/style extensions. Pure, no error cases.

use std::path::Path;

/// Directories whose contents are never reviewed. Also prunes the
/// assignment-file scan (see `assignment`).
pub const IGNORE_DIRS: &[&str] = &[
    ".git",
    ".github",
    ".vscode",
    ".idea",
    "node_modules",
    "bower_components",
    "dist",
    "build",
    "out",
    "coverage",
    "__pycache__",
    "venv",
    "bin",
    "obj",
    ".next",
    ".nuxt",
    ".astro",
];

/// Extensions considered reviewable (without the leading dot).
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    // JavaScript / TypeScript & flavors
    "js", "jsx", "ts", "tsx", "mjs", "cjs", // modern frameworks
    "vue", "svelte", "astro", // styling
    "css", "scss", "sass", "less", "styl", // markup & templates
    "html", "htm", "pug", "ejs", "handlebars", "hbs", // backend / other
    "json", "go", "java", "cpp", "c", "md",
];

/// Returns true when `name` is one of the ignored directory names.
pub fn is_ignored_dir(name: &str) -> bool {
    IGNORE_DIRS.contains(&name)
}

/// Returns true when the file at `path` should be reviewed.
///
/// Any ignored *directory* segment rejects the path regardless of the file
/// extension; a file that itself is named like an ignored dir is fine.
pub fn is_relevant_path(path: &str) -> bool {
    let mut segments: Vec<&str> = path.split('/').collect();
    let file_name = segments.pop().unwrap_or("");

    if segments.iter().any(|s| is_ignored_dir(s)) {
        return false;
    }

    match Path::new(file_name).extension().and_then(|e| e.to_str()) {
        Some(ext) => SUPPORTED_EXTENSIONS.contains(&ext),
        None => false,
    }
}
