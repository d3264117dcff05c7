//! Personalizes a template checkout by substituting placeholder strings in
//! file contents, file names, and directory names.

use std::path::Path;

use anyhow::{Context, Result};

pub mod replacements;
mod walker;

pub use replacements::Replacements;

/// Counters describing what a personalization pass changed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub files_rewritten: usize,
    pub entries_renamed: usize,
    pub binary_skipped: usize,
}

/// Applies `replacements` to every file name, directory name, and text file
/// under `root`, children before the directories that contain them.
pub fn personalize(root: &Path, replacements: &Replacements) -> Result<Summary> {
    let mut summary = Summary::default();
    walker::process_directory(root, replacements, &mut summary)
        .with_context(|| format!("failed to personalize scaffold at {}", root.display()))?;

    tracing::info!(
        target: "pipepal::scaffold",
        files_rewritten = summary.files_rewritten,
        entries_renamed = summary.entries_renamed,
        binary_skipped = summary.binary_skipped,
        "Scaffold personalized"
    );

    Ok(summary)
}
