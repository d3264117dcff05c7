use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{replacements::Replacements, Summary};

/// Processes `dir` recursively, children before the directories that contain
/// them, so renaming a directory never invalidates paths still queued for
/// work. Files are renamed before their contents are rewritten.
pub(super) fn process_directory(
    dir: &Path,
    replacements: &Replacements,
    summary: &mut Summary,
) -> Result<()> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("failed to stat {}", entry.path().display()))?;
        let path = entry.path();

        if file_type.is_symlink() {
            tracing::debug!(
                target: "pipepal::scaffold",
                path = %path.display(),
                "leaving symlink untouched"
            );
            continue;
        }

        if file_type.is_dir() {
            if entry.file_name() == ".git" {
                tracing::debug!(
                    target: "pipepal::scaffold",
                    path = %path.display(),
                    "skipping version control directory"
                );
                continue;
            }
            process_directory(&path, replacements, summary)?;
            rename_entry(&path, replacements, summary)?;
        } else {
            let path = rename_entry(&path, replacements, summary)?;
            rewrite_contents(&path, replacements, summary)?;
        }
    }

    Ok(())
}

/// Renames `path` if its final component contains a placeholder, returning
/// the path the entry now lives at.
fn rename_entry(
    path: &Path,
    replacements: &Replacements,
    summary: &mut Summary,
) -> Result<PathBuf> {
    let name = match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => name,
        None => return Ok(path.to_path_buf()),
    };

    let new_name = replacements.apply(name);
    if new_name == name {
        return Ok(path.to_path_buf());
    }

    let new_path = path.with_file_name(&new_name);
    fs::rename(path, &new_path).with_context(|| {
        format!(
            "failed to rename {} to {}",
            path.display(),
            new_path.display()
        )
    })?;
    summary.entries_renamed += 1;
    tracing::debug!(
        target: "pipepal::scaffold",
        from = %path.display(),
        to = %new_path.display(),
        "renamed entry"
    );

    Ok(new_path)
}

/// Rewrites the contents of a text file in place. Files that are not valid
/// UTF-8 are treated as binary and skipped.
fn rewrite_contents(
    path: &Path,
    replacements: &Replacements,
    summary: &mut Summary,
) -> Result<()> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(_) => {
            summary.binary_skipped += 1;
            tracing::info!(
                target: "pipepal::scaffold",
                path = %path.display(),
                "skipping binary file"
            );
            return Ok(());
        }
    };

    let updated = replacements.apply(&content);
    if updated == content {
        return Ok(());
    }

    fs::write(path, updated).with_context(|| format!("failed to write {}", path.display()))?;
    summary.files_rewritten += 1;
    tracing::debug!(
        target: "pipepal::scaffold",
        path = %path.display(),
        "rewrote file contents"
    );

    Ok(())
}
