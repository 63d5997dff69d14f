//! Translator staging.
//!
//! The translator is not compiled; its sources are copied into the build
//! tree unmodified. The copy overwrites files staged by a previous run but
//! never deletes anything from the destination.

use anyhow::{Context, Result};
use std::path::Path;

/// Stage the translator sources into the build tree.
pub fn stage(src: &Path, dest: &Path) -> Result<()> {
    println!("=== Staging translator ===");

    let count = copy_tree(src, dest)?;

    println!("  Staged {} files into {}", count, dest.display());
    Ok(())
}

fn copy_tree(src: &Path, dest: &Path) -> Result<u64> {
    std::fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create directory {}", dest.display()))?;

    let entries = std::fs::read_dir(src)
        .with_context(|| format!("Failed to read directory {}", src.display()))?;

    let mut count = 0;
    for entry in entries {
        let entry = entry?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            count += copy_tree(&from, &to)?;
        } else {
            std::fs::copy(&from, &to)
                .with_context(|| format!("Failed to copy {}", from.display()))?;
            count += 1;
        }
    }

    Ok(count)
}
