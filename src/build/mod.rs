//! Build pipeline for the planner.
//!
//! Structure:
//! - `layout` - build mode and output tree resolution
//! - `translator` - stages translator sources into the build tree
//! - `search` - CMake configure + make for the search component
//!
//! The pipeline is strictly sequential: each stage finishes (including
//! waiting on external processes) before the next starts, and any failure
//! aborts the run with the filesystem left as the failing stage left it.

pub mod layout;
pub mod search;
pub mod translator;

use anyhow::{Context, Result};
use std::path::Path;

use layout::{BuildMode, Layout};
use search::Toolchain;

/// Run the full build: provision the output tree, stage the translator,
/// then configure and compile the search component.
pub fn run(root: &Path, mode: BuildMode, toolchain: &Toolchain) -> Result<()> {
    println!("=== Building Power Lifted ({}) ===\n", mode.dir_name());

    let layout = Layout::new(root, mode);

    ensure_dir(&layout.build_root)?;
    ensure_dir(&layout.build_search)?;

    translator::stage(&layout.translator_src, &layout.build_translator)?;
    search::build(
        toolchain,
        &layout.search_src,
        &layout.build_search,
        mode.cmake_build_type(),
    )?;

    println!("\n=== Build complete ===");
    println!("Output: {}", layout.build_root.display());

    Ok(())
}

/// Create a directory and any missing ancestors. Already present is success.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_creates_missing_ancestors() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("builds/release/search");

        ensure_dir(&nested).unwrap();

        assert!(nested.is_dir());
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("builds");

        ensure_dir(&dir).unwrap();
        ensure_dir(&dir).unwrap();

        assert!(dir.is_dir());
    }
}
