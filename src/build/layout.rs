//! Output tree layout.
//!
//! Every path derives from the project root and the selected build mode.
//! Resolution happens once per invocation; the result is passed down to the
//! later stages instead of being looked up again.

use std::path::{Path, PathBuf};

/// Debug or release build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    pub fn from_flag(debug: bool) -> Self {
        if debug {
            BuildMode::Debug
        } else {
            BuildMode::Release
        }
    }

    /// Output subdirectory under `builds/`.
    pub fn dir_name(self) -> &'static str {
        match self {
            BuildMode::Debug => "debug",
            BuildMode::Release => "release",
        }
    }

    /// Value forwarded as CMAKE_BUILD_TYPE.
    pub fn cmake_build_type(self) -> &'static str {
        match self {
            BuildMode::Debug => "Debug",
            BuildMode::Release => "Release",
        }
    }
}

/// Resolved paths for one invocation.
pub struct Layout {
    pub project_root: PathBuf,
    pub translator_src: PathBuf,
    pub search_src: PathBuf,
    pub build_root: PathBuf,
    pub build_search: PathBuf,
    pub build_translator: PathBuf,
}

impl Layout {
    pub fn new(root: &Path, mode: BuildMode) -> Self {
        let build_root = root.join("builds").join(mode.dir_name());
        Layout {
            project_root: root.to_path_buf(),
            translator_src: root.join("src/translator"),
            search_src: root.join("src/search"),
            build_search: build_root.join("search"),
            build_translator: build_root.join("translator"),
            build_root,
        }
    }
}

/// Project root: the directory this crate lives in.
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_mapping_is_total() {
        assert_eq!(BuildMode::from_flag(true), BuildMode::Debug);
        assert_eq!(BuildMode::from_flag(false), BuildMode::Release);

        assert_eq!(BuildMode::Debug.dir_name(), "debug");
        assert_eq!(BuildMode::Debug.cmake_build_type(), "Debug");
        assert_eq!(BuildMode::Release.dir_name(), "release");
        assert_eq!(BuildMode::Release.cmake_build_type(), "Release");
    }

    #[test]
    fn test_layout_paths_derive_from_root_and_mode() {
        let layout = Layout::new(Path::new("/proj"), BuildMode::Release);

        assert_eq!(layout.project_root, Path::new("/proj"));
        assert_eq!(layout.translator_src, Path::new("/proj/src/translator"));
        assert_eq!(layout.search_src, Path::new("/proj/src/search"));
        assert_eq!(layout.build_root, Path::new("/proj/builds/release"));
        assert_eq!(layout.build_search, Path::new("/proj/builds/release/search"));
        assert_eq!(
            layout.build_translator,
            Path::new("/proj/builds/release/translator")
        );
    }

    #[test]
    fn test_layout_is_deterministic() {
        let a = Layout::new(Path::new("/proj"), BuildMode::Debug);
        let b = Layout::new(Path::new("/proj"), BuildMode::Debug);

        assert_eq!(a.build_root, b.build_root);
        assert_eq!(a.build_search, b.build_search);
        assert_eq!(a.build_translator, b.build_translator);
    }
}
