//! Search component build.
//!
//! Two external phases, both run inside the build-search directory: CMake
//! generates the native build files, then make compiles them. A non-zero
//! exit from either phase aborts the build; compile never runs if configure
//! failed.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Architecture selection forwarded to CMake. Ignored on non-Apple hosts.
const CMAKE_ARCH: &str = "-DCMAKE_OSX_ARCHITECTURES=arm64";

/// Fixed parallelism for the compile phase.
const MAKE_JOBS: &str = "5";

/// External programs driven by the build. Defaults resolve via PATH.
pub struct Toolchain {
    pub cmake: PathBuf,
    pub make: PathBuf,
}

impl Default for Toolchain {
    fn default() -> Self {
        Toolchain {
            cmake: PathBuf::from("cmake"),
            make: PathBuf::from("make"),
        }
    }
}

/// Configure and compile the search component.
pub fn build(toolchain: &Toolchain, src: &Path, build_dir: &Path, build_type: &str) -> Result<()> {
    println!("=== Building search component ({build_type}) ===");

    preflight(toolchain)?;
    configure(toolchain, src, build_dir, build_type)?;
    compile(toolchain, build_dir)?;

    Ok(())
}

/// Both external programs must be present before anything is launched.
fn preflight(toolchain: &Toolchain) -> Result<()> {
    for tool in [&toolchain.cmake, &toolchain.make] {
        which::which(tool).with_context(|| format!("`{}` not found in PATH", tool.display()))?;
    }
    Ok(())
}

fn configure(toolchain: &Toolchain, src: &Path, build_dir: &Path, build_type: &str) -> Result<()> {
    let status = Command::new(&toolchain.cmake)
        .arg(src)
        .arg(CMAKE_ARCH)
        .arg(format!("-DCMAKE_BUILD_TYPE={build_type}"))
        .current_dir(build_dir)
        .status()
        .context("Failed to run cmake")?;

    if !status.success() {
        bail!("cmake configure failed for {}", src.display());
    }
    Ok(())
}

fn compile(toolchain: &Toolchain, build_dir: &Path) -> Result<()> {
    let status = Command::new(&toolchain.make)
        .args(["-j", MAKE_JOBS])
        .current_dir(build_dir)
        .status()
        .context("Failed to run make")?;

    if !status.success() {
        bail!("make failed");
    }
    Ok(())
}
