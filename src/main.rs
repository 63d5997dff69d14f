//! # plbuild
//!
//! Build driver for the Power Lifted planner.
//!
//! ## Usage
//!
//! ```bash
//! plbuild            # Build in release mode (default)
//! plbuild --debug    # Build in debug mode
//! ```
//!
//! The planner has two halves: the translator, staged into the build tree
//! unmodified, and the search component, compiled with CMake + make. Output
//! lands in `builds/<debug|release>/`.

use anyhow::Result;
use clap::Parser;

use plbuild::build;
use plbuild::build::layout::{project_root, BuildMode};
use plbuild::build::search::Toolchain;

#[derive(Parser)]
#[command(name = "plbuild", about = "Build the Power Lifted planner")]
struct Args {
    /// Build in debug mode
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let root = project_root();
    build::run(&root, BuildMode::from_flag(args.debug), &Toolchain::default())
}
