//! Build pipeline for the Power Lifted planner.

pub mod build;
