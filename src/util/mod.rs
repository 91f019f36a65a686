//! Filesystem and logging utilities.

pub mod fs;
pub mod logging;
