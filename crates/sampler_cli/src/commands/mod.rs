//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod cdf;
pub mod check;
pub mod sample;
pub mod summary;
