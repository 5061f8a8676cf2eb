//! Core shared types for mlnkit.
//!
//! Hosts the workspace-wide error type and `Result` alias used by the
//! probability and I/O crates.

pub mod error;

pub use error::{Error, Result};
