//! Shared helper re-exports.
//!
//! Consolidates the `crate::core` helpers under one import path for the
//! binary and its commands.

pub use crate::core::errors::is_broken_pipe;
pub use crate::core::fs::{ensure_dir, make_parent_dirs};
