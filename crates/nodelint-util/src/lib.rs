//! Shared utilities for nodelint.
//!
//! This crate provides cross-cutting concerns used by all other nodelint
//! crates: error types, filesystem helpers, hashing, process spawning, and
//! terminal status output.

pub mod errors;
pub mod fs;
pub mod hash;
pub mod process;
pub mod progress;
