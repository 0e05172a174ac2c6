//! Core data types for nodelint.
//!
//! This crate defines the types the lint pipeline passes around: global
//! configuration, the parts of `package.json` it reads, lockfile-based
//! package manager detection, issues, and the rule table that classifies
//! ESLint findings.
//!
//! This crate is intentionally free of network I/O and process spawning.

pub mod config;
pub mod issue;
pub mod lockfile;
pub mod manifest;
pub mod rules;
