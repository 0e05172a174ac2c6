//! Node.js toolchain management: version constraint parsing, release
//! resolution, download, checksum verification, and installation.
//!
//! The constraint engine ([`range`], [`parser`], [`constraints`],
//! [`resolve`]) is pure and performs no I/O. The remaining modules talk to the
//! release server and the filesystem.

pub mod constraints;
pub mod download;
pub mod error;
pub mod index;
pub mod install;
pub mod parser;
pub mod range;
pub mod resolve;
pub mod version;
