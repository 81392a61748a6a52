//! File-backed storage helpers
//!
//! Thin wrappers around std::fs that attach the file path to every error
//! and add JSON convenience functions.

pub mod file_store;

pub use file_store::*;
