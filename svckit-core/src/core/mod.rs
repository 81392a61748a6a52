//! Core functionality
//!
//! This module contains the algorithmic parts of the library. Everything
//! here is a pure, synchronous transformation that is safe to call from
//! multiple threads.

pub mod secrets;

pub use secrets::*;
