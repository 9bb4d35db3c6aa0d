//! Core module
//!
//! Crate-wide error type and result alias.

pub mod error;

pub use error::{RhdaError, Result};
