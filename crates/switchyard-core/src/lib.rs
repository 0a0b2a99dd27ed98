//! # Switchyard Core
//!
//! Core types and error handling shared by the Switchyard crates.
//!
//! This crate provides the foundational pieces used throughout the router:
//! - Error types
//! - Placeholder kinds used by route patterns
//! - Re-exports of the HTTP types callers commonly pass in

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::PlaceholderKind;

// Re-export commonly used HTTP types
pub use http::{Method, StatusCode};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::PlaceholderKind;
}
