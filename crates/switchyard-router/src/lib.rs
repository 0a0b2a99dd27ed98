//! # Switchyard Router
//!
//! Trie-based path matcher with support for:
//! - Named placeholders (`/users/:id`), stopping at `/` or `.`
//! - Relaxed placeholders (`/users/#login`), stopping at `/` only
//! - Splat placeholders (`/static/*filepath`) taking the rest of the path
//! - Method-based routing with 404/405 discrimination
//! - Ambiguous registrations: every matching route is returned
//!
//! ## Lifecycle
//!
//! Routes are added with [`Trie::add_route`], then [`Trie::compress`] merges
//! literal chains once. After that the trie is read-only and lookups can run
//! from any number of threads.
//!
//! ```
//! use switchyard_router::Trie;
//!
//! let mut trie = Trie::new();
//! trie.add_route("GET", "/r/:id/property.*format", "property")?;
//! trie.compress();
//!
//! let matches = trie.find_routes("GET", "/r/1/property.json");
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].param("id"), Some("1"));
//! assert_eq!(matches[0].param("format"), Some("json"));
//! # Ok::<(), switchyard_core::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

mod compress;
mod node;
mod traverse;

pub mod matcher;
pub mod segment;
pub mod trie;

pub use matcher::{Match, Resolution};
pub use trie::Trie;

pub use switchyard_core::{Error, PlaceholderKind, Result};
