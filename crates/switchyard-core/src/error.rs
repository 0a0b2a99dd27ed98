//! Error types for Switchyard

use crate::types::PlaceholderKind;

/// Result type alias using [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Main error type for Switchyard
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A single pattern uses the same placeholder name twice
    #[error("A route can't have two placeholders with the same name: '{name}' in '{pattern}'")]
    DuplicatePlaceholderName {
        /// Repeated placeholder name
        name: String,
        /// Offending pattern
        pattern: String,
    },

    /// Two patterns name a shared placeholder branch differently
    #[error(
        "Routes sharing a common {kind} placeholder must name it consistently: '{existing}' != '{name}' in '{pattern}'"
    )]
    InconsistentPlaceholderName {
        /// Kind of the shared placeholder
        kind: PlaceholderKind,
        /// Name already registered at this branch
        existing: String,
        /// Name used by the rejected pattern
        name: String,
        /// Offending pattern
        pattern: String,
    },

    /// The same method and pattern were registered twice
    #[error("Route already registered: {method} {pattern}")]
    DuplicateRoute {
        /// HTTP method
        method: String,
        /// Pattern
        pattern: String,
    },

    /// A placeholder name is empty or malformed
    #[error("Invalid {kind} placeholder name '{name}' in '{pattern}': {reason}")]
    InvalidPlaceholderName {
        /// Kind of placeholder
        kind: PlaceholderKind,
        /// Rejected name
        name: String,
        /// Offending pattern
        pattern: String,
        /// Why the name was rejected
        reason: &'static str,
    },

    /// A route was added after the trie was compressed
    #[error("Cannot add '{pattern}': routes are sealed once the trie is compressed")]
    Sealed {
        /// Pattern that was rejected
        pattern: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error was raised while registering a route
    pub fn is_registration_error(&self) -> bool {
        matches!(
            self,
            Error::DuplicatePlaceholderName { .. }
                | Error::InconsistentPlaceholderName { .. }
                | Error::DuplicateRoute { .. }
                | Error::InvalidPlaceholderName { .. }
                | Error::Sealed { .. }
        )
    }

    /// Short stable identifier, used as a structured log field
    pub fn kind_name(&self) -> &'static str {
        match self {
            Error::DuplicatePlaceholderName { .. } => "duplicate_placeholder_name",
            Error::InconsistentPlaceholderName { .. } => "inconsistent_placeholder_name",
            Error::DuplicateRoute { .. } => "duplicate_route",
            Error::InvalidPlaceholderName { .. } => "invalid_placeholder_name",
            Error::Sealed { .. } => "sealed",
            Error::Config(_) => "config",
            Error::Serialization(_) => "serialization",
            Error::Io(_) => "io",
        }
    }
}
