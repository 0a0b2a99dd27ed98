//! Configuration types

use serde::{Deserialize, Serialize};

/// Route table configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Trie settings
    #[serde(default)]
    pub router: RouterConfig,

    /// Routes
    #[serde(default)]
    pub routes: Vec<RouteConfig>,

    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Trie settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouterConfig {
    /// Compress the trie once all routes are registered
    #[serde(default = "default_compress")]
    pub compress: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            compress: default_compress(),
        }
    }
}

fn default_compress() -> bool {
    true
}

/// Route definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteConfig {
    /// Path pattern (e.g. `/users/:id`)
    pub pattern: String,

    /// HTTP methods, compared case-sensitively
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,

    /// Handler identifier returned on match
    pub handler: String,

    /// Optional unique route name
    #[serde(default)]
    pub name: Option<String>,
}

impl RouteConfig {
    /// Route for `pattern` handled by `handler`, under `GET`
    pub fn new(pattern: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            methods: default_methods(),
            handler: handler.into(),
            name: None,
        }
    }

    /// Replace the methods
    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = methods.into_iter().map(Into::into).collect();
        self
    }

    /// Set the route name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

fn default_methods() -> Vec<String> {
    vec!["GET".to_string()]
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (text, json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert!(config.router.compress);
        assert!(config.routes.is_empty());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn test_route_defaults_to_get() {
        let route: RouteConfig =
            serde_json::from_str(r#"{"pattern": "/users", "handler": "users"}"#).unwrap();
        assert_eq!(route.methods, vec!["GET"]);
        assert_eq!(route.name, None);
    }

    #[test]
    fn test_route_builder_methods() {
        let route = RouteConfig::new("/users/:id", "user")
            .methods(["GET", "DELETE"])
            .name("user-detail");
        assert_eq!(route.methods, vec!["GET", "DELETE"]);
        assert_eq!(route.name.as_deref(), Some("user-detail"));
    }
}
