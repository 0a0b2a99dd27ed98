//! Configuration validation
//!
//! Catches what can be checked without building a trie. Placeholder naming
//! rules are enforced by the trie itself when routes are registered.

use crate::Config;
use http::Method;
use std::collections::HashSet;
use switchyard_core::{Error, Result};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["text", "json"];

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_routes(config)?;
    validate_logging(config)?;

    Ok(())
}

fn validate_routes(config: &Config) -> Result<()> {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut names: HashSet<&str> = HashSet::new();

    for route in &config.routes {
        if route.pattern.is_empty() {
            return Err(Error::Config("route pattern cannot be empty".to_string()));
        }

        if !route.pattern.starts_with('/') {
            return Err(Error::Config(format!(
                "route pattern must start with '/': {}",
                route.pattern
            )));
        }

        if route.handler.is_empty() {
            return Err(Error::Config(format!(
                "route handler cannot be empty: {}",
                route.pattern
            )));
        }

        if route.methods.is_empty() {
            return Err(Error::Config(format!(
                "route must list at least one method: {}",
                route.pattern
            )));
        }

        for method in &route.methods {
            // Methods are kept as written; only token syntax is checked
            Method::from_bytes(method.as_bytes()).map_err(|_| {
                Error::Config(format!("Invalid HTTP method '{method}' for {}", route.pattern))
            })?;

            if !seen.insert((method.as_str(), route.pattern.as_str())) {
                return Err(Error::Config(format!(
                    "Route listed twice: {method} {}",
                    route.pattern
                )));
            }
        }

        if let Some(name) = route.name.as_deref() {
            if !names.insert(name) {
                return Err(Error::Config(format!("Duplicate route name: {name}")));
            }
        }
    }

    if config.routes.is_empty() {
        tracing::warn!("Route table has no routes");
    }

    Ok(())
}

fn validate_logging(config: &Config) -> Result<()> {
    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(Error::Config(format!(
            "Invalid log level: {} (must be one of {})",
            config.logging.level,
            LOG_LEVELS.join(", ")
        )));
    }

    if !LOG_FORMATS.contains(&config.logging.format.as_str()) {
        return Err(Error::Config(format!(
            "Invalid log format: {} (must be text or json)",
            config.logging.format
        )));
    }

    Ok(())
}
