//! Configuration file merging
//!
//! Later files override earlier files, allowing for layered route tables:
//! - base.yaml (shared routes)
//! - service.yaml (service-specific routes)
//! - local.yaml (developer overrides)

use crate::types::{Config, RouteConfig};
use switchyard_core::{Error, Result};

/// Merge multiple configurations together
///
/// Later configs override the `router` and `logging` sections of earlier
/// ones. Routes are merged by pattern: an overlay route replaces the base
/// route with the same pattern in place, new patterns are appended.
pub fn merge_configs(configs: Vec<Config>) -> Result<Config> {
    let mut configs = configs.into_iter();
    let first = configs
        .next()
        .ok_or_else(|| Error::Config("No configurations to merge".to_string()))?;

    Ok(configs.fold(first, merge_two_configs))
}

/// Merge two configurations
fn merge_two_configs(mut base: Config, overlay: Config) -> Config {
    base.router = overlay.router;
    base.logging = overlay.logging;
    base.routes = merge_routes(base.routes, overlay.routes);
    base
}

/// Merge routes by pattern
fn merge_routes(mut base: Vec<RouteConfig>, overlay: Vec<RouteConfig>) -> Vec<RouteConfig> {
    for route in overlay {
        match base.iter().position(|r| r.pattern == route.pattern) {
            Some(idx) => {
                tracing::debug!(pattern = %route.pattern, "Route overridden by later config");
                base[idx] = route;
            }
            None => base.push(route),
        }
    }
    base
}
