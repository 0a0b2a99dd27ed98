//! Route table construction from configuration

use serde::Serialize;
use std::collections::HashMap;
use switchyard_config::Config;
use switchyard_core::Result;
use switchyard_router::{Resolution, Trie};

/// Route handle stored in the trie
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct RouteHandle {
    pub(crate) handler: String,
    pub(crate) pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
}

/// Register every configured route, then compress if enabled
pub(crate) fn build_trie(config: &Config) -> Result<Trie<RouteHandle>> {
    let mut trie = Trie::new();

    for route in &config.routes {
        let handle = RouteHandle {
            handler: route.handler.clone(),
            pattern: route.pattern.clone(),
            name: route.name.clone(),
        };
        for method in &route.methods {
            trie.add_route(method, &route.pattern, handle.clone())?;
        }
    }

    if config.router.compress {
        trie.compress();
    }

    tracing::info!(
        routes = trie.len(),
        nodes = trie.node_count(),
        compressed = trie.is_compressed(),
        "Route table built"
    );

    Ok(trie)
}

/// One match, as printed by `switchyard match`
#[derive(Debug, Serialize)]
pub(crate) struct MatchReport<'a> {
    #[serde(flatten)]
    route: &'a RouteHandle,
    method: &'a str,
    params: HashMap<String, String>,
}

/// Lookup outcome, as printed by `switchyard match`
#[derive(Debug, Serialize)]
pub(crate) struct LookupReport<'a> {
    pub(crate) status: u16,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    matches: Vec<MatchReport<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    allowed: Vec<&'a str>,
}

impl<'a> From<Resolution<'a, RouteHandle>> for LookupReport<'a> {
    fn from(resolution: Resolution<'a, RouteHandle>) -> Self {
        let status = resolution.status_code().as_u16();
        match resolution {
            Resolution::Found(matches) => Self {
                status,
                matches: matches
                    .into_iter()
                    .map(|m| MatchReport {
                        route: m.route,
                        method: m.method,
                        params: m.params,
                    })
                    .collect(),
                allowed: Vec::new(),
            },
            Resolution::MethodNotAllowed { allowed } => Self {
                status,
                matches: Vec::new(),
                allowed,
            },
            Resolution::NotFound => Self {
                status,
                matches: Vec::new(),
                allowed: Vec::new(),
            },
        }
    }
}
