//! Shell configuration
//!
//! ```toml
//! log_filter = "rentify=debug"
//! shadowing = "deny"
//!
//! # Optional: replaces the built-in marketplace table
//! [[routes]]
//! pattern = "/"
//! view = "Home"
//! ```

use crate::{routes, Error, Result, View};
use rentify_router::{RouteTable, ShadowPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// `tracing-subscriber` filter directive; `RUST_LOG` takes precedence
    pub log_filter: String,
    /// Unreachable routes: warn and keep, or reject the table
    pub shadowing: ShadowPolicy,
    /// Route declarations in resolution order; empty means built-in table
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<RouteConfig>,
}

/// One `[[routes]]` entry; the view is referenced by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub pattern: String,
    pub view: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            shadowing: ShadowPolicy::Warn,
            routes: Vec::new(),
        }
    }
}

impl ShellConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Resolve view names and build the validated table
    ///
    /// Unknown view names fail here, before any navigation happens.
    pub fn route_table(&self) -> Result<RouteTable<View>> {
        if self.routes.is_empty() {
            let entries = routes::ENTRIES.iter().map(|&(p, v)| (p.to_string(), v));
            return routes::build(entries, self.shadowing);
        }

        let entries = self
            .routes
            .iter()
            .map(|r| r.view.parse::<View>().map(|v| (r.pattern.clone(), v)))
            .collect::<Result<Vec<_>>>()?;
        routes::build(entries, self.shadowing)
    }

    /// Install the global subscriber using `log_filter`
    pub fn init_logging(&self) -> Result<()> {
        crate::logging::init(&self.log_filter)
    }
}
