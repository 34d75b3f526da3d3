//! rentify-core: Marketplace application shell
//!
//! Maps navigation paths to the marketplace's page-level views and composes
//! each page as navbar + view + footer. Route matching itself lives in
//! `rentify-router`; this crate owns the marketplace's table, its history,
//! and the ambient setup (configuration, logging).
//!
//! ## Example
//! ```
//! use rentify_core::{links, NavigationState, Shell, View};
//!
//! let shell = Shell::new().unwrap();
//! let mut nav = NavigationState::new();
//! nav.push(&links::item(42)).unwrap();
//!
//! let page = shell.page(&nav).unwrap();
//! assert_eq!(page.view(), View::ItemDetails);
//! assert_eq!(page.param("id"), Some("42"));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod links;
pub mod logging;
pub mod navigation;
pub mod routes;
pub mod shell;
pub mod view;

// Re-exports
pub use config::{RouteConfig, ShellConfig};
pub use error::{Error, Result};
pub use navigation::{Navigation, NavigationState};
pub use shell::{Chrome, Page, Rendered, Shell, ViewHost};
pub use view::View;

pub use rentify_router::{Location, Params, RouteTable, ShadowPolicy, Shadowed};
