//! rentify-router: Ordered first-match route table
//!
//! Single Source of Truth (SSOT) route matching used by both rentify-core
//! and the rentify-wasm browser bindings.
//!
//! ## Features
//! - Static paths: `/login`, `/items/create`
//! - Parameters: `/items/:id`, `/items/category/:id`
//! - Catch-all: `*`
//! - Startup validation: syntax, duplicates, missing fallback, shadowing
//!
//! ## Priority
//! Declaration order only. The first route whose pattern matches is selected,
//! so `*` declared before `/notfound` makes `/notfound` unreachable. Such
//! routes are reported by [`RouteTable::shadowed`] (or rejected with
//! [`ShadowPolicy::Deny`]), never reordered.
//!
//! ## Example
//! ```
//! use rentify_router::RouteTable;
//!
//! let table = RouteTable::builder()
//!     .route("/", 0)
//!     .route("/items/category/:id", 1)
//!     .route("*", 2)
//!     .build()
//!     .unwrap();
//!
//! let m = table.resolve("/items/category/5").unwrap();
//! assert_eq!(*m.view(), 1);
//! assert_eq!(m.params.get("id"), Some("5"));
//! assert_eq!(*table.resolve("/anything/else").unwrap().view(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod location;
pub mod params;
pub mod pattern;
pub mod table;
pub mod validate;

pub use error::{Error, PatternError, Result, ValidationError};
pub use location::Location;
pub use params::{Params, WILDCARD_PARAM};
pub use pattern::{Pattern, Segment};
pub use table::{Match, Route, RouteTable, RouteTableBuilder};
pub use validate::{ShadowPolicy, Shadowed};
