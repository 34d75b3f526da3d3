//! rentify-wasm: Marketplace shell for the browser
//!
//! The JS side forwards `popstate` and link clicks here and mounts the
//! returned view between the navbar and the footer.

pub mod session;

#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::*;

pub use session::{PageSnapshot, Session};
