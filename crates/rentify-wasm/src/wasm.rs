//! WASM bindings for JavaScript interop

use crate::session::{PageSnapshot, Session};
use rentify_core::links;
use wasm_bindgen::prelude::*;

// ============================================================================
// Session
// ============================================================================

/// WASM-exposed navigation session
#[wasm_bindgen]
pub struct WasmSession {
    inner: Session,
}

#[wasm_bindgen]
impl WasmSession {
    /// Session over the built-in marketplace table
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmSession, JsError> {
        Ok(Self {
            inner: Session::new()?,
        })
    }

    /// Session over a TOML route configuration
    pub fn from_toml(config: &str) -> Result<WasmSession, JsError> {
        Ok(Self {
            inner: Session::from_toml(config)?,
        })
    }

    /// Adopt the path the page was loaded at (`location.pathname + search + hash`)
    pub fn start_at(&mut self, path: &str) -> Result<WasmPage, JsError> {
        Ok(self.inner.start_at(path)?.into())
    }

    pub fn current(&self) -> Result<WasmPage, JsError> {
        Ok(self.inner.current()?.into())
    }

    pub fn navigate(&mut self, path: &str) -> Result<WasmPage, JsError> {
        Ok(self.inner.navigate(path)?.into())
    }

    pub fn replace(&mut self, path: &str) -> Result<WasmPage, JsError> {
        Ok(self.inner.replace(path)?.into())
    }

    pub fn back(&mut self) -> Result<WasmPage, JsError> {
        Ok(self.inner.back()?.into())
    }

    pub fn forward(&mut self) -> Result<WasmPage, JsError> {
        Ok(self.inner.forward()?.into())
    }

    pub fn go(&mut self, delta: i32) -> Result<WasmPage, JsError> {
        Ok(self.inner.go(delta as isize)?.into())
    }

    /// Resolve without touching history
    pub fn resolve(&self, path: &str) -> Result<WasmPage, JsError> {
        Ok(self.inner.resolve(path)?.into())
    }
}

// ============================================================================
// Page
// ============================================================================

/// Page to mount between navbar and footer
#[wasm_bindgen]
pub struct WasmPage {
    inner: PageSnapshot,
}

impl From<PageSnapshot> for WasmPage {
    fn from(inner: PageSnapshot) -> Self {
        Self { inner }
    }
}

#[wasm_bindgen]
impl WasmPage {
    #[wasm_bindgen(getter)]
    pub fn view(&self) -> String {
        self.inner.view.clone()
    }

    /// Flattened `[name, value, ...]` pairs
    #[wasm_bindgen(getter)]
    pub fn params(&self) -> Vec<String> {
        self.inner.params.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn pathname(&self) -> String {
        self.inner.pathname.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn search(&self) -> String {
        self.inner.search.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn hash(&self) -> String {
        self.inner.hash.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn can_go_back(&self) -> bool {
        self.inner.can_go_back
    }

    #[wasm_bindgen(getter)]
    pub fn can_go_forward(&self) -> bool {
        self.inner.can_go_forward
    }
}

// ============================================================================
// Links
// ============================================================================

#[wasm_bindgen]
pub fn item_link(id: &str) -> String {
    links::item(id)
}

#[wasm_bindgen]
pub fn category_link(id: &str) -> String {
    links::category(id)
}

#[wasm_bindgen]
pub fn reset_password_link(token: &str) -> String {
    links::reset_password(token)
}

#[wasm_bindgen]
pub fn account_verification_link(token: &str) -> String {
    links::account_verification(token)
}
