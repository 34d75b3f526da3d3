//! Browser session - shell plus history, with JS-friendly results

use rentify_core::{Navigation, NavigationState, Page, Result, Shell, ShellConfig};

/// Flattened page description handed across the JS boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    /// View name, e.g. `ItemDetails`
    pub view: String,
    /// Bound parameters as `[name, value, name, value, ...]`
    pub params: Vec<String>,
    pub pathname: String,
    pub search: String,
    pub hash: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

impl PageSnapshot {
    fn new(page: &Page, nav: &NavigationState) -> Self {
        Self {
            view: page.view().as_str().to_string(),
            params: page
                .params()
                .iter()
                .flat_map(|(k, v)| [k.to_string(), v.to_string()])
                .collect(),
            pathname: page.location().pathname().to_string(),
            search: page.location().search().to_string(),
            hash: page.location().hash().to_string(),
            can_go_back: nav.can_go_back(),
            can_go_forward: nav.can_go_forward(),
        }
    }
}

/// One tab's navigation session
#[derive(Debug, Clone)]
pub struct Session {
    shell: Shell,
    nav: NavigationState,
}

impl Session {
    /// Session over the built-in table, starting at `/`
    pub fn new() -> Result<Self> {
        Ok(Self {
            shell: Shell::new()?,
            nav: NavigationState::new(),
        })
    }

    /// Session over a TOML-configured table
    pub fn from_toml(config: &str) -> Result<Self> {
        let config = ShellConfig::from_toml_str(config)?;
        Ok(Self {
            shell: Shell::from_config(&config)?,
            nav: NavigationState::new(),
        })
    }

    /// Replace the initial entry with the path the page was loaded at
    pub fn start_at(&mut self, path: &str) -> Result<PageSnapshot> {
        self.nav = NavigationState::starting_at(path)?;
        self.current()
    }

    pub fn current(&self) -> Result<PageSnapshot> {
        let page = self.shell.page(&self.nav)?;
        Ok(PageSnapshot::new(&page, &self.nav))
    }

    pub fn navigate(&mut self, path: &str) -> Result<PageSnapshot> {
        self.dispatch(Navigation::Push(path.to_string()))
    }

    pub fn replace(&mut self, path: &str) -> Result<PageSnapshot> {
        self.dispatch(Navigation::Replace(path.to_string()))
    }

    pub fn back(&mut self) -> Result<PageSnapshot> {
        self.dispatch(Navigation::Back)
    }

    pub fn forward(&mut self) -> Result<PageSnapshot> {
        self.dispatch(Navigation::Forward)
    }

    pub fn go(&mut self, delta: isize) -> Result<PageSnapshot> {
        self.dispatch(Navigation::Go(delta))
    }

    /// Resolve without touching history, e.g. for link previews
    pub fn resolve(&self, path: &str) -> Result<PageSnapshot> {
        let page = self.shell.page_for(path)?;
        Ok(PageSnapshot::new(&page, &self.nav))
    }

    fn dispatch(&mut self, event: Navigation) -> Result<PageSnapshot> {
        let page = self.shell.navigate(&mut self.nav, &event)?;
        Ok(PageSnapshot::new(&page, &self.nav))
    }
}
