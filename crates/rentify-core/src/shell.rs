//! Application shell
//!
//! Every page is the navbar, the view selected by the route table, and the
//! footer. The shell decides which view; a [`ViewHost`] does the mounting.

use crate::navigation::{Navigation, NavigationState};
use crate::{routes, Result, ShellConfig, View};
use rentify_router::{Location, Match, Params, RouteTable};

/// Persistent chrome around every page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chrome {
    Navbar,
    Footer,
}

/// The view to mount and everything it may read from the URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    view: View,
    params: Params,
    location: Location,
    route_index: usize,
    pattern: String,
}

impl Page {
    fn from_match(m: Match<'_, View>) -> Self {
        Self {
            view: *m.view(),
            pattern: m.route.pattern().as_str().to_string(),
            route_index: m.index,
            params: m.params,
            location: m.location,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Bound path parameter, e.g. `id` for `/items/:id`
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Decoded query value, e.g. `token` for `/reset-password?token=..`
    pub fn query(&self, name: &str) -> Option<String> {
        self.location.query(name)
    }

    /// Position of the selected route in the table
    pub fn route_index(&self) -> usize {
        self.route_index
    }

    /// Pattern of the selected route as declared
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Mounts chrome and views
///
/// Implemented by the UI layer; `Output` is whatever it produces for a
/// mounted component.
pub trait ViewHost {
    type Output;

    fn chrome(&mut self, chrome: Chrome, location: &Location) -> Self::Output;

    fn view(&mut self, page: &Page) -> Self::Output;
}

/// A composed page, in mount order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered<T> {
    pub header: T,
    pub body: T,
    pub footer: T,
}

/// Route table plus page composition
#[derive(Debug, Clone)]
pub struct Shell {
    table: RouteTable<View>,
}

impl Shell {
    /// Shell over the built-in marketplace table
    pub fn new() -> Result<Self> {
        Ok(Self::with_table(routes::marketplace()?))
    }

    pub fn with_table(table: RouteTable<View>) -> Self {
        tracing::info!(
            routes = table.len(),
            unreachable = table.shadowed().len(),
            "shell ready"
        );
        Self { table }
    }

    pub fn from_config(config: &ShellConfig) -> Result<Self> {
        Ok(Self::with_table(config.route_table()?))
    }

    pub fn table(&self) -> &RouteTable<View> {
        &self.table
    }

    /// Resolve a path to the page to mount
    pub fn page_for(&self, path: &str) -> Result<Page> {
        let m = self.table.resolve(path)?;
        tracing::debug!(path, view = %m.view(), "page selected");
        Ok(Page::from_match(m))
    }

    /// Resolve the current location
    pub fn page(&self, nav: &NavigationState) -> Result<Page> {
        self.page_for(&nav.current().href())
    }

    /// Apply a navigation event, then resolve the resulting location
    ///
    /// History moves past either end leave the state as it was and return
    /// the current page.
    pub fn navigate(&self, nav: &mut NavigationState, event: &Navigation) -> Result<Page> {
        if !nav.apply(event)? {
            tracing::debug!(?event, "history move out of range");
        }
        self.page(nav)
    }

    /// Mount navbar, page and footer for the current location
    pub fn render<H: ViewHost>(
        &self,
        nav: &NavigationState,
        host: &mut H,
    ) -> Result<Rendered<H::Output>> {
        let page = self.page(nav)?;
        let location = page.location();

        Ok(Rendered {
            header: host.chrome(Chrome::Navbar, location),
            body: host.view(&page),
            footer: host.chrome(Chrome::Footer, location),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        mounted: Vec<String>,
    }

    impl ViewHost for Recorder {
        type Output = usize;

        fn chrome(&mut self, chrome: Chrome, location: &Location) -> usize {
            self.mounted.push(format!("{chrome:?}@{}", location.pathname()));
            self.mounted.len()
        }

        fn view(&mut self, page: &Page) -> usize {
            self.mounted.push(page.view().to_string());
            self.mounted.len()
        }
    }

    #[test]
    fn test_render_order() {
        let shell = Shell::new().unwrap();
        let mut nav = NavigationState::new();
        nav.push("/items/42").unwrap();

        let mut host = Recorder::default();
        let rendered = shell.render(&nav, &mut host).unwrap();

        assert_eq!(
            rendered,
            Rendered {
                header: 1,
                body: 2,
                footer: 3
            }
        );
        assert_eq!(
            host.mounted,
            vec!["Navbar@/items/42", "ItemDetails", "Footer@/items/42"]
        );
    }

    #[test]
    fn test_page_exposes_bindings() {
        let shell = Shell::new().unwrap();
        let page = shell.page_for("/items/category/5").unwrap();

        assert_eq!(page.view(), View::CategoryDetails);
        assert_eq!(page.param("id"), Some("5"));
        assert_eq!(page.route_index(), 1);
        assert_eq!(page.pattern(), "/items/category/:id");
    }

    #[test]
    fn test_page_keeps_query() {
        let shell = Shell::new().unwrap();
        let page = shell.page_for("/login?redirect=%2Flikes").unwrap();
        assert_eq!(page.view(), View::Login);
        assert_eq!(page.query("redirect").as_deref(), Some("/likes"));
        assert_eq!(page.location().search(), "redirect=%2Flikes");
    }

    #[test]
    fn test_navigate() {
        let shell = Shell::new().unwrap();
        let mut nav = NavigationState::new();

        let page = shell
            .navigate(&mut nav, &Navigation::Push("/register".into()))
            .unwrap();
        assert_eq!(page.view(), View::Register);

        let page = shell.navigate(&mut nav, &Navigation::Back).unwrap();
        assert_eq!(page.view(), View::Home);

        // Already at the oldest entry
        let page = shell.navigate(&mut nav, &Navigation::Back).unwrap();
        assert_eq!(page.view(), View::Home);

        assert!(shell
            .navigate(&mut nav, &Navigation::Push("register".into()))
            .is_err());
        assert_eq!(nav.pathname(), "/");
    }
}
