//! Page-level views mounted by the shell
//!
//! Views are opaque to the router: it only decides which one to mount and
//! with which bindings. Data fetching, auth checks and rendering live in
//! the views themselves.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// View identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    Home,
    CategoryDetails,
    ItemDetails,
    Login,
    Register,
    NotFound,
    FilterComponent,
    CreateItem,
    Views,
    LikedItemsPage,
    ProfilePage,
    ForgotPassword,
    ResetPassword,
    AccountVerification,
}

impl View {
    pub const ALL: [View; 14] = [
        View::Home,
        View::CategoryDetails,
        View::ItemDetails,
        View::Login,
        View::Register,
        View::NotFound,
        View::FilterComponent,
        View::CreateItem,
        View::Views,
        View::LikedItemsPage,
        View::ProfilePage,
        View::ForgotPassword,
        View::ResetPassword,
        View::AccountVerification,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::CategoryDetails => "CategoryDetails",
            View::ItemDetails => "ItemDetails",
            View::Login => "Login",
            View::Register => "Register",
            View::NotFound => "NotFound",
            View::FilterComponent => "FilterComponent",
            View::CreateItem => "CreateItem",
            View::Views => "Views",
            View::LikedItemsPage => "LikedItemsPage",
            View::ProfilePage => "ProfilePage",
            View::ForgotPassword => "ForgotPassword",
            View::ResetPassword => "ResetPassword",
            View::AccountVerification => "AccountVerification",
        }
    }
}

impl FromStr for View {
    type Err = Error;

    /// Parse from the view's name (case-sensitive)
    fn from_str(s: &str) -> Result<Self> {
        View::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| Error::UnknownView(s.to_string()))
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_from_str() {
        assert_eq!("Home".parse::<View>().unwrap(), View::Home);
        assert_eq!(
            "AccountVerification".parse::<View>().unwrap(),
            View::AccountVerification
        );
        assert!(matches!(
            "home".parse::<View>(),
            Err(Error::UnknownView(name)) if name == "home"
        ));
    }

    #[test]
    fn test_names_are_unique_and_parse_back() {
        for view in View::ALL {
            assert_eq!(view.as_str().parse::<View>().unwrap(), view);
            assert_eq!(view.to_string(), view.as_str());
        }
        let mut names: Vec<_> = View::ALL.iter().map(View::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), View::ALL.len());
    }

    #[test]
    fn test_serde_uses_names() {
        #[derive(Deserialize)]
        struct Doc {
            view: View,
        }
        let doc: Doc = toml::from_str("view = \"LikedItemsPage\"").unwrap();
        assert_eq!(doc.view, View::LikedItemsPage);
        assert!(toml::from_str::<Doc>("view = \"Dashboard\"").is_err());
    }
}
