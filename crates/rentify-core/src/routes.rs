//! The marketplace route table
//!
//! Declared in resolution order. The catch-all sits in the middle of the
//! table, so every route after it is unreachable (`/filter` renders
//! `NotFound`). This is kept as declared and reported as warnings when the
//! table is built; pass [`ShadowPolicy::Deny`] to [`build`] to reject it.

use crate::{Result, View};
use rentify_router::{RouteTable, ShadowPolicy};

/// Raw `(pattern, view)` declarations
pub const ENTRIES: &[(&str, View)] = &[
    ("/", View::Home),
    ("/items/category/:id", View::CategoryDetails),
    ("items/:id", View::ItemDetails),
    ("/login", View::Login),
    ("/register", View::Register),
    ("*", View::NotFound),
    ("/notfound", View::NotFound),
    ("/filter", View::FilterComponent),
    ("/items/create", View::CreateItem),
    ("/views", View::Views),
    ("/likes", View::LikedItemsPage),
    ("/settings", View::ProfilePage),
    ("/forgot-password", View::ForgotPassword),
    ("/reset-password", View::ResetPassword),
    ("/account-verification", View::AccountVerification),
];

/// Build the marketplace table, warning about unreachable routes
pub fn marketplace() -> Result<RouteTable<View>> {
    build(ENTRIES.iter().map(|&(p, v)| (p.to_string(), v)), ShadowPolicy::Warn)
}

/// Build a view table from declarations in resolution order
pub fn build<I>(entries: I, policy: ShadowPolicy) -> Result<RouteTable<View>>
where
    I: IntoIterator<Item = (String, View)>,
{
    let table = entries
        .into_iter()
        .fold(RouteTable::builder(), |b, (pattern, view)| b.route(pattern, view))
        .shadow_policy(policy)
        .build()?;
    Ok(table)
}
