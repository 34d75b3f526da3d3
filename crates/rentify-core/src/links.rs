//! Paths views navigate to
//!
//! Parameter values are percent-encoded as path segments; tokens from
//! e-mailed links travel in the query string.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::fmt::Display;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn segment(value: impl Display) -> String {
    utf8_percent_encode(&value.to_string(), SEGMENT).to_string()
}

fn with_token(path: &str, token: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("token", token)
        .finish();
    format!("{path}?{query}")
}

pub fn home() -> String {
    "/".to_string()
}

/// Path of an item's details page
///
/// An empty `id` yields `/items/`, which does not resolve to `ItemDetails`
/// since parameters never bind empty segments.
pub fn item(id: impl Display) -> String {
    format!("/items/{}", segment(id))
}

/// Path of a category listing; an empty `id` does not round-trip either
pub fn category(id: impl Display) -> String {
    format!("/items/category/{}", segment(id))
}

pub fn login() -> String {
    "/login".to_string()
}

pub fn register() -> String {
    "/register".to_string()
}

pub fn not_found() -> String {
    "/notfound".to_string()
}

pub fn filter() -> String {
    "/filter".to_string()
}

pub fn create_item() -> String {
    "/items/create".to_string()
}

pub fn views() -> String {
    "/views".to_string()
}

pub fn likes() -> String {
    "/likes".to_string()
}

pub fn settings() -> String {
    "/settings".to_string()
}

pub fn forgot_password() -> String {
    "/forgot-password".to_string()
}

pub fn reset_password(token: &str) -> String {
    with_token("/reset-password", token)
}

pub fn account_verification(token: &str) -> String {
    with_token("/account-verification", token)
}
