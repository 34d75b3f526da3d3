//! End-to-end resolution over the marketplace table

use proptest::prelude::*;
use rentify_core::{links, routes, NavigationState, Shell, View};
use rstest::{fixture, rstest};

#[fixture]
fn shell() -> Shell {
    Shell::new().unwrap()
}

#[rstest]
#[case("/", View::Home)]
#[case("/items/category/5", View::CategoryDetails)]
#[case("/items/42", View::ItemDetails)]
#[case("/login", View::Login)]
#[case("/register", View::Register)]
#[case("/no/such/page", View::NotFound)]
fn test_reachable_routes(shell: Shell, #[case] path: &str, #[case] expected: View) {
    assert_eq!(shell.page_for(path).unwrap().view(), expected);
}

// Declared after the catch-all, so the catch-all answers for them
#[rstest]
#[case("/notfound")]
#[case("/filter")]
#[case("/views")]
#[case("/likes")]
#[case("/settings")]
#[case("/forgot-password")]
#[case("/reset-password?token=abc")]
#[case("/account-verification?token=abc")]
fn test_routes_after_catch_all_render_not_found(shell: Shell, #[case] path: &str) {
    let page = shell.page_for(path).unwrap();
    assert_eq!(page.view(), View::NotFound);
    assert_eq!(page.pattern(), "*");
    assert_eq!(page.route_index(), 5);
}

#[rstest]
fn test_filter_resolves_to_not_found(shell: Shell) {
    assert_eq!(shell.page_for("/filter").unwrap().view(), View::NotFound);
    assert_ne!(
        shell.page_for("/filter").unwrap().view(),
        View::FilterComponent
    );
}

#[rstest]
fn test_items_create_is_an_item_id(shell: Shell) {
    // `items/:id` precedes `/items/create`
    let page = shell.page_for(&links::create_item()).unwrap();
    assert_eq!(page.view(), View::ItemDetails);
    assert_eq!(page.param("id"), Some("create"));
}

#[rstest]
fn test_item_and_category_params(shell: Shell) {
    let item = shell.page_for("/items/42").unwrap();
    assert_eq!(item.pattern(), "items/:id");
    assert_eq!(item.param("id"), Some("42"));

    let category = shell.page_for("/items/category/5").unwrap();
    assert_eq!(category.param("id"), Some("5"));
}

#[rstest]
fn test_unreachable_routes_are_reported(shell: Shell) {
    let shadowed = shell.table().shadowed();
    let indices: Vec<usize> = shadowed.iter().map(|s| s.index).collect();
    assert_eq!(indices, (6..routes::ENTRIES.len()).collect::<Vec<_>>());

    let create = shadowed
        .iter()
        .find(|s| s.pattern == "/items/create")
        .unwrap();
    assert_eq!(create.by_pattern, "items/:id");

    let notfound = shadowed.iter().find(|s| s.pattern == "/notfound").unwrap();
    assert_eq!(notfound.by_pattern, "*");
}

#[rstest]
fn test_links_resolve_to_their_views(shell: Shell) {
    assert_eq!(shell.page_for(&links::home()).unwrap().view(), View::Home);
    assert_eq!(shell.page_for(&links::item(7)).unwrap().view(), View::ItemDetails);
    assert_eq!(
        shell.page_for(&links::category(3)).unwrap().view(),
        View::CategoryDetails
    );
    assert_eq!(shell.page_for(&links::login()).unwrap().view(), View::Login);
    assert_eq!(shell.page_for(&links::register()).unwrap().view(), View::Register);
}

#[rstest]
fn test_empty_ids_do_not_reach_detail_views(shell: Shell) {
    assert_eq!(links::item(""), "/items/");
    assert_eq!(shell.page_for(&links::item("")).unwrap().view(), View::NotFound);
    // `/items/category` binds "category" as an item id
    assert_eq!(
        shell.page_for(&links::category("")).unwrap().view(),
        View::ItemDetails
    );
}

#[rstest]
fn test_session_walk(shell: Shell) {
    let mut nav = NavigationState::new();
    nav.push(&links::login()).unwrap();
    nav.push(&links::item("bike 1")).unwrap();

    let page = shell.page(&nav).unwrap();
    assert_eq!(page.view(), View::ItemDetails);
    assert_eq!(page.param("id"), Some("bike 1"));

    nav.back();
    assert_eq!(shell.page(&nav).unwrap().view(), View::Login);
}

#[rstest]
fn test_invalid_input_rejected(shell: Shell) {
    assert!(shell.page_for("").is_err());
    assert!(shell.page_for("items/42").is_err());
}

proptest! {
    #[test]
    fn prop_every_path_gets_exactly_one_view(path in "/[a-z0-9/_-]{0,32}") {
        let shell = Shell::new().unwrap();
        let first = shell.page_for(&path).unwrap();
        let second = shell.page_for(&path).unwrap();
        prop_assert_eq!(first, second);
    }
}
