//! Integration tests for per-route metadata

mod common;

use common::*;
use spa_navigator::*;

#[test]
fn test_title_and_keywords_accumulate() {
    let backend = backend_at("/");
    let router = Router::new([("/about", markup("about"))], backend.platform()).unwrap();
    router.meta("/about", RouteMeta::new().title("About").keywords(["a", "b"]));

    router.navigate("/about");
    assert_eq!(backend.document.title(), "About");
    assert_eq!(backend.document.meta_contents("keywords"), vec!["a", "b"]);

    router.navigate("/about");
    assert_eq!(
        backend.document.meta_contents("keywords"),
        vec!["a", "b", "a", "b"]
    );
}

#[test]
fn test_dedupe_keywords_option() {
    let backend = backend_at("/");
    let router = Router::with_config(
        [("/about", markup("about"))],
        backend.platform(),
        RouterConfig::new().dedupe_keywords(true),
    )
    .unwrap();
    router.meta("/about", RouteMeta::new().keywords(["a", "b", "a"]));

    router.navigate("/about");
    router.navigate("/about");
    assert_eq!(backend.document.meta_contents("keywords"), vec!["a", "b"]);
}

#[test]
fn test_description_is_upserted() {
    let backend = backend_at("/");
    let router = Router::new(
        [("/one", markup("one")), ("/two", markup("two"))],
        backend.platform(),
    )
    .unwrap();
    router.meta("/one", RouteMeta::new().description("first"));
    router.meta("/two", RouteMeta::new().description("second"));

    router.navigate("/one");
    assert_eq!(backend.document.meta_contents("description"), vec!["first"]);

    router.navigate("/two");
    router.navigate("/one");
    assert_eq!(backend.document.meta_contents("description"), vec!["first"]);
}

#[test]
fn test_missing_or_empty_fields_leave_document_alone() {
    let backend = backend_at("/");
    backend.document.set_title("Site");
    let router = Router::new([("/plain", markup("plain"))], backend.platform()).unwrap();
    router.meta("/plain", RouteMeta::new().title("").description(""));

    router.navigate("/plain");
    assert_eq!(backend.document.title(), "Site");
    assert!(backend.document.metas().is_empty());
}

#[test]
fn test_meta_applied_even_without_route() {
    let backend = backend_at("/");
    let router = Router::new(Vec::<(&str, Handler<String>)>::new(), backend.platform()).unwrap();
    router.meta("/orphan", RouteMeta::new().title("Orphan"));

    let result = router.navigate("/orphan");
    assert!(result.is_not_found());
    assert_eq!(backend.document.title(), "Orphan");
}

#[test]
fn test_meta_overwrite() {
    let backend = backend_at("/");
    let router = Router::new([("/about", markup("about"))], backend.platform()).unwrap();
    router.meta("/about", RouteMeta::new().title("Old"));
    router.meta("/about", RouteMeta::new().title("New"));

    router.navigate("/about");
    assert_eq!(backend.document.title(), "New");
}

#[test]
fn test_dynamic_route_meta_needs_literal_path() {
    let backend = backend_at("/");
    let router = Router::new([("/user/:id", echo_params())], backend.platform()).unwrap();
    router.meta("/user/:id", RouteMeta::new().title("User"));

    router.navigate("/user/42");
    assert_eq!(backend.document.title(), "");

    // The literal pattern string is itself a matching path.
    router.navigate("/user/:id");
    assert_eq!(backend.document.title(), "User");
}

#[test]
fn test_pattern_meta_lookup() {
    let backend = backend_at("/");
    let router = Router::with_config(
        [("/user/:id", echo_params())],
        backend.platform(),
        RouterConfig::new().meta_lookup(MetaLookup::Pattern),
    )
    .unwrap();
    router.meta("/user/:id", RouteMeta::new().title("User"));

    router.navigate("/user/42");
    assert_eq!(backend.document.title(), "User");
}
