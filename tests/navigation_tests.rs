//! Integration tests for matching, dispatch and programmatic navigation

mod common;

use common::*;
use spa_navigator::*;

#[test]
fn test_static_route_has_empty_params() {
    let backend = backend_at("/");
    let router = Router::new(
        [("/", markup("home")), ("/about", markup("about"))],
        backend.platform(),
    )
    .unwrap();

    for path in ["/", "/about"] {
        let matched = router.match_dynamic_route(path).unwrap();
        assert_eq!(matched.pattern, path);
        assert!(matched.params.is_empty());
    }
}

#[test]
fn test_dynamic_route_extracts_params() {
    let backend = backend_at("/");
    let router = Router::new([("/user/:id", echo_params())], backend.platform()).unwrap();

    let matched = router.match_dynamic_route("/user/42").unwrap();
    assert_param_equals(&matched.params, "id", "42");
    assert_eq!(matched.params.len(), 1);

    let result = router.navigate("/user/42");
    assert_eq!(
        result,
        NavigationResult::Rendered {
            path: "/user/42".to_string(),
            pattern: "/user/:id".to_string(),
        }
    );
    assert_eq!(backend.document.body(), "<p>id=42</p>");
}

#[test]
fn test_no_match_is_distinct_from_empty_params() {
    let backend = backend_at("/");
    let router = Router::new([("/user/:id", echo_params())], backend.platform()).unwrap();

    assert!(router.match_dynamic_route("/user").is_none());
    assert!(router.match_dynamic_route("/user/42/posts").is_none());
}

#[test]
fn test_params_in_token_order() {
    let backend = backend_at("/");
    let router = Router::new(
        [("/:org/:repo/issues/:number", echo_params())],
        backend.platform(),
    )
    .unwrap();

    router.navigate("/rust-lang/cargo/issues/7");
    assert_eq!(
        backend.document.body(),
        "<p>org=rust-lang</p><p>repo=cargo</p><p>number=7</p>"
    );
}

#[test]
fn test_overlap_dynamic_registered_first() {
    let backend = backend_at("/");
    let router = Router::new(
        [("/a/:x", markup("dynamic")), ("/a/fixed", markup("fixed"))],
        backend.platform(),
    )
    .unwrap();

    router.navigate("/a/fixed");
    assert_eq!(backend.document.body(), "dynamic");
}

#[test]
fn test_overlap_fixed_registered_first() {
    let backend = backend_at("/");
    let router = Router::new(
        [("/a/fixed", markup("fixed")), ("/a/:x", markup("dynamic"))],
        backend.platform(),
    )
    .unwrap();

    router.navigate("/a/fixed");
    assert_eq!(backend.document.body(), "fixed");

    router.navigate("/a/other");
    assert_eq!(backend.document.body(), "dynamic");
}

#[test]
fn test_no_match_without_fallback_leaves_body_alone() {
    let backend = backend_at("/");
    let router = Router::new([("/", markup("home"))], backend.platform()).unwrap();

    let result = router.navigate("/missing");
    assert!(result.is_not_found());
    assert_eq!(backend.document.body_mutations(), 0);
    assert_eq!(backend.document.body(), "");
}

#[test]
fn test_no_match_with_fallback_renders_fallback() {
    let backend = backend_at("/");
    let router = Router::new([("/", markup("home"))], backend.platform()).unwrap();
    router.set_404(markup("<h1>404</h1>"));

    let result = router.navigate("/missing");
    assert!(result.is_fallback());
    assert_eq!(backend.document.body(), "<h1>404</h1>");
}

#[test]
fn test_set_404_last_write_wins() {
    let backend = backend_at("/");
    let router = Router::new(Vec::<(&str, Handler<String>)>::new(), backend.platform()).unwrap();
    router.set_404(markup("first"));
    router.set_404(markup("second"));

    router.load_route("/anything");
    assert_eq!(backend.document.body(), "second");
}

#[test]
fn test_fallback_receives_empty_params() {
    let backend = backend_at("/");
    let view = RecordingView::default();
    let router = Router::new([("/", markup("home"))], backend.platform()).unwrap();
    router.set_404(Handler::view(view.clone()));

    router.navigate("/user/42");
    assert_eq!(view.count(), 1);
    assert!(view.last().unwrap().is_empty());
}

#[test]
fn test_function_handler_clears_body_before_insert() {
    let backend = backend_at("/");
    let router = Router::new(
        [("/one", markup("<p>one</p>")), ("/two", markup("<p>two</p>"))],
        backend.platform(),
    )
    .unwrap();

    router.navigate("/one");
    router.navigate("/two");
    assert_eq!(backend.document.body(), "<p>two</p>");
    // Clear + append per render.
    assert_eq!(backend.document.body_mutations(), 4);
}

#[test]
fn test_view_handler_does_not_touch_body() {
    let backend = backend_at("/");
    let view = RecordingView::default();
    let router = Router::new(
        [("/profile/:name", Handler::view(view.clone()))],
        backend.platform(),
    )
    .unwrap();

    let result = router.navigate("/profile/ada");
    assert!(result.is_matched());
    assert_eq!(view.count(), 1);
    assert_param_equals(&view.last().unwrap(), "name", "ada");
    assert_eq!(backend.document.body_mutations(), 0);
}

#[test]
fn test_navigate_pushes_one_history_entry() {
    let backend = backend_at("/");
    let router = Router::new([("/:page", markup("page"))], backend.platform()).unwrap();

    router.navigate("/a");
    router.navigate("/b");
    assert_eq!(backend.history.len(), 3);
    assert_eq!(backend.history.current_path(), "/b");

    // load_route alone does not touch history.
    router.load_route("/c");
    assert_eq!(backend.history.len(), 3);
}

#[test]
fn test_load_current() {
    let backend = backend_at("/start");
    let router = Router::new([("/start", markup("start"))], backend.platform()).unwrap();

    let result = router.load_current();
    assert_eq!(result.path(), "/start");
    assert_eq!(backend.document.body(), "start");
}

#[test]
fn test_add_route_after_construction() {
    let backend = backend_at("/");
    let router = Router::new([("/", markup("home"))], backend.platform()).unwrap();

    assert!(router.navigate("/late").is_not_found());
    router.add_route("/late", markup("late")).unwrap();
    assert!(router.navigate("/late").is_matched());
    assert_eq!(backend.document.body(), "late");
    assert_eq!(router.patterns(), vec!["/", "/late"]);
}

#[test]
fn test_handler_may_reenter_router() {
    let backend = backend_at("/");
    let router = Router::new([("/target", markup("target"))], backend.platform()).unwrap();

    let handle = router.clone();
    router
        .add_route(
            "/redirect",
            Handler::render(move |_| {
                handle.navigate("/target");
                String::new()
            }),
        )
        .unwrap();

    router.navigate("/redirect");
    assert_eq!(backend.history.current_path(), "/target");
}
