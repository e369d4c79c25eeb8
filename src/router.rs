//! The router.
//!
//! [`Router`] ties the pieces together. A load runs in this order:
//!
//! 1. bump the navigation id
//! 2. match the path against the route table (first registered wins)
//! 3. dispatch the matched handler, or the 404 handler, or nothing
//! 4. apply the metadata registered for the path
//!
//! File handlers only *start* a fetch in step 3; the markup is injected later,
//! when the spawned task completes, and only if no newer load has started
//! since. Step 4 therefore always runs before fetched markup lands.
//!
//! # Example
//!
//! ```
//! use spa_navigator::memory::MemoryBackend;
//! use spa_navigator::{Handler, RouteMeta, Router};
//!
//! let backend = MemoryBackend::new("/");
//! let router = Router::new(
//!     [
//!         ("/", Handler::render(|_| "<h1>Home</h1>".to_string())),
//!         ("/user/:id", Handler::render(|p| format!("<h1>User {}</h1>", p.get("id").unwrap_or("?")))),
//!     ],
//!     backend.platform(),
//! )
//! .unwrap();
//! router.meta("/", RouteMeta::new().title("Home"));
//!
//! router.navigate("/user/42");
//! assert_eq!(backend.document.body(), "<h1>User 42</h1>");
//!
//! router.navigate("/");
//! assert_eq!(backend.document.title(), "Home");
//! ```

use crate::platform::{Platform, PopStateListener, Subscription};
use crate::resolve::resolve_resource_path;
use crate::state::{RouteMatch, RouterState};
use crate::{
    debug_log, error_log, trace_log, warn_log, Handler, LoadFailure, NavigationResult, RouteMeta,
    RouteParams, RouterConfig, RouterError,
};
use futures::FutureExt;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Meta element name for the page description.
const DESCRIPTION: &str = "description";
/// Meta element name for keywords.
const KEYWORDS: &str = "keywords";

/// Where a handler being dispatched came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Route,
    Fallback,
}

/// What dispatching a handler did.
#[derive(Debug)]
enum Dispatched {
    /// Rendered synchronously.
    Rendered,
    /// A fetch was spawned for this URL.
    Loading(String),
    /// The fetch could not be spawned and the 404 handler ran instead.
    Recovered,
    /// The fetch could not be spawned and nothing rendered.
    Failed(RouterError),
}

struct RouterInner<E> {
    state: RefCell<RouterState<E>>,
    platform: Platform<E>,
    subscription: RefCell<Option<Subscription>>,
}

/// Client-side router.
///
/// `Router` is a cheap handle; clones share the same route table. The
/// back/forward subscription is released by [`teardown`](Self::teardown) or
/// when the last handle is dropped.
pub struct Router<E: 'static> {
    inner: Rc<RouterInner<E>>,
}

impl<E: 'static> Router<E> {
    /// Build a router from `(pattern, handler)` pairs with the default
    /// configuration and subscribe to back/forward navigation.
    pub fn new<I, P>(routes: I, platform: Platform<E>) -> Result<Self, RouterError>
    where
        I: IntoIterator<Item = (P, Handler<E>)>,
        P: AsRef<str>,
    {
        Self::with_config(routes, platform, RouterConfig::default())
    }

    /// Build a router with an explicit configuration.
    pub fn with_config<I, P>(
        routes: I,
        platform: Platform<E>,
        config: RouterConfig,
    ) -> Result<Self, RouterError>
    where
        I: IntoIterator<Item = (P, Handler<E>)>,
        P: AsRef<str>,
    {
        let mut state = RouterState::new(config);
        for (pattern, handler) in routes {
            state.add_route(pattern.as_ref(), handler)?;
        }

        let router = Self {
            inner: Rc::new(RouterInner {
                state: RefCell::new(state),
                platform,
                subscription: RefCell::new(None),
            }),
        };
        router.subscribe();
        Ok(router)
    }

    fn subscribe(&self) {
        let weak: Weak<RouterInner<E>> = Rc::downgrade(&self.inner);
        let listener: PopStateListener = Rc::new(move |path: &str| {
            if let Some(inner) = weak.upgrade() {
                debug_log!("Back/forward navigation to '{}'", path);
                Router { inner }.load_route(path);
            }
        });
        let subscription = self.inner.platform.history.subscribe_pop_state(listener);
        *self.inner.subscription.borrow_mut() = Some(subscription);
    }

    /// Stop reacting to back/forward navigation.
    pub fn teardown(&self) {
        if let Some(subscription) = self.inner.subscription.borrow_mut().take() {
            debug_log!("Router torn down, unsubscribing from back/forward");
            subscription.unsubscribe();
        }
    }

    /// `true` until [`teardown`](Self::teardown) is called.
    pub fn is_subscribed(&self) -> bool {
        self.inner.subscription.borrow().is_some()
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register another route after construction.
    pub fn add_route(&self, pattern: &str, handler: Handler<E>) -> Result<(), RouterError> {
        self.inner.state.borrow_mut().add_route(pattern, handler)
    }

    /// Set the handler used when nothing matches. Last write wins.
    pub fn set_404(&self, handler: Handler<E>) {
        self.inner.state.borrow_mut().set_fallback(handler);
    }

    /// Store or overwrite metadata for an exact route key.
    pub fn meta(&self, route: &str, meta: RouteMeta) {
        self.inner.state.borrow_mut().set_meta(route, meta);
    }

    /// Registered patterns, in matching order.
    pub fn patterns(&self) -> Vec<String> {
        self.inner
            .state
            .borrow()
            .patterns()
            .map(String::from)
            .collect()
    }

    /// Active configuration.
    pub fn config(&self) -> RouterConfig {
        self.inner.state.borrow().config().clone()
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Match `path` against the route table without dispatching anything.
    pub fn match_dynamic_route(&self, path: &str) -> Option<RouteMatch<E>> {
        self.inner.state.borrow_mut().match_path(path)
    }

    /// Push a history entry for `path`, then load it.
    pub fn navigate(&self, path: &str) -> NavigationResult {
        debug_log!("Navigating to '{}'", path);
        self.inner.platform.history.push_state(path);
        self.load_route(path)
    }

    /// Load whatever the history currently points at (initial page load).
    pub fn load_current(&self) -> NavigationResult {
        let path = self.inner.platform.history.current_path();
        self.load_route(&path)
    }

    /// Match, dispatch and apply metadata for `path`.
    ///
    /// Never fails: a missing route without fallback renders nothing, and
    /// file load failures are recovered asynchronously. A fetch task the
    /// spawner refuses is recovered synchronously through the 404 handler, or
    /// reported as [`NavigationResult::Failed`] when there is none. Panics
    /// raised by view or render handlers are not caught.
    pub fn load_route(&self, path: &str) -> NavigationResult {
        let generation = self.inner.state.borrow_mut().start_navigation();
        // Borrow released before dispatch so handlers may re-enter the router.
        let matched = self.match_dynamic_route(path);

        let result = match matched {
            Some(RouteMatch {
                pattern,
                handler,
                params,
            }) => {
                debug_log!(
                    "'{}' matched '{}', dispatching {} handler",
                    path,
                    pattern,
                    handler.kind()
                );
                match self.dispatch(handler, &params, generation, Origin::Route) {
                    Dispatched::Rendered => NavigationResult::Rendered {
                        path: path.to_string(),
                        pattern,
                    },
                    Dispatched::Loading(url) => NavigationResult::Loading {
                        path: path.to_string(),
                        url,
                    },
                    Dispatched::Recovered => NavigationResult::Fallback {
                        path: path.to_string(),
                    },
                    Dispatched::Failed(error) => NavigationResult::Failed {
                        path: path.to_string(),
                        error,
                    },
                }
            }
            None => {
                let fallback = self.inner.state.borrow().fallback();
                if let Some(handler) = fallback {
                    debug_log!("No route for '{}', dispatching 404 handler", path);
                    let params = RouteParams::new();
                    match self.dispatch(handler, &params, generation, Origin::Fallback) {
                        Dispatched::Failed(error) => NavigationResult::Failed {
                            path: path.to_string(),
                            error,
                        },
                        _ => NavigationResult::Fallback {
                            path: path.to_string(),
                        },
                    }
                } else {
                    debug_log!(
                        "{}",
                        RouterError::RouteNotFound {
                            path: path.to_string()
                        }
                    );
                    NavigationResult::NotFound {
                        path: path.to_string(),
                    }
                }
            }
        };

        self.update_meta(path);
        result
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Run a handler.
    fn dispatch(
        &self,
        handler: Handler<E>,
        params: &RouteParams,
        generation: u64,
        origin: Origin,
    ) -> Dispatched {
        let document = &self.inner.platform.document;
        match handler {
            Handler::File(file) => self.start_file_load(&file, generation, origin),
            Handler::View(view) => {
                view.render(params);
                Dispatched::Rendered
            }
            Handler::Render(render) => {
                let element = render(params);
                document.set_body_html("");
                document.append_to_body(element);
                Dispatched::Rendered
            }
        }
    }

    /// Resolve `file` against the current location and spawn its fetch.
    fn start_file_load(&self, file: &str, generation: u64, origin: Origin) -> Dispatched {
        let current = self.inner.platform.history.current_path();
        let policy = self.inner.state.borrow().config().relative_resolution;
        let url = resolve_resource_path(file, &current, policy).into_owned();
        trace_log!("Fetching '{}' (from '{}' at '{}')", url, file, current);

        let request = self.inner.platform.fetcher.fetch(&url);
        let weak = Rc::downgrade(&self.inner);
        let task_url = url.clone();
        let task = async move {
            let outcome = match request.await {
                Ok(response) if response.is_ok() => Ok(response.text),
                Ok(response) => Err(LoadFailure::Status(response.status)),
                Err(err) => Err(LoadFailure::Network(err.message)),
            };
            if let Some(inner) = weak.upgrade() {
                Router { inner }.finish_file_load(&task_url, outcome, generation, origin);
            }
        };

        match self.inner.platform.spawner.spawn_local(task.boxed_local()) {
            Ok(()) => Dispatched::Loading(url),
            Err(err) => {
                error_log!("{}", err);
                if origin == Origin::Fallback {
                    return Dispatched::Failed(err);
                }
                let Some(handler) = self.inner.state.borrow().fallback() else {
                    return Dispatched::Failed(err);
                };
                match self.dispatch(handler, &RouteParams::new(), generation, Origin::Fallback) {
                    Dispatched::Failed(err) => Dispatched::Failed(err),
                    _ => Dispatched::Recovered,
                }
            }
        }
    }

    fn finish_file_load(
        &self,
        url: &str,
        outcome: Result<String, LoadFailure>,
        generation: u64,
        origin: Origin,
    ) {
        if !self.inner.state.borrow().is_navigation_current(generation) {
            warn_log!("Discarding stale load of '{}'", url);
            return;
        }

        match outcome {
            Ok(html) => {
                debug_log!("Loaded '{}' ({} bytes)", url, html.len());
                self.inner.platform.document.set_body_html(&html);
            }
            Err(reason) => {
                let error = RouterError::RouteLoad {
                    url: url.to_string(),
                    reason,
                };
                warn_log!("{}", error);
                if origin == Origin::Fallback {
                    // The 404 page itself failed; retrying it would loop.
                    return;
                }
                let fallback = self.inner.state.borrow().fallback();
                if let Some(handler) = fallback {
                    self.dispatch(handler, &RouteParams::new(), generation, Origin::Fallback);
                }
            }
        }
    }

    // ========================================================================
    // Metadata
    // ========================================================================

    fn update_meta(&self, path: &str) {
        let (meta, dedupe) = {
            let state = self.inner.state.borrow();
            (state.meta_for(path), state.config().dedupe_keywords)
        };
        let Some(meta) = meta else {
            return;
        };
        debug_log!("Applying metadata for '{}'", path);

        let document = &self.inner.platform.document;
        if let Some(title) = meta.title.as_deref().filter(|t| !t.is_empty()) {
            document.set_title(title);
        }
        if let Some(description) = meta.description.as_deref().filter(|d| !d.is_empty()) {
            if !document.set_meta_content(DESCRIPTION, description) {
                document.append_meta(DESCRIPTION, description);
            }
        }
        for keyword in &meta.keywords {
            if dedupe && document.has_meta(KEYWORDS, keyword) {
                continue;
            }
            document.append_meta(KEYWORDS, keyword);
        }
    }
}

impl<E: 'static> Clone for Router<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E: 'static> fmt::Debug for Router<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("Router")
            .field("routes", &state.patterns().collect::<Vec<_>>())
            .field("navigation_id", &state.navigation_id())
            .field("subscribed", &self.is_subscribed())
            .finish_non_exhaustive()
    }
}
