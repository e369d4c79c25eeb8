//! Headless in-memory platform.
//!
//! Implements the [`platform`](crate::platform) traits on plain data so the
//! router can run without a browser: in tests, in server-side smoke checks,
//! or in tools that pre-render routes.
//!
//! - [`MemoryDocument`] — title, head `<meta>` list and body markup. Elements
//!   are markup strings.
//! - [`MemoryHistory`] — an entry stack with `back`/`forward` that notify
//!   pop-state listeners the way a browser does.
//! - [`MemoryFetcher`] — canned responses per URL; unknown URLs get a 404.
//! - [`MemoryBackend`] — all of the above plus a
//!   [`LocalPool`](futures::executor::LocalPool) that runs spawned fetches
//!   when asked to.
//!
//! # Example
//!
//! ```
//! use spa_navigator::memory::MemoryBackend;
//! use spa_navigator::{Handler, Router};
//!
//! let mut backend = MemoryBackend::new("/");
//! backend.fetcher.respond("about.html", "<h1>About</h1>");
//!
//! let router = Router::new([("/about", Handler::file("about.html"))], backend.platform()).unwrap();
//! router.navigate("/about");
//!
//! assert_eq!(backend.document.body(), "");
//! backend.run_until_stalled();
//! assert_eq!(backend.document.body(), "<h1>About</h1>");
//! ```

use crate::platform::{
    Document, FetchError, Fetcher, History, Platform, PopStateListener, Response, Spawner,
    Subscription,
};
use crate::trace_log;
use futures::executor::LocalPool;
use futures::future::{FutureExt, LocalBoxFuture};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

// ============================================================================
// MemoryDocument
// ============================================================================

/// A `<meta name=… content=…>` element in the head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaElement {
    pub name: String,
    pub content: String,
}

/// In-memory document whose elements are markup strings.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    title: RefCell<String>,
    head: RefCell<Vec<MetaElement>>,
    body: RefCell<String>,
    body_mutations: Cell<usize>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current title.
    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }

    /// Current body markup.
    pub fn body(&self) -> String {
        self.body.borrow().clone()
    }

    /// Number of body writes (replacements and appends) so far.
    pub fn body_mutations(&self) -> usize {
        self.body_mutations.get()
    }

    /// All head meta elements, in insertion order.
    pub fn metas(&self) -> Vec<MetaElement> {
        self.head.borrow().clone()
    }

    /// Contents of every meta element with this name, in insertion order.
    pub fn meta_contents(&self, name: &str) -> Vec<String> {
        self.head
            .borrow()
            .iter()
            .filter(|meta| meta.name == name)
            .map(|meta| meta.content.clone())
            .collect()
    }

    fn touch_body(&self) {
        self.body_mutations.set(self.body_mutations.get() + 1);
    }
}

impl Document for MemoryDocument {
    type Element = String;

    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = title.to_string();
    }

    fn set_body_html(&self, html: &str) {
        *self.body.borrow_mut() = html.to_string();
        self.touch_body();
    }

    fn append_to_body(&self, element: String) {
        self.body.borrow_mut().push_str(&element);
        self.touch_body();
    }

    fn set_meta_content(&self, name: &str, content: &str) -> bool {
        let mut head = self.head.borrow_mut();
        match head.iter_mut().find(|meta| meta.name == name) {
            Some(meta) => {
                meta.content = content.to_string();
                true
            }
            None => false,
        }
    }

    fn append_meta(&self, name: &str, content: &str) {
        self.head.borrow_mut().push(MetaElement {
            name: name.to_string(),
            content: content.to_string(),
        });
    }

    fn has_meta(&self, name: &str, content: &str) -> bool {
        self.head
            .borrow()
            .iter()
            .any(|meta| meta.name == name && meta.content == content)
    }
}

// ============================================================================
// MemoryHistory
// ============================================================================

#[derive(Default)]
struct HistoryInner {
    entries: RefCell<Vec<String>>,
    index: Cell<usize>,
    listeners: RefCell<Vec<(u64, PopStateListener)>>,
    next_listener: Cell<u64>,
}

/// In-memory history stack.
///
/// Cloning yields another handle onto the same stack.
#[derive(Clone, Default)]
pub struct MemoryHistory {
    inner: Rc<HistoryInner>,
}

impl MemoryHistory {
    /// History with a single entry.
    pub fn new(initial: impl Into<String>) -> Self {
        let history = Self::default();
        history.inner.entries.borrow_mut().push(initial.into());
        history
    }

    /// Number of entries on the stack.
    pub fn len(&self) -> usize {
        self.inner.entries.borrow().len()
    }

    /// `true` if the stack has no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.entries.borrow().is_empty()
    }

    /// Number of registered pop-state listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Step back one entry and notify listeners. Returns `false` at the start.
    pub fn back(&self) -> bool {
        let index = self.inner.index.get();
        if index == 0 {
            return false;
        }
        self.inner.index.set(index - 1);
        self.notify();
        true
    }

    /// Step forward one entry and notify listeners. Returns `false` at the end.
    pub fn forward(&self) -> bool {
        let index = self.inner.index.get();
        if index + 1 >= self.len() {
            return false;
        }
        self.inner.index.set(index + 1);
        self.notify();
        true
    }

    fn notify(&self) {
        let path = self.current_path();
        // Snapshot so listeners may subscribe/unsubscribe while running.
        let listeners: Vec<PopStateListener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        trace_log!("popstate '{}' -> {} listener(s)", path, listeners.len());
        for listener in listeners {
            listener(&path);
        }
    }
}

impl History for MemoryHistory {
    fn current_path(&self) -> String {
        self.inner
            .entries
            .borrow()
            .get(self.inner.index.get())
            .cloned()
            .unwrap_or_else(|| "/".to_string())
    }

    fn push_state(&self, path: &str) {
        let mut entries = self.inner.entries.borrow_mut();
        if entries.is_empty() {
            entries.push(path.to_string());
            self.inner.index.set(0);
            return;
        }
        // Pushing drops the forward history.
        let index = self.inner.index.get();
        entries.truncate(index + 1);
        entries.push(path.to_string());
        self.inner.index.set(index + 1);
    }

    fn subscribe_pop_state(&self, listener: PopStateListener) -> Subscription {
        let id = self.inner.next_listener.get();
        self.inner.next_listener.set(id + 1);
        self.inner.listeners.borrow_mut().push((id, listener));

        let inner: Weak<HistoryInner> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.listeners.borrow_mut().retain(|(other, _)| *other != id);
            }
        })
    }
}

// ============================================================================
// MemoryFetcher
// ============================================================================

/// Fetcher serving canned responses.
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    responses: RefCell<HashMap<String, Result<Response, FetchError>>>,
    requests: RefCell<Vec<String>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `200 OK` with `body` for `url`.
    pub fn respond(&self, url: impl Into<String>, body: impl Into<String>) {
        self.responses
            .borrow_mut()
            .insert(url.into(), Ok(Response::ok(body)));
    }

    /// Serve an arbitrary response for `url`.
    pub fn respond_with(&self, url: impl Into<String>, response: Response) {
        self.responses.borrow_mut().insert(url.into(), Ok(response));
    }

    /// Fail requests for `url` with a network error.
    pub fn fail(&self, url: impl Into<String>, message: impl Into<String>) {
        self.responses
            .borrow_mut()
            .insert(url.into(), Err(FetchError::new(message)));
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetcher for MemoryFetcher {
    fn fetch(&self, url: &str) -> LocalBoxFuture<'static, Result<Response, FetchError>> {
        self.requests.borrow_mut().push(url.to_string());
        let result = self
            .responses
            .borrow()
            .get(url)
            .cloned()
            .unwrap_or_else(|| Ok(Response::new(404, "")));
        futures::future::ready(result).boxed_local()
    }
}

// ============================================================================
// MemoryBackend
// ============================================================================

/// Complete headless platform with a local executor.
pub struct MemoryBackend {
    pub document: Rc<MemoryDocument>,
    pub history: MemoryHistory,
    pub fetcher: Rc<MemoryFetcher>,
    pool: LocalPool,
}

impl MemoryBackend {
    /// Backend whose location starts at `initial_path`.
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            document: Rc::new(MemoryDocument::new()),
            history: MemoryHistory::new(initial_path),
            fetcher: Rc::new(MemoryFetcher::new()),
            pool: LocalPool::new(),
        }
    }

    /// Platform handles for a router.
    pub fn platform(&self) -> Platform<String> {
        let spawner: Rc<dyn Spawner> = Rc::new(self.pool.spawner());
        Platform::new(
            self.document.clone(),
            Rc::new(self.history.clone()),
            self.fetcher.clone(),
            spawner,
        )
    }

    /// Run spawned fetch tasks until none can make progress.
    pub fn run_until_stalled(&mut self) {
        self.pool.run_until_stalled();
    }
}
