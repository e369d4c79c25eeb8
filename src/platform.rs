//! Capabilities the router consumes from its host.
//!
//! The router never touches a real DOM, history stack or network. It talks to
//! four narrow traits instead, bundled in a [`Platform`]:
//!
//! - [`Document`] — title, head meta elements, body markup and elements
//! - [`History`] — current path, pushing entries, back/forward notifications
//! - [`Fetcher`] — fetch-like network primitive
//! - [`Spawner`] — runs the fetch task on the page's single execution context
//!
//! All methods take `&self`: host objects are handles onto state owned
//! elsewhere (the page), and are used from one thread only.
//!
//! A headless implementation lives in [`memory`](crate::memory).

use crate::RouterError;
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use std::fmt;
use std::rc::Rc;

// ============================================================================
// Document
// ============================================================================

/// Document head/body mutation primitives.
pub trait Document {
    /// Renderable element produced by function handlers.
    type Element;

    /// Overwrite the document title.
    fn set_title(&self, title: &str);

    /// Replace the entire body content with raw markup.
    fn set_body_html(&self, html: &str);

    /// Append an element to the body.
    fn append_to_body(&self, element: Self::Element);

    /// Update the `content` of the first `<meta name=…>` in the head.
    ///
    /// Returns `false` if no such element exists.
    fn set_meta_content(&self, name: &str, content: &str) -> bool;

    /// Append a new `<meta name=… content=…>` to the head.
    fn append_meta(&self, name: &str, content: &str);

    /// `true` if a `<meta>` with this name and content is in the head.
    fn has_meta(&self, name: &str, content: &str) -> bool;
}

// ============================================================================
// History
// ============================================================================

/// Callback invoked with the restored path on back/forward.
pub type PopStateListener = Rc<dyn Fn(&str)>;

/// Browser location and history primitives.
pub trait History {
    /// Path of the current location.
    fn current_path(&self) -> String;

    /// Push a new entry for `path` without reloading.
    fn push_state(&self, path: &str);

    /// Register a back/forward listener.
    ///
    /// The listener stays registered until the returned handle is dropped or
    /// [`Subscription::unsubscribe`] is called.
    fn subscribe_pop_state(&self, listener: PopStateListener) -> Subscription;
}

/// Handle to a registered listener. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Handle that runs `cancel` when unsubscribed.
    pub fn new<F>(cancel: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Unsubscribe now.
    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

// ============================================================================
// Fetcher
// ============================================================================

/// A settled response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub text: String,
}

impl Response {
    /// Response with status and body.
    pub fn new(status: u16, text: impl Into<String>) -> Self {
        Self {
            status,
            text: text.into(),
        }
    }

    /// `200 OK` with the given body.
    pub fn ok(text: impl Into<String>) -> Self {
        Self::new(200, text)
    }

    /// `true` for 2xx statuses.
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request could not be completed at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FetchError {}

/// Fetch-like network primitive.
pub trait Fetcher {
    /// Fetch `url` and read its body as text.
    fn fetch(&self, url: &str) -> LocalBoxFuture<'static, Result<Response, FetchError>>;
}

// ============================================================================
// Spawner
// ============================================================================

/// Runs a future to completion on the current thread without blocking.
pub trait Spawner {
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) -> Result<(), RouterError>;
}

impl Spawner for futures::executor::LocalSpawner {
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) -> Result<(), RouterError> {
        LocalSpawnExt::spawn_local(self, task).map_err(|err| RouterError::Spawn {
            message: err.to_string(),
        })
    }
}

// ============================================================================
// Platform
// ============================================================================

/// The host capabilities a router is built on.
pub struct Platform<E> {
    pub document: Rc<dyn Document<Element = E>>,
    pub history: Rc<dyn History>,
    pub fetcher: Rc<dyn Fetcher>,
    pub spawner: Rc<dyn Spawner>,
}

impl<E> Platform<E> {
    pub fn new(
        document: Rc<dyn Document<Element = E>>,
        history: Rc<dyn History>,
        fetcher: Rc<dyn Fetcher>,
        spawner: Rc<dyn Spawner>,
    ) -> Self {
        Self {
            document,
            history,
            fetcher,
            spawner,
        }
    }
}

impl<E> Clone for Platform<E> {
    fn clone(&self) -> Self {
        Self {
            document: Rc::clone(&self.document),
            history: Rc::clone(&self.history),
            fetcher: Rc::clone(&self.fetcher),
            spawner: Rc::clone(&self.spawner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_shut_down_executor_refuses_spawn() {
        let pool = futures::executor::LocalPool::new();
        let spawner = pool.spawner();
        drop(pool);

        let result = Spawner::spawn_local(&spawner, Box::pin(async {}));
        assert!(matches!(result, Err(RouterError::Spawn { .. })));
    }

    #[test]
    fn test_response_status() {
        assert!(Response::ok("x").is_ok());
        assert!(Response::new(204, "").is_ok());
        assert!(!Response::new(404, "missing").is_ok());
        assert!(!Response::new(500, "").is_ok());
        assert!(!Response::new(301, "").is_ok());
    }

    #[test]
    fn test_subscription_cancels_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));

        subscription.unsubscribe();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_subscription_cancels_on_drop() {
        let calls = Rc::new(Cell::new(0));
        {
            let counter = calls.clone();
            let _subscription = Subscription::new(move || counter.set(counter.get() + 1));
        }
        assert_eq!(calls.get(), 1);
    }
}
