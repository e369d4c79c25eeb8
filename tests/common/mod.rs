//! Test utilities for router integration tests
//!
//! Provides the headless backend, a recording view, and assertion helpers.

#![allow(dead_code)]

use spa_navigator::memory::MemoryBackend;
use spa_navigator::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Route logs to the test output when `RUST_LOG` is set.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Backend positioned at `path`
pub fn backend_at(path: &str) -> MemoryBackend {
    init_logging();
    MemoryBackend::new(path)
}

/// Function handler rendering a fixed piece of markup
pub fn markup(html: &'static str) -> Handler<String> {
    Handler::render(move |_| html.to_string())
}

/// Function handler rendering `<p>name=value</p>` for every param
pub fn echo_params() -> Handler<String> {
    Handler::render(|params: &RouteParams| {
        params
            .iter()
            .map(|(name, value)| format!("<p>{}={}</p>", name, value))
            .collect()
    })
}

/// View that records every render call instead of touching the document
#[derive(Clone, Default)]
pub struct RecordingView {
    pub renders: Rc<RefCell<Vec<RouteParams>>>,
}

impl RecordingView {
    pub fn count(&self) -> usize {
        self.renders.borrow().len()
    }

    pub fn last(&self) -> Option<RouteParams> {
        self.renders.borrow().last().cloned()
    }
}

impl View for RecordingView {
    fn render(&self, params: &RouteParams) {
        self.renders.borrow_mut().push(params.clone());
    }
}

/// Assert that route parameters contain expected key-value pair
pub fn assert_param_equals(params: &RouteParams, key: &str, expected: &str) {
    let value = params.get(key);
    assert!(
        value.is_some(),
        "Parameter '{}' not found in RouteParams",
        key
    );
    assert_eq!(
        value.unwrap(),
        expected,
        "Parameter '{}' has wrong value",
        key
    );
}
