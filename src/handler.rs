//! Route handlers.
//!
//! A [`Handler`] is what runs when a pattern matches. It comes in three
//! shapes, all dispatched with an exhaustive `match` by the router:
//!
//! | Variant              | Dispatch                                                  |
//! |----------------------|-----------------------------------------------------------|
//! | [`Handler::File`]    | fetch the (relatively adjusted) file, inject its markup   |
//! | [`Handler::View`]    | call [`View::render`]; the view owns body management      |
//! | [`Handler::Render`]  | call the function, clear the body, append the element     |
//!
//! `E` is the element type of the embedding document (see
//! [`Document`](crate::Document)).
//!
//! # Example
//!
//! ```
//! use spa_navigator::{Handler, RouteParams};
//!
//! let about: Handler<String> = Handler::file("about.html");
//! let user: Handler<String> = Handler::render(|params: &RouteParams| {
//!     format!("<h1>User {}</h1>", params.get("id").unwrap_or("?"))
//! });
//!
//! assert!(about.is_file());
//! assert!(!user.is_file());
//! ```

use crate::RouteParams;
use std::fmt;
use std::rc::Rc;

/// A pre-built view that renders itself into the document.
///
/// Unlike [`Handler::Render`], the router does not clear the body before
/// calling a view; the view decides what to replace.
pub trait View {
    /// Render the view for the given route parameters.
    fn render(&self, params: &RouteParams);
}

/// Render function producing an element from route parameters.
pub type RenderFn<E> = Rc<dyn Fn(&RouteParams) -> E>;

/// What to run when a route matches.
pub enum Handler<E> {
    /// File path fetched and injected as raw body markup.
    File(String),
    /// Pre-built view object.
    View(Rc<dyn View>),
    /// Pure function from params to a renderable element.
    Render(RenderFn<E>),
}

impl<E> Handler<E> {
    /// File handler.
    pub fn file(path: impl Into<String>) -> Self {
        Handler::File(path.into())
    }

    /// View handler.
    pub fn view<V>(view: V) -> Self
    where
        V: View + 'static,
    {
        Handler::View(Rc::new(view))
    }

    /// Function handler.
    pub fn render<F>(render: F) -> Self
    where
        F: Fn(&RouteParams) -> E + 'static,
    {
        Handler::Render(Rc::new(render))
    }

    /// `true` for [`Handler::File`].
    pub fn is_file(&self) -> bool {
        matches!(self, Handler::File(_))
    }

    /// Short variant name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Handler::File(_) => "file",
            Handler::View(_) => "view",
            Handler::Render(_) => "render",
        }
    }
}

// Manual impl: `E` itself need not be `Clone`.
impl<E> Clone for Handler<E> {
    fn clone(&self) -> Self {
        match self {
            Handler::File(path) => Handler::File(path.clone()),
            Handler::View(view) => Handler::View(Rc::clone(view)),
            Handler::Render(render) => Handler::Render(Rc::clone(render)),
        }
    }
}

impl<E> fmt::Debug for Handler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::File(path) => f.debug_tuple("File").field(path).finish(),
            Handler::View(_) => f.write_str("View(..)"),
            Handler::Render(_) => f.write_str("Render(..)"),
        }
    }
}

impl<E> From<&str> for Handler<E> {
    fn from(path: &str) -> Self {
        Handler::File(path.to_string())
    }
}

impl<E> From<String> for Handler<E> {
    fn from(path: String) -> Self {
        Handler::File(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recorder {
        seen: Rc<RefCell<Vec<String>>>,
    }

    impl View for Recorder {
        fn render(&self, params: &RouteParams) {
            self.seen
                .borrow_mut()
                .push(params.get("id").unwrap_or_default().to_string());
        }
    }

    #[test]
    fn test_handler_kinds() {
        let file: Handler<()> = "page.html".into();
        let render: Handler<()> = Handler::render(|_| ());
        let view: Handler<()> = Handler::view(Recorder {
            seen: Rc::default(),
        });

        assert_eq!(file.kind(), "file");
        assert_eq!(render.kind(), "render");
        assert_eq!(view.kind(), "view");
        assert!(file.is_file());
    }

    #[test]
    fn test_clone_shares_view() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let handler: Handler<()> = Handler::view(Recorder { seen: seen.clone() });
        let copy = handler.clone();

        let mut params = RouteParams::new();
        params.insert("id", "7");
        if let Handler::View(view) = copy {
            view.render(&params);
        }
        assert_eq!(*seen.borrow(), vec!["7".to_string()]);
    }

    #[test]
    fn test_debug_output() {
        let handler: Handler<()> = Handler::file("a.html");
        assert_eq!(format!("{:?}", handler), "File(\"a.html\")");
    }
}
