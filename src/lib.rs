//! # spa-navigator
//!
//! Client-side router for single-page applications.
//!
//! Routes map path patterns to handlers. A pattern may contain `:name`
//! segments, which match exactly one path segment and are handed to the
//! handler as [`RouteParams`]. Handlers come in three flavours:
//!
//! - [`Handler::File`] — fetch an HTML file and inject it into the body
//! - [`Handler::View`] — a pre-built [`View`] that renders itself
//! - [`Handler::Render`] — a function from params to an element
//!
//! After every load the router applies the [`RouteMeta`] registered for the
//! path (title, description, keywords).
//!
//! The router talks to the page only through the traits in [`platform`].
//! Implement them over `web-sys` in the browser, or use the headless
//! [`memory`] backend.
//!
//! ```
//! use spa_navigator::memory::MemoryBackend;
//! use spa_navigator::{Handler, Router};
//!
//! let mut backend = MemoryBackend::new("/");
//! backend.fetcher.respond("../post.html", "<article>…</article>");
//!
//! let router = Router::new(
//!     [
//!         ("/", Handler::render(|_| "<h1>Home</h1>".to_string())),
//!         ("/blog/:slug", Handler::file("post.html")),
//!     ],
//!     backend.platform(),
//! )
//! .unwrap();
//! router.set_404(Handler::render(|_| "<h1>Not found</h1>".to_string()));
//!
//! let result = router.navigate("/blog/hello-world");
//! assert_eq!(result.loading_url(), Some("../post.html"));
//!
//! backend.run_until_stalled();
//! assert_eq!(backend.document.body(), "<article>…</article>");
//! ```
//!
//! ## Features
//!
//! | Feature   | Default | Effect                                    |
//! |-----------|---------|-------------------------------------------|
//! | `log`     | yes     | log through the `log` crate               |
//! | `tracing` | no      | log through the `tracing` crate           |
//! | `cache`   | yes     | LRU cache of path → route resolution      |

pub mod logging;

#[cfg(feature = "cache")]
pub mod cache;
pub mod config;
pub mod error;
pub mod handler;
pub mod matching;
pub mod memory;
pub mod meta;
pub mod params;
pub mod platform;
pub mod resolve;
pub mod router;
pub mod state;

pub use config::{MetaLookup, RelativeResolution, RouterConfig};
pub use error::{LoadFailure, NavigationResult, RouterError};
pub use handler::{Handler, RenderFn, View};
pub use matching::RoutePattern;
pub use meta::{MetaTable, RouteMeta};
pub use params::RouteParams;
pub use platform::{
    Document, FetchError, Fetcher, History, Platform, PopStateListener, Response, Spawner,
    Subscription,
};
pub use router::Router;
pub use state::{RouteMatch, RouterState};
