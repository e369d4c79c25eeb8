//! Error and outcome types for the router.
//!
//! - [`NavigationResult`] — what a call to
//!   [`Router::load_route`](crate::Router::load_route) dispatched. Loading a
//!   route never fails from the caller's point of view, so this is a report,
//!   not a `Result`.
//! - [`RouterError`] — the failure kinds the router recognises. Only
//!   [`RouterError::InvalidPattern`] is ever returned to the caller. A refused
//!   spawn is reported through [`NavigationResult::Failed`]; the others are
//!   logged and recovered from locally.
//!
//! # Examples
//!
//! ```
//! use spa_navigator::{LoadFailure, NavigationResult, RouterError};
//!
//! let result = NavigationResult::NotFound { path: "/missing".into() };
//! assert!(result.is_not_found());
//!
//! let err = RouterError::RouteLoad {
//!     url: "../page.html".into(),
//!     reason: LoadFailure::Status(404),
//! };
//! assert_eq!(err.to_string(), "Failed to load '../page.html': HTTP status 404");
//! ```

use std::fmt;

// ============================================================================
// Navigation Result Types
// ============================================================================

/// Outcome of a single route load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationResult {
    /// A pattern matched and its view/function handler rendered synchronously.
    Rendered {
        /// The loaded path.
        path: String,
        /// The registered pattern that matched.
        pattern: String,
    },
    /// A pattern matched a file handler; the fetch was spawned and will
    /// complete after this call returns.
    Loading {
        /// The loaded path.
        path: String,
        /// The resource URL after relative adjustment.
        url: String,
    },
    /// Nothing matched, or a matched file could not be fetched, and the
    /// fallback handler was dispatched.
    Fallback { path: String },
    /// Nothing matched and no fallback is configured. Nothing was rendered.
    NotFound { path: String },
    /// A file fetch could not be started and no fallback rendered in its
    /// place.
    Failed { path: String, error: RouterError },
}

impl NavigationResult {
    /// The path this result refers to.
    pub fn path(&self) -> &str {
        match self {
            NavigationResult::Rendered { path, .. }
            | NavigationResult::Loading { path, .. }
            | NavigationResult::Fallback { path }
            | NavigationResult::NotFound { path }
            | NavigationResult::Failed { path, .. } => path,
        }
    }

    /// Check if a registered pattern matched.
    pub fn is_matched(&self) -> bool {
        matches!(
            self,
            NavigationResult::Rendered { .. } | NavigationResult::Loading { .. }
        )
    }

    /// Check if the fallback handler was used.
    pub fn is_fallback(&self) -> bool {
        matches!(self, NavigationResult::Fallback { .. })
    }

    /// Check if nothing was rendered at all.
    pub fn is_not_found(&self) -> bool {
        matches!(self, NavigationResult::NotFound { .. })
    }

    /// The error behind a [`NavigationResult::Failed`] load.
    pub fn error(&self) -> Option<&RouterError> {
        match self {
            NavigationResult::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// The URL of a spawned fetch, if any.
    pub fn loading_url(&self) -> Option<&str> {
        match self {
            NavigationResult::Loading { url, .. } => Some(url),
            _ => None,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Why a file handler could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    /// The response arrived but did not indicate success.
    Status(u16),
    /// The request itself failed.
    Network(String),
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadFailure::Status(status) => write!(f, "HTTP status {}", status),
            LoadFailure::Network(message) => write!(f, "network error: {}", message),
        }
    }
}

/// Failure kinds recognised by the router.
///
/// Implements [`std::error::Error`] and [`Display`](std::fmt::Display).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// No pattern matched and no fallback is configured.
    RouteNotFound { path: String },

    /// A file handler's fetch failed or returned a non-success response.
    RouteLoad { url: String, reason: LoadFailure },

    /// A route pattern could not be compiled.
    InvalidPattern { pattern: String, message: String },

    /// The spawner refused the fetch task.
    Spawn { message: String },
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::RouteNotFound { path } => {
                write!(f, "Route not found: {}", path)
            }
            RouterError::RouteLoad { url, reason } => {
                write!(f, "Failed to load '{}': {}", url, reason)
            }
            RouterError::InvalidPattern { pattern, message } => {
                write!(f, "Invalid route pattern '{}': {}", pattern, message)
            }
            RouterError::Spawn { message } => {
                write!(f, "Failed to spawn route load: {}", message)
            }
        }
    }
}

impl std::error::Error for RouterError {}

// ============================================================================
// Tests
// ============================================================================
