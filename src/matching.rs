//! Route pattern compilation and matching
//!
//! A route pattern is a path template in which `:name` tokens stand for a
//! single path segment. Each pattern is compiled once, at registration, into
//! an anchored regular expression:
//!
//! - every `:name` token becomes `([^/]+)`
//! - all other text is matched literally
//! - the expression is anchored with `^…$`, so the whole path must match
//!
//! ```
//! use spa_navigator::RoutePattern;
//!
//! let pattern = RoutePattern::parse("/user/:id").unwrap();
//! let params = pattern.matches("/user/42").unwrap();
//! assert_eq!(params.get("id"), Some("42"));
//!
//! assert!(pattern.matches("/user/42/edit").is_none());
//! assert!(pattern.matches("/user/").is_none());
//! ```

use crate::{trace_log, RouteParams, RouterError};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Capture expression substituted for each `:name` token.
const SEGMENT_CAPTURE: &str = "([^/]+)";

/// `:` followed by one or more ASCII word characters.
fn param_token() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| Regex::new(r":[A-Za-z0-9_]+").expect("param token regex is valid"))
}

/// A compiled route pattern.
#[derive(Clone)]
pub struct RoutePattern {
    source: String,
    regex: Regex,
    param_names: Vec<String>,
}

impl RoutePattern {
    /// Compile a pattern string.
    ///
    /// Fails with [`RouterError::InvalidPattern`] only if the generated
    /// expression is rejected by the regex engine (e.g. size limits), since
    /// literal text is escaped.
    pub fn parse(pattern: &str) -> Result<Self, RouterError> {
        let mut expr = String::with_capacity(pattern.len() + 8);
        let mut param_names = Vec::new();
        let mut last = 0;

        expr.push('^');
        for token in param_token().find_iter(pattern) {
            expr.push_str(&regex::escape(&pattern[last..token.start()]));
            expr.push_str(SEGMENT_CAPTURE);
            param_names.push(token.as_str()[1..].to_string());
            last = token.end();
        }
        expr.push_str(&regex::escape(&pattern[last..]));
        expr.push('$');

        let regex = Regex::new(&expr).map_err(|err| RouterError::InvalidPattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
            param_names,
        })
    }

    /// Match a full path, returning the captured params on success.
    ///
    /// A pattern without tokens that matches returns `Some` with empty
    /// params; `None` always means "no match".
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let captures = self.regex.captures(path)?;
        trace_log!("Pattern '{}' matched path '{}'", self.source, path);

        // One capture group per token, in the same order.
        Some(
            self.param_names
                .iter()
                .zip(captures.iter().skip(1))
                .map(|(name, value)| (name.as_str(), value.map_or("", |m| m.as_str())))
                .collect(),
        )
    }

    /// The pattern string as registered.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Token names in left-to-right order.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// `true` if the pattern has no `:name` tokens.
    pub fn is_static(&self) -> bool {
        self.param_names.is_empty()
    }

    /// The generated regular expression, mostly useful for debugging.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl fmt::Debug for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutePattern")
            .field("source", &self.source)
            .field("regex", &self.regex.as_str())
            .field("param_names", &self.param_names)
            .finish()
    }
}

impl PartialEq for RoutePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for RoutePattern {}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Split a path into segments, filtering empty segments
///
/// # Examples
///
/// ```
/// use spa_navigator::matching::split_path;
///
/// assert_eq!(split_path("/users/123"), vec!["users", "123"]);
/// assert!(split_path("/").is_empty());
/// assert_eq!(split_path("/users/"), vec!["users"]);
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
