//! Per-route page metadata.
//!
//! [`RouteMeta`] is the record applied to the document head after a route
//! loads; [`MetaTable`] stores one record per route key.
//!
//! Keys are looked up by the literal current path by default, so a record
//! registered under `/user/:id` is only found when the path is literally
//! `/user/:id`. [`MetaLookup::Pattern`](crate::MetaLookup::Pattern) matches
//! keys the same way routes are matched instead.
//!
//! # Example
//!
//! ```
//! use spa_navigator::RouteMeta;
//!
//! let meta = RouteMeta::new()
//!     .title("About")
//!     .description("Who we are")
//!     .keywords(["company", "team"]);
//!
//! assert_eq!(meta.title.as_deref(), Some("About"));
//! assert_eq!(meta.keywords.len(), 2);
//! ```

use crate::matching::RoutePattern;
use crate::{trace_log, MetaLookup};

/// Metadata applied to the document when a route loads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Document title.
    pub title: Option<String>,
    /// Content of the single `description` meta element.
    pub description: Option<String>,
    /// One `keywords` meta element is appended per entry.
    pub keywords: Vec<String>,
}

impl RouteMeta {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a keyword.
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Append several keywords.
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }
}

#[derive(Debug, Clone)]
struct MetaEntry {
    key: String,
    // Only consulted under `MetaLookup::Pattern`.
    pattern: Option<RoutePattern>,
    meta: RouteMeta,
}

/// Route key → [`RouteMeta`] in registration order.
#[derive(Debug, Clone, Default)]
pub struct MetaTable {
    entries: Vec<MetaEntry>,
}

impl MetaTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or overwrite the record for an exact key.
    ///
    /// Overwriting keeps the key's original position.
    pub fn insert(&mut self, key: impl Into<String>, meta: RouteMeta) {
        let key = key.into();
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.meta = meta;
            return;
        }
        // A key that does not compile can still be found by literal lookup.
        let pattern = RoutePattern::parse(&key).ok();
        self.entries.push(MetaEntry { key, pattern, meta });
    }

    /// Record registered under exactly `key`.
    pub fn get(&self, key: &str) -> Option<&RouteMeta> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.meta)
    }

    /// Record to apply for `path` under the given lookup policy.
    pub fn lookup(&self, path: &str, policy: MetaLookup) -> Option<&RouteMeta> {
        match policy {
            MetaLookup::LiteralPath => self.get(path),
            MetaLookup::Pattern => {
                let entry = self.entries.iter().find(|e| {
                    e.pattern
                        .as_ref()
                        .is_some_and(|pattern| pattern.matches(path).is_some())
                })?;
                trace_log!("Meta key '{}' matched path '{}'", entry.key, path);
                Some(&entry.meta)
            }
        }
    }

    /// Number of registered records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
