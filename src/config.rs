//! Router configuration.
//!
//! [`RouterConfig::default`] reproduces the plain behaviour: single-level
//! `../` adjustment, metadata looked up by literal path, keywords appended on
//! every navigation. The other policies are opt-in.
//!
//! ```
//! use spa_navigator::{MetaLookup, RelativeResolution, RouterConfig};
//!
//! let config = RouterConfig::new()
//!     .relative_resolution(RelativeResolution::FullDepth)
//!     .meta_lookup(MetaLookup::Pattern)
//!     .dedupe_keywords(true);
//!
//! assert_eq!(config.relative_resolution, RelativeResolution::FullDepth);
//! assert!(config.dedupe_keywords);
//! ```

/// How file handlers are adjusted to the current path's depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelativeResolution {
    /// Prefix exactly one `../` when the current path has more than one
    /// segment, whatever the depth.
    #[default]
    SingleParent,
    /// Prefix one `../` per segment beyond the first. Absolute paths and
    /// URLs with a scheme are left alone.
    FullDepth,
}

/// How the metadata table is searched after a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MetaLookup {
    /// Key must equal the current path.
    #[default]
    LiteralPath,
    /// Keys are matched as route patterns, first registered wins.
    Pattern,
}

/// Runtime options for a [`Router`](crate::Router).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    /// Relative adjustment policy for file handlers.
    pub relative_resolution: RelativeResolution,
    /// Metadata lookup policy.
    pub meta_lookup: MetaLookup,
    /// Skip appending a keyword already present in the head.
    pub dedupe_keywords: bool,
    /// Entries kept by the path → route cache (`cache` feature).
    pub cache_capacity: usize,
}

impl RouterConfig {
    const DEFAULT_CACHE_CAPACITY: usize = 256;

    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the relative adjustment policy.
    pub fn relative_resolution(mut self, policy: RelativeResolution) -> Self {
        self.relative_resolution = policy;
        self
    }

    /// Set the metadata lookup policy.
    pub fn meta_lookup(mut self, policy: MetaLookup) -> Self {
        self.meta_lookup = policy;
        self
    }

    /// Enable or disable keyword deduplication.
    pub fn dedupe_keywords(mut self, dedupe: bool) -> Self {
        self.dedupe_keywords = dedupe;
        self
    }

    /// Set the match cache capacity. Zero disables the cache.
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            relative_resolution: RelativeResolution::default(),
            meta_lookup: MetaLookup::default(),
            dedupe_keywords: false,
            cache_capacity: Self::DEFAULT_CACHE_CAPACITY,
        }
    }
}
