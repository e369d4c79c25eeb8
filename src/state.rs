//! Router state management

#[cfg(feature = "cache")]
use crate::cache::{CachedMatch, MatchCache};
use crate::matching::RoutePattern;
use crate::{info_log, Handler, MetaTable, RouteMeta, RouteParams, RouterConfig, RouterError};
use std::fmt;

/// A registered route.
struct RouteEntry<E> {
    pattern: RoutePattern,
    handler: Handler<E>,
}

/// Result of matching a path against the route table
pub struct RouteMatch<E> {
    /// The registered pattern that matched
    pub pattern: String,
    /// The handler registered for it
    pub handler: Handler<E>,
    /// Extracted route parameters
    pub params: RouteParams,
}

impl<E> Clone for RouteMatch<E> {
    fn clone(&self) -> Self {
        Self {
            pattern: self.pattern.clone(),
            handler: self.handler.clone(),
            params: self.params.clone(),
        }
    }
}

impl<E> fmt::Debug for RouteMatch<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("pattern", &self.pattern)
            .field("handler", &self.handler)
            .field("params", &self.params)
            .finish()
    }
}

/// Router state
pub struct RouterState<E> {
    /// Registered routes, in registration order
    routes: Vec<RouteEntry<E>>,
    /// Handler used when nothing matches
    fallback: Option<Handler<E>>,
    /// Per-route metadata
    metas: MetaTable,
    config: RouterConfig,
    #[cfg(feature = "cache")]
    cache: MatchCache,
    /// Navigation counter. Each load increments it, so a fetch started by an
    /// earlier load can tell it has been superseded.
    navigation_id: u64,
}

impl<E> RouterState<E> {
    /// Create an empty state
    pub fn new(config: RouterConfig) -> Self {
        Self {
            routes: Vec::new(),
            fallback: None,
            metas: MetaTable::new(),
            #[cfg(feature = "cache")]
            cache: MatchCache::new(config.cache_capacity),
            config,
            navigation_id: 0,
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Register a route
    ///
    /// Registering a pattern string that already exists replaces its handler
    /// and keeps its position in the table.
    pub fn add_route(&mut self, pattern: &str, handler: Handler<E>) -> Result<(), RouterError> {
        if let Some(index) = self
            .routes
            .iter()
            .position(|entry| entry.pattern.as_str() == pattern)
        {
            info_log!("Replaced handler of route '{}' ({})", pattern, handler.kind());
            self.routes[index].handler = handler;
        } else {
            let pattern = RoutePattern::parse(pattern)?;
            info_log!(
                "Registered route '{}' ({}, {} param(s))",
                pattern,
                handler.kind(),
                pattern.param_names().len()
            );
            self.routes.push(RouteEntry { pattern, handler });
        }
        #[cfg(feature = "cache")]
        self.cache.clear();
        Ok(())
    }

    /// Registered patterns, in matching order
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|entry| entry.pattern.as_str())
    }

    /// Number of registered routes
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Set the fallback handler; last write wins
    pub fn set_fallback(&mut self, handler: Handler<E>) {
        info_log!("Registered 404 handler ({})", handler.kind());
        self.fallback = Some(handler);
    }

    /// Current fallback handler
    pub fn fallback(&self) -> Option<Handler<E>> {
        self.fallback.clone()
    }

    /// Store or overwrite metadata for an exact route key
    pub fn set_meta(&mut self, route: &str, meta: RouteMeta) {
        info_log!("Registered metadata for '{}'", route);
        self.metas.insert(route, meta);
    }

    /// Metadata to apply after loading `path`
    pub fn meta_for(&self, path: &str) -> Option<RouteMeta> {
        self.metas.lookup(path, self.config.meta_lookup).cloned()
    }

    /// Find the first registered route matching `path`
    #[cfg(feature = "cache")]
    pub fn match_path(&mut self, path: &str) -> Option<RouteMatch<E>> {
        if let Some(cached) = self.cache.get(path) {
            return cached.and_then(|hit| self.route_match(hit.index, hit.params));
        }

        let found = self.scan(path);
        self.cache.insert(
            path.to_string(),
            found
                .as_ref()
                .map(|(index, params)| CachedMatch {
                    index: *index,
                    params: params.clone(),
                }),
        );
        found.and_then(|(index, params)| self.route_match(index, params))
    }

    /// Find the first registered route matching `path`
    #[cfg(not(feature = "cache"))]
    pub fn match_path(&mut self, path: &str) -> Option<RouteMatch<E>> {
        let (index, params) = self.scan(path)?;
        self.route_match(index, params)
    }

    /// Match statistics (`cache` feature)
    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> &crate::cache::CacheStats {
        self.cache.stats()
    }

    fn scan(&self, path: &str) -> Option<(usize, RouteParams)> {
        self.routes
            .iter()
            .enumerate()
            .find_map(|(index, entry)| entry.pattern.matches(path).map(|params| (index, params)))
    }

    fn route_match(&self, index: usize, params: RouteParams) -> Option<RouteMatch<E>> {
        let entry = self.routes.get(index)?;
        Some(RouteMatch {
            pattern: entry.pattern.as_str().to_string(),
            handler: entry.handler.clone(),
            params,
        })
    }

    /// Get current navigation ID
    pub fn navigation_id(&self) -> u64 {
        self.navigation_id
    }

    /// Start a new navigation and return the new navigation ID
    pub fn start_navigation(&mut self) -> u64 {
        self.navigation_id += 1;
        self.navigation_id
    }

    /// Check if a navigation is still current (not superseded by a newer one)
    pub fn is_navigation_current(&self, nav_id: u64) -> bool {
        self.navigation_id == nav_id
    }
}

impl<E> Default for RouterState<E> {
    fn default() -> Self {
        Self::new(RouterConfig::default())
    }
}
