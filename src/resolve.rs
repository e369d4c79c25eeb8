//! Relative resolution of file handlers.
//!
//! File handlers are written relative to the site root (`"about.html"`), but
//! the browser resolves a relative fetch against the current location. When
//! the page sits below the root (`/docs/intro`), the handler has to climb back
//! up before it is fetched.
//!
//! | current path     | `SingleParent`      | `FullDepth`            |
//! |------------------|---------------------|------------------------|
//! | `/`              | `page.html`         | `page.html`            |
//! | `/about`         | `page.html`         | `page.html`            |
//! | `/docs/intro`    | `../page.html`      | `../page.html`         |
//! | `/a/b/c`         | `../page.html`      | `../../page.html`      |
//!
//! Returns `Cow<str>` so the common root-level case does not allocate.

use crate::matching::split_path;
use crate::RelativeResolution;
use std::borrow::Cow;

const PARENT: &str = "../";

/// Adjust a file handler for the depth of `current_path`.
///
/// # Examples
///
/// ```
/// use spa_navigator::resolve::resolve_resource_path;
/// use spa_navigator::RelativeResolution;
///
/// let single = RelativeResolution::SingleParent;
/// assert_eq!(resolve_resource_path("page.html", "/section/item", single), "../page.html");
/// assert_eq!(resolve_resource_path("page.html", "/section", single), "page.html");
/// ```
pub fn resolve_resource_path<'a>(
    handler: &'a str,
    current_path: &str,
    policy: RelativeResolution,
) -> Cow<'a, str> {
    let depth = split_path(current_path).len();
    if depth <= 1 {
        return Cow::Borrowed(handler);
    }

    match policy {
        RelativeResolution::SingleParent => Cow::Owned(format!("{PARENT}{handler}")),
        RelativeResolution::FullDepth => {
            if is_absolute(handler) {
                return Cow::Borrowed(handler);
            }
            let mut adjusted = PARENT.repeat(depth - 1);
            adjusted.push_str(handler);
            Cow::Owned(adjusted)
        }
    }
}

/// Root-relative paths and URLs with a scheme do not depend on depth.
fn is_absolute(handler: &str) -> bool {
    handler.starts_with('/')
        || handler.split_once("://").is_some_and(|(scheme, _)| {
            !scheme.is_empty() && !scheme.contains(['/', '?', '#'])
        })
}
