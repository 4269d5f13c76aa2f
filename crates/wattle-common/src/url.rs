//! App-root URL resolution.
//!
//! Templates in legacy web stacks address application-relative resources
//! with a leading `~/` marker (for example `~/css/site.css`). How that
//! marker maps onto a real path depends on where the application is
//! mounted, so the mapping is supplied by the caller as a [`UrlResolver`]
//! value and threaded explicitly through the calls that need it. There is
//! no process-global resolver.

/// Resolves an app-root-relative path to a concrete URL.
///
/// Implementors receive the remainder of a `~/` URL (everything after the
/// marker, query string included) and return the resolved form.
pub trait UrlResolver {
    /// Resolve `path`, the portion of a URL following the `~/` marker.
    fn resolve_root_relative(&self, path: &str) -> String;
}

/// A resolver that prefixes app-root-relative paths with a fixed base.
///
/// `AppRootResolver::new("/app/")` maps `~/css/site.css` to
/// `/app/css/site.css`.
#[derive(Debug, Clone)]
pub struct AppRootResolver {
    base: String,
}

impl AppRootResolver {
    /// Create a resolver rooted at `base`. A trailing slash is appended
    /// when missing so that joining never glues two path segments
    /// together.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self { base }
    }
}

impl UrlResolver for AppRootResolver {
    fn resolve_root_relative(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

/// Rewrite `url` through `resolver` when it carries the `~/` marker.
///
/// URLs without the marker pass through untouched, absolute URLs
/// included. The resolver only ever sees the portion after `~/`.
#[must_use]
pub fn rewrite_app_root_url(resolver: &dyn UrlResolver, url: &str) -> String {
    url.strip_prefix("~/").map_or_else(
        || url.to_string(),
        |rest| resolver.resolve_root_relative(rest),
    )
}
