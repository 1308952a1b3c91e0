/// Resolves template-supplied URL specs to absolute URLs.
///
/// Email clients open bodies outside the origin site, so every link and
/// asset reference must be absolute. The host application usually has a
/// router of its own; this trait is the seam it plugs into.
pub trait UrlResolver {
    fn resolve(&self, url: &str) -> String;
}

/// Joins relative URL specs onto a fixed base URL.
///
/// Specs that already carry a scheme (or are protocol-relative, mailto,
/// or fragment-only) pass through unchanged. An empty spec stays empty.
#[derive(Debug, Clone)]
pub struct BaseUrlResolver {
    base: String,
}

impl BaseUrlResolver {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        BaseUrlResolver { base }
    }
}

impl UrlResolver for BaseUrlResolver {
    fn resolve(&self, url: &str) -> String {
        if url.is_empty() {
            return String::new();
        }
        if url.contains("://")
            || url.starts_with("//")
            || url.starts_with("mailto:")
            || url.starts_with('#')
        {
            return url.to_string();
        }
        format!("{}/{}", self.base, url.trim_start_matches('/'))
    }
}
