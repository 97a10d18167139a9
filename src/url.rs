//! URL generation against a fixed base URI.

/// Generates application URLs prefixed with the configured base URI.
#[derive(Debug, Clone)]
pub struct UrlService {
    base_uri: String,
}

impl UrlService {
    /// Creates a URL service for a base URI such as `/ilya-cms/`.
    ///
    /// The base URI is normalized to end with exactly one `/` so that
    /// joining never doubles or drops a separator.
    pub fn new(base_uri: impl Into<String>) -> Self {
        let mut base_uri = base_uri.into();
        while base_uri.ends_with('/') {
            base_uri.pop();
        }
        base_uri.push('/');

        Self { base_uri }
    }

    /// The normalized base URI, always `/`-terminated.
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Builds a URL for an application path, e.g. `foo` -> `/ilya-cms/foo`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_uri, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_with_the_configured_base_uri() {
        let urls = UrlService::new("/ilya-cms/");
        assert_eq!(urls.url_for("foo"), "/ilya-cms/foo");
    }

    #[test]
    fn join_produces_a_single_slash() {
        assert_eq!(UrlService::new("/ilya-cms").url_for("foo"), "/ilya-cms/foo");
        assert_eq!(UrlService::new("/ilya-cms/").url_for("/foo"), "/ilya-cms/foo");
        assert_eq!(UrlService::new("/ilya-cms//").url_for("foo"), "/ilya-cms/foo");
    }

    #[test]
    fn root_base_uri_works() {
        let urls = UrlService::new("/");
        assert_eq!(urls.url_for("foo"), "/foo");
        assert_eq!(urls.base_uri(), "/");
    }

    #[test]
    fn empty_path_yields_the_base_uri() {
        let urls = UrlService::new("/ilya-cms/");
        assert_eq!(urls.url_for(""), "/ilya-cms/");
    }
}
