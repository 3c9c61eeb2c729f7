//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;
use crate::content::PostId;

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Query values end up inside quoted `onclick` handlers, so quotes are encoded too
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encode a string the way `encodeURIComponent` does
pub fn encode_uri_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Link to the article page for a post
///
/// # Examples
/// ```ignore
/// article_href(&config, &PostId::from(3)) // -> "article.html?id=3"
/// ```
pub fn article_href(config: &SiteConfig, id: &PostId) -> String {
    format!(
        "{}?id={}",
        config.article_page,
        utf8_percent_encode(&id.to_string(), QUERY_VALUE)
    )
}

/// Generated avatar image keyed by author name
///
/// Used inside a single-quoted `onerror` handler, so `'` is encoded as well.
pub fn avatar_fallback_url(config: &SiteConfig, author: &str) -> String {
    format!(
        "{}?name={}&background=random",
        config.avatar_service,
        encode_uri_component(author).replace('\'', "%27")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("Ana Pérez"), "Ana%20P%C3%A9rez");
        assert_eq!(encode_uri_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_uri_component("it's (ok)!"), "it's%20(ok)!");
    }

    #[test]
    fn test_article_href() {
        let config = SiteConfig::default();
        assert_eq!(article_href(&config, &PostId::from(3)), "article.html?id=3");
        assert_eq!(
            article_href(&config, &PostId::from("o'hara post")),
            "article.html?id=o%27hara%20post"
        );
    }

    #[test]
    fn test_avatar_fallback_url() {
        let config = SiteConfig::default();
        assert_eq!(
            avatar_fallback_url(&config, "Ana Pérez"),
            "https://ui-avatars.com/api/?name=Ana%20P%C3%A9rez&background=random"
        );
        assert_eq!(
            avatar_fallback_url(&config, "O'Brien"),
            "https://ui-avatars.com/api/?name=O%27Brien&background=random"
        );
    }
}
