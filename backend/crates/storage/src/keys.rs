//! Object-key derivation from stored public URLs
//!
//! Content records persist the public CDN URL of each image. To delete the
//! backing object we have to recover the bucket key from that URL. Only URLs
//! under the configured public base are ours to delete; anything else (an
//! externally hosted image, a data URI) yields `None` and is left alone.

/// Derive the object key for a stored URL.
///
/// `public_base` is the public origin the bucket is served from, e.g.
/// `https://assets.example.com`. Returns `None` when the URL does not live
/// under that base or would produce an empty key.
pub fn derive_object_key(public_base: &str, url: &str) -> Option<String> {
    let base = public_base.trim_end_matches('/');
    let url = url.trim();

    let rest = url.strip_prefix(base)?;

    // Must be a path boundary, not merely a string prefix
    // ("https://assets.example.comevil.com/x" is not ours).
    let key = rest.strip_prefix('/')?;

    // Strip query/fragment; keys never contain them.
    let key = key
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_matches('/');

    if key.is_empty() {
        return None;
    }

    Some(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://assets.example.com";

    #[test]
    fn test_derives_key_under_base() {
        assert_eq!(
            derive_object_key(BASE, "https://assets.example.com/logos/acme.png"),
            Some("logos/acme.png".to_string())
        );
        assert_eq!(
            derive_object_key(BASE, "https://assets.example.com/gallery/2024/site.jpg"),
            Some("gallery/2024/site.jpg".to_string())
        );
    }

    #[test]
    fn test_strips_query_and_fragment() {
        assert_eq!(
            derive_object_key(BASE, "https://assets.example.com/a.png?v=2#top"),
            Some("a.png".to_string())
        );
    }

    #[test]
    fn test_foreign_urls_left_alone() {
        assert_eq!(derive_object_key(BASE, "https://other.example.com/a.png"), None);
        assert_eq!(derive_object_key(BASE, "data:image/png;base64,AAAA"), None);
        // Prefix match that is not a path boundary
        assert_eq!(
            derive_object_key(BASE, "https://assets.example.comevil.com/a.png"),
            None
        );
    }

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(derive_object_key(BASE, "https://assets.example.com"), None);
        assert_eq!(derive_object_key(BASE, "https://assets.example.com/"), None);
        assert_eq!(derive_object_key(BASE, "https://assets.example.com/?x=1"), None);
    }

    #[test]
    fn test_base_trailing_slash_tolerated() {
        assert_eq!(
            derive_object_key("https://assets.example.com/", "https://assets.example.com/k.png"),
            Some("k.png".to_string())
        );
    }
}
