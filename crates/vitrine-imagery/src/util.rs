use std::sync::LazyLock;

use regex::Regex;

/**
    Matches image paths that reference a backend object that was
    serialized as the literal `None`, such as `/media/products/None/x.jpg`.

    This is an artifact of how the backend renders missing ids, and
    not a real contract. Variants for such paths can never exist.
*/
static DISABLED_VARIANT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/(?:products|reviews)/None(?:[/?#]|$)").expect("disabled variant pattern is valid")
});

/**
    File extension used for all pre-generated width variants.
*/
pub const VARIANT_EXTENSION: &str = "webp";

/**
    Checks if variants must not be generated for the given URL,
    because it points at a known-null backend reference.
*/
#[must_use]
pub fn is_disabled_variant_url(url: &str) -> bool {
    DISABLED_VARIANT_PATTERN.is_match(url)
}

/**
    Strips any query string and fragment from the given URL.

    - `/a/photo.jpg?v=2` -> `/a/photo.jpg`
    - `/a/photo.jpg#top` -> `/a/photo.jpg`
    - `/a/photo.jpg` -> `/a/photo.jpg`
*/
#[must_use]
pub fn strip_query_and_fragment(url: &str) -> &str {
    match url.find(['?', '#']) {
        Some(index) => &url[..index],
        None => url,
    }
}

/**
    Returns the byte offset where the path of a URL starts.

    Absolute (`https://host/...`) and protocol-relative (`//host/...`)
    URLs have their authority skipped, a URL without any path after
    its authority returns the length of the URL. Anything else is
    a plain path, starting at offset zero.
*/
fn path_start(url: &str) -> usize {
    let authority_start = if url.starts_with("//") {
        Some(2)
    } else {
        url.find("://")
            .filter(|&index| {
                index > 0
                    && url[..index]
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
            })
            .map(|index| index + 3)
    };

    match authority_start {
        Some(start) => url[start..].find('/').map_or(url.len(), |index| start + index),
        None => 0,
    }
}

/**
    Extracts the path of a URL, without scheme, host, query or fragment.

    - `https://shop.example.com/a/b.jpg?v=2` -> `/a/b.jpg`
    - `/a/b.jpg#top` -> `/a/b.jpg`
    - `https://shop.example.com` -> empty path
*/
#[must_use]
pub fn url_path(url: &str) -> &str {
    let url = strip_query_and_fragment(url);
    &url[path_start(url)..]
}

/**
    Splits a path into everything before its file extension, and the
    extension itself. Only the last path segment is considered, so dots
    in host names or directories are never mistaken for an extension.

    Returns `None` if the last segment has no extension, if its only
    dot is leading (hidden files such as `.thumbnail`), or if there
    is no path at all (`https://cdn.example.com`).
*/
#[must_use]
pub fn split_extension(path: &str) -> Option<(&str, &str)> {
    let path_start = path_start(path);
    let segment_start = path[path_start..]
        .rfind('/')
        .map_or(path_start, |index| path_start + index + 1);
    let dot = path[segment_start..].rfind('.')?;
    if dot == 0 {
        return None;
    }
    let dot = segment_start + dot;
    Some((&path[..dot], &path[dot + 1..]))
}

/**
    Builds the URL of the variant of an image with the given pixel width.

    - `/media/photo.jpg` -> `/media/photo-320.webp`
    - `/media/photo.jpg?v=2` -> `/media/photo-320.webp`
    - `/media/photo` -> `/media/photo` (no extension, unchanged)
*/
#[must_use]
pub fn variant_url(url: &str, width: u32) -> String {
    match split_extension(strip_query_and_fragment(url)) {
        Some((base, _)) => format!("{base}-{width}.{VARIANT_EXTENSION}"),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // is_disabled_variant_url

    #[test]
    fn disabled_for_none_segments() {
        assert!(is_disabled_variant_url("/media/products/None/x.jpg"));
        assert!(is_disabled_variant_url("/media/reviews/None/x.jpg"));
        assert!(is_disabled_variant_url("https://cdn.example.com/products/None"));
        assert!(is_disabled_variant_url("/products/None?size=large"));
    }

    #[test]
    fn enabled_for_other_paths() {
        assert!(!is_disabled_variant_url("/media/products/42/photo.jpg"));
        assert!(!is_disabled_variant_url("/media/products/Nonesuch/x.jpg"));
        assert!(!is_disabled_variant_url("/media/users/None/x.jpg"));
        assert!(!is_disabled_variant_url("/media/products/none/x.jpg"));
        assert!(!is_disabled_variant_url("/media/None/x.jpg"));
    }

    // strip_query_and_fragment

    #[test]
    fn strip_query() {
        assert_eq!(strip_query_and_fragment("/a/b.jpg?v=1&w=2"), "/a/b.jpg");
        assert_eq!(strip_query_and_fragment("/a/b.jpg#frag"), "/a/b.jpg");
        assert_eq!(strip_query_and_fragment("/a/b.jpg#x?y"), "/a/b.jpg");
        assert_eq!(strip_query_and_fragment("/a/b.jpg"), "/a/b.jpg");
    }

    // split_extension

    #[test]
    fn split_extension_basic() {
        assert_eq!(split_extension("/a/photo.jpg"), Some(("/a/photo", "jpg")));
        assert_eq!(
            split_extension("/a/photo.final.png"),
            Some(("/a/photo.final", "png"))
        );
        assert_eq!(split_extension("photo.jpg"), Some(("photo", "jpg")));
    }

    #[test]
    fn split_extension_ignores_directories() {
        assert_eq!(split_extension("/v1.2/photo"), None);
        assert_eq!(split_extension("https://cdn.example.com/photo"), None);
    }

    #[test]
    fn split_extension_ignores_hosts() {
        assert_eq!(split_extension("https://cdn.example.com"), None);
        assert_eq!(split_extension("https://cdn.example.com/"), None);
        assert_eq!(split_extension("//cdn.example.com"), None);
        assert_eq!(
            split_extension("//cdn.example.com/a.jpg"),
            Some(("//cdn.example.com/a", "jpg"))
        );
    }

    #[test]
    fn split_extension_scheme_must_lead() {
        assert_eq!(
            split_extension("/redirect/https://x.example.com/a.jpg"),
            Some(("/redirect/https://x.example.com/a", "jpg"))
        );
    }

    #[test]
    fn split_extension_hidden_files() {
        assert_eq!(split_extension("/a/.thumbnail"), None);
    }

    // variant_url

    #[test]
    fn variant_url_basic() {
        assert_eq!(
            variant_url("/media/products/42/photo.jpg", 320),
            "/media/products/42/photo-320.webp"
        );
        assert_eq!(
            variant_url("https://cdn.example.com/img/photo.PNG", 1024),
            "https://cdn.example.com/img/photo-1024.webp"
        );
    }

    #[test]
    fn variant_url_drops_query() {
        assert_eq!(
            variant_url("/media/photo.jpg?v=3#zoom", 640),
            "/media/photo-640.webp"
        );
    }

    #[test]
    fn variant_url_without_path_is_unchanged() {
        assert_eq!(
            variant_url("https://cdn.example.com", 320),
            "https://cdn.example.com"
        );
        assert_eq!(
            variant_url("https://cdn.example.com?x=1", 320),
            "https://cdn.example.com?x=1"
        );
    }

    // url_path

    #[test]
    fn url_path_strips_scheme_and_host() {
        assert_eq!(url_path("https://shop.example.com/a/b.jpg?v=2"), "/a/b.jpg");
        assert_eq!(url_path("//shop.example.com/a/b.jpg"), "/a/b.jpg");
        assert_eq!(url_path("https://shop.example.com"), "");
    }

    #[test]
    fn url_path_of_plain_paths() {
        assert_eq!(url_path("/a/b.jpg#top"), "/a/b.jpg");
        assert_eq!(url_path("b.jpg"), "b.jpg");
    }

    #[test]
    fn variant_url_without_extension_is_unchanged() {
        assert_eq!(variant_url("/media/photo", 640), "/media/photo");
        assert_eq!(variant_url("/media/photo?v=3", 640), "/media/photo?v=3");
    }
}
