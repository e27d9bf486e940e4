use crate::util::url_path;

/**
    Decides which source an image element should switch to after it
    failed to load `current`.

    Returns the fallback URL the first time, and `None` once the
    element already shows the fallback, so a broken fallback asset
    never triggers another swap. Sources are compared by path only,
    since browsers report the resolved, absolute source of an element.
*/
#[must_use]
pub fn next_source_on_error<'a>(current: &str, fallback_url: &'a str) -> Option<&'a str> {
    if fallback_url.is_empty() || url_path(current) == url_path(fallback_url) {
        None
    } else {
        Some(fallback_url)
    }
}
