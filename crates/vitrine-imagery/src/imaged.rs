use crate::options::ImageOptions;
use crate::resolve::{ResolvedImage, resolve_with};

/**
    Helper trait for anything that references a single canonical image.
*/
pub trait HasImage {
    fn raw_image_url(&self) -> Option<String>;

    /**
        Resolves the canonical image into a primary URL and variants.

        See [`resolve_with`] for more information.
    */
    fn resolve_image(&self, options: &ImageOptions) -> ResolvedImage {
        resolve_with(self.raw_image_url().as_deref(), options)
    }
}

impl HasImage for Option<String> {
    fn raw_image_url(&self) -> Option<String> {
        self.clone()
    }
}

impl HasImage for &str {
    fn raw_image_url(&self) -> Option<String> {
        Some((*self).to_string())
    }
}
