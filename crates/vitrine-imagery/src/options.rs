use serde::Serialize;

use crate::widths::Widths;

/**
    Local asset shown whenever no usable image URL exists.
*/
pub const DEFAULT_FALLBACK_URL: &str = "/placeholder.svg";

/**
    Layout hint for responsive source selection - full
    viewport width on small screens, fixed width otherwise.
*/
pub const DEFAULT_SIZES: &str = "(max-width: 640px) 100vw, 640px";

/**
    Per-component image configuration: which variant widths to
    offer, the `sizes` layout hint, and the local fallback asset.
*/
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageOptions {
    pub widths: Widths,
    pub sizes: String,
    pub fallback_url: String,
}

impl ImageOptions {
    #[must_use]
    pub fn new(widths: Widths, sizes: impl Into<String>, fallback_url: impl Into<String>) -> Self {
        Self {
            widths,
            sizes: sizes.into(),
            fallback_url: fallback_url.into(),
        }
    }

    #[must_use]
    pub fn with_widths(mut self, widths: Widths) -> Self {
        self.widths = widths;
        self
    }

    #[must_use]
    pub fn with_sizes(mut self, sizes: impl Into<String>) -> Self {
        self.sizes = sizes.into();
        self
    }

    #[must_use]
    pub fn with_fallback_url(mut self, fallback_url: impl Into<String>) -> Self {
        self.fallback_url = fallback_url.into();
        self
    }
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self::new(Widths::default(), DEFAULT_SIZES, DEFAULT_FALLBACK_URL)
    }
}
