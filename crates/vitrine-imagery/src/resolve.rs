use serde::Serialize;

use crate::options::ImageOptions;
use crate::util::{is_disabled_variant_url, variant_url};
use crate::widths::Widths;

/**
    A single width-specific variant of an image.

    The variant is derived purely from naming conventions,
    and is never verified to actually exist.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ImageVariant {
    pub url: String,
    pub width: u32,
}

/**
    The result of resolving a canonical image URL.

    The primary URL is always usable as the source of the base image
    element. Variants, when present, are a parallel hint with exactly
    one entry per requested width, in the requested order.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedImage {
    pub primary_url: String,
    pub variants: Option<Vec<ImageVariant>>,
    pub sizes: String,
}

impl ResolvedImage {
    #[must_use]
    pub fn has_variants(&self) -> bool {
        self.variants.is_some()
    }

    /**
        Formats the variants as a `srcset` listing, such as
        `/a/photo-320.webp 320w, /a/photo-640.webp 640w`.

        Returns `None` if there are no variants to offer.
    */
    #[must_use]
    pub fn srcset(&self) -> Option<String> {
        let variants = self.variants.as_ref()?;
        Some(
            variants
                .iter()
                .map(|variant| format!("{} {}w", variant.url, variant.width))
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

/**
    Resolves a canonical, possibly missing image URL into a primary
    URL plus a set of width-specific `webp` variant URLs.

    - A missing or empty URL resolves to the fallback URL, without variants.
    - A URL referencing a known-null backend object keeps the URL
      as primary, but disables variants entirely.
    - Otherwise, one variant is generated per width, in order.
*/
#[must_use]
pub fn resolve(
    url: Option<&str>,
    widths: &Widths,
    sizes: &str,
    fallback_url: &str,
) -> ResolvedImage {
    let Some(url) = url.filter(|u| !u.is_empty()) else {
        return ResolvedImage {
            primary_url: fallback_url.to_string(),
            variants: None,
            sizes: sizes.to_string(),
        };
    };

    let variants = if is_disabled_variant_url(url) {
        None
    } else {
        Some(
            widths
                .iter()
                .map(|width| ImageVariant {
                    url: variant_url(url, width),
                    width,
                })
                .collect(),
        )
    };

    ResolvedImage {
        primary_url: url.to_string(),
        variants,
        sizes: sizes.to_string(),
    }
}

/**
    Same as [`resolve`], but takes all parameters
    except for the URL from the given options.
*/
#[must_use]
pub fn resolve_with(url: Option<&str>, options: &ImageOptions) -> ResolvedImage {
    resolve(url, &options.widths, &options.sizes, &options.fallback_url)
}
