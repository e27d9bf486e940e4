use serde::Serialize;
use tracing::debug;

use vitrine_identity::Identified;
use vitrine_imagery::{HasImage, ImageOptions, ResolvedImage};

use crate::models::{Product, RecordId, Review};

/**
    Everything needed to render a single review in a review list.

    Only the normalized author label is carried over - the raw
    name and email of the reviewer never make it into a card.
*/
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewCard {
    pub id: RecordId,
    pub author: String,
    pub initials: String,
    pub rating: u8,
    pub content: String,
    pub created_at: Option<String>,
    pub attachment: Option<ResolvedImage>,
}

impl ReviewCard {
    /**
        Builds a card for the given review.

        Reviews without an attached image get no attachment at all,
        as opposed to products, which always show at least the fallback.
    */
    #[must_use]
    pub fn from_review(review: &Review, options: &ImageOptions) -> Self {
        let author = review.display_name();
        let initials = vitrine_identity::initials(&author);

        let attachment = review
            .raw_image_url()
            .map(|_| review.resolve_image(options));
        if let Some(image) = &attachment
            && !image.has_variants()
        {
            debug!("No variants offered for attachment of review {}", review.id);
        }

        Self {
            id: review.id.clone(),
            author,
            initials,
            rating: review.rating,
            content: review.text().to_string(),
            created_at: review.created_at.clone(),
            attachment,
        }
    }

    #[must_use]
    pub fn from_reviews<'a>(
        reviews: impl IntoIterator<Item = &'a Review>,
        options: &ImageOptions,
    ) -> Vec<Self> {
        reviews
            .into_iter()
            .map(|review| Self::from_review(review, options))
            .collect()
    }
}

/**
    Everything needed to render a product card with responsive imagery.
*/
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub id: RecordId,
    pub name: String,
    pub image: ResolvedImage,
}

impl ProductCard {
    #[must_use]
    pub fn from_product(product: &Product, options: &ImageOptions) -> Self {
        let image = product.resolve_image(options);
        if !image.has_variants() {
            debug!("No variants offered for image of product {}", product.id);
        }

        Self {
            id: product.id.clone(),
            name: product.name.trim().to_string(),
            image,
        }
    }

    #[must_use]
    pub fn from_products<'a>(
        products: impl IntoIterator<Item = &'a Product>,
        options: &ImageOptions,
    ) -> Vec<Self> {
        products
            .into_iter()
            .map(|product| Self::from_product(product, options))
            .collect()
    }
}
