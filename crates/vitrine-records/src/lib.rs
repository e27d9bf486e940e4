mod cards;

pub mod models;

pub use self::cards::{ProductCard, ReviewCard};
pub use self::models::{Page, Product, ProductPage, RecordId, Review, ReviewPage};
