mod id;
mod lenient;
mod page;
mod product;
mod review;

pub use self::id::RecordId;
pub use self::page::{Page, ProductPage, ReviewPage};
pub use self::product::Product;
pub use self::review::Review;
