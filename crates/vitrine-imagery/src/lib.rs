mod fallback;
mod imaged;
mod options;
mod resolve;
mod widths;

pub mod util;

pub use self::fallback::next_source_on_error;
pub use self::imaged::HasImage;
pub use self::options::{DEFAULT_FALLBACK_URL, DEFAULT_SIZES, ImageOptions};
pub use self::resolve::{ImageVariant, ResolvedImage, resolve, resolve_with};
pub use self::widths::{DEFAULT_WIDTHS, Widths, WidthsError};
