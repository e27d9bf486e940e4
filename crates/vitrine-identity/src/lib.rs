mod identified;
mod normalize;

pub mod util;

pub use self::identified::Identified;
pub use self::normalize::{FALLBACK_NAME, SENTINELS, initials, normalize};
