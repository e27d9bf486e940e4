use clap::Args;

use vitrine_imagery::{DEFAULT_FALLBACK_URL, DEFAULT_SIZES, ImageOptions, Widths};

/**
    Image configuration shared by all commands that resolve images.

    Every option can also be given through the environment,
    which is how deployments configure them.
*/
#[derive(Debug, Clone, Args)]
pub struct ImageArgs {
    /// Comma-separated variant widths, in pixels
    #[arg(long, env = "VITRINE_IMAGE_WIDTHS", default_value = "320,640,1024")]
    pub widths: Widths,
    /// Layout hint for responsive source selection
    #[arg(long, env = "VITRINE_IMAGE_SIZES", default_value = DEFAULT_SIZES)]
    pub sizes: String,
    /// Local asset used when no usable image exists
    #[arg(long, env = "VITRINE_FALLBACK_IMAGE", default_value = DEFAULT_FALLBACK_URL)]
    pub fallback: String,
}

impl ImageArgs {
    pub fn options(&self) -> ImageOptions {
        ImageOptions::new(self.widths.clone(), self.sizes.clone(), self.fallback.clone())
    }
}
