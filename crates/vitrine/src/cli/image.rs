use anyhow::Result;
use clap::Parser;
use tracing::{debug, warn};

use vitrine_imagery::{resolve_with, util::is_disabled_variant_url};

use super::args::ImageArgs;
use super::input::print_json;

#[derive(Debug, Clone, Parser)]
pub struct ImageCommand {
    /// Canonical image URL, resolves to the fallback when omitted
    pub url: Option<String>,
    #[command(flatten)]
    pub image: ImageArgs,
    /// Print only the srcset listing instead of the full JSON
    #[arg(long)]
    pub srcset: bool,
}

impl ImageCommand {
    pub fn run(self) -> Result<()> {
        let options = self.image.options();

        debug!(
            "Parsed arguments\n\twidths: {}\n\tsizes: {}\n\tfallback: {}",
            options.widths, options.sizes, options.fallback_url
        );

        if let Some(url) = self.url.as_deref()
            && is_disabled_variant_url(url)
        {
            warn!("URL '{url}' references a missing backend object, no variants offered");
        }

        let resolved = resolve_with(self.url.as_deref(), &options);
        if self.srcset {
            println!("{}", resolved.srcset().unwrap_or_default());
            Ok(())
        } else {
            print_json(&resolved)
        }
    }
}
