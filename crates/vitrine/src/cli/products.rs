use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use vitrine_records::{ProductCard, ProductPage};

use super::args::ImageArgs;
use super::input::{print_json, read_input};

#[derive(Debug, Clone, Parser)]
pub struct ProductsCommand {
    /// JSON file with a page of products, reads stdin when omitted
    pub file: Option<PathBuf>,
    #[command(flatten)]
    pub image: ImageArgs,
}

impl ProductsCommand {
    pub async fn run(self) -> Result<()> {
        let text = read_input(self.file.as_deref()).await?;
        let page = ProductPage::try_from_json(&text).context("failed to parse products")?;

        debug!("Parsed {} products", page.results.len());

        let cards = ProductCard::from_products(&page.results, &self.image.options());
        print_json(&cards)
    }
}
