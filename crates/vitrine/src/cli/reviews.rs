use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use vitrine_records::{ReviewCard, ReviewPage};

use super::args::ImageArgs;
use super::input::{print_json, read_input};

#[derive(Debug, Clone, Parser)]
pub struct ReviewsCommand {
    /// JSON file with a page of reviews, reads stdin when omitted
    pub file: Option<PathBuf>,
    #[command(flatten)]
    pub image: ImageArgs,
}

impl ReviewsCommand {
    pub async fn run(self) -> Result<()> {
        let text = read_input(self.file.as_deref()).await?;
        let page = ReviewPage::try_from_json(&text).context("failed to parse reviews")?;

        debug!(
            "Parsed {} reviews ({} in total)",
            page.results.len(),
            page.total()
        );

        let cards = ReviewCard::from_reviews(&page.results, &self.image.options());
        print_json(&cards)
    }
}
