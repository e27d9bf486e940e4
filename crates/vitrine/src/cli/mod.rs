use anyhow::Result;
use clap::{Parser, Subcommand};

mod args;
mod image;
mod input;
mod name;
mod products;
mod reviews;

use self::image::ImageCommand;
use self::name::NameCommand;
use self::products::ProductsCommand;
use self::reviews::ReviewsCommand;

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Display names and responsive images for storefront records")]
pub struct Cli {
    /// Enables debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub subcommand: CliSubcommand,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.subcommand {
            CliSubcommand::Name(cmd) => cmd.run(),
            CliSubcommand::Image(cmd) => cmd.run(),
            CliSubcommand::Reviews(cmd) => cmd.run().await,
            CliSubcommand::Products(cmd) => cmd.run().await,
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum CliSubcommand {
    /// Prints the display name for a raw name and/or email
    Name(NameCommand),
    /// Resolves an image URL into a primary URL and width variants
    Image(ImageCommand),
    /// Turns a page of backend reviews into review cards
    Reviews(ReviewsCommand),
    /// Turns a page of backend products into product cards
    Products(ProductsCommand),
}
