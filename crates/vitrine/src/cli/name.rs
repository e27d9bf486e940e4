use anyhow::Result;
use clap::Parser;
use tracing::debug;

use vitrine_identity::{initials, normalize};

#[derive(Debug, Clone, Parser)]
pub struct NameCommand {
    /// Raw display name, as stored by the backend
    #[arg(long)]
    pub name: Option<String>,
    /// Raw email address, as stored by the backend
    #[arg(long)]
    pub email: Option<String>,
    /// Print avatar initials instead of the display name
    #[arg(long)]
    pub initials: bool,
}

impl NameCommand {
    pub fn run(self) -> Result<()> {
        debug!(
            "Parsed arguments\n\tname given: {}\n\temail given: {}",
            self.name.is_some(),
            self.email.is_some()
        );

        let display_name = normalize(self.name.as_deref(), self.email.as_deref());
        if self.initials {
            println!("{}", initials(&display_name));
        } else {
            println!("{display_name}");
        }

        Ok(())
    }
}
