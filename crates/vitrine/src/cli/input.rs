use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::{AsyncReadExt, stdin};
use tracing::debug;

/**
    Reads the whole input as a string - from the given file if any, otherwise stdin.
*/
pub async fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        debug!("Reading input from '{}'", path.display());
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read '{}'", path.display()))
    } else {
        debug!("Reading input from stdin");
        let mut contents = String::new();
        stdin()
            .read_to_string(&mut contents)
            .await
            .context("failed to read stdin")?;
        Ok(contents)
    }
}

/**
    Prints the given value to stdout as pretty JSON.
*/
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}
