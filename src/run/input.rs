//! Identifier collection from the configured input surfaces.

use anyhow::{Context, Result};
use log::info;
use tokio::io::AsyncReadExt;

use crate::config::Config;
use crate::identifiers::{extract_from_file, parse_identifiers, Identifier};

/// Gathers identifiers from positional arguments, `--input`, and `--stdin`,
/// in that order.
///
/// # Errors
///
/// Returns an error if the input file or stdin cannot be read.
pub async fn collect_identifiers(config: &Config) -> Result<Vec<Identifier>> {
    let mut identifiers: Vec<Identifier> = config
        .identifiers
        .iter()
        .flat_map(|arg| parse_identifiers(arg))
        .collect();

    if let Some(path) = &config.input {
        let from_file = extract_from_file(path)
            .with_context(|| format!("Failed to read identifiers from {}", path.display()))?;
        identifiers.extend(from_file);
    }

    if config.stdin {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("Failed to read identifiers from stdin")?;
        let from_stdin = parse_identifiers(&text);
        info!("Read {} identifier(s) from stdin", from_stdin.len());
        identifiers.extend(from_stdin);
    }

    Ok(identifiers)
}
