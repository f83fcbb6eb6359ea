//! Take a snapshot of the current revision

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;
use strata_core::Store;

pub fn run(root: &Path) -> Result<()> {
    let store =
        Store::open(root).with_context(|| format!("no store at {}", root.display()))?;

    let id = store.snapshot().context("snapshot failed")?;

    println!(
        "{} revision {}",
        "Created".green().bold(),
        id.to_string().yellow()
    );
    Ok(())
}
