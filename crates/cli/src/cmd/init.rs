//! Initialize a storage root

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;
use strata_core::Store;

pub fn run(root: &Path) -> Result<()> {
    let store = Store::init(root)
        .with_context(|| format!("failed to initialize store at {}", root.display()))?;

    println!(
        "{} {}",
        "Initialized".green().bold(),
        store.root().display().to_string().cyan()
    );
    println!("  HEAD:     0");
    println!("  Working:  {}", store.revision_dir(0).display());

    Ok(())
}
