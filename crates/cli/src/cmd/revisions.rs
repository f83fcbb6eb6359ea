//! Show HEAD and the revision list

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;
use strata_core::Store;

pub fn run(root: &Path) -> Result<()> {
    let store =
        Store::open(root).with_context(|| format!("no store at {}", root.display()))?;

    let head = store.current_revision()?;

    println!("{}", "Revisions".bold());
    for rev in store.list_revisions()? {
        if rev == head {
            println!("  {} {}", rev.to_string().yellow(), "(HEAD)".dimmed());
        } else {
            println!("  {rev}");
        }
    }

    Ok(())
}
