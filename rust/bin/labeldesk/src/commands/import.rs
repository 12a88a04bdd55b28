//! `import`: bulk-load an inventory export.

use std::path::Path;

use anyhow::{Context, Result};
use labeldesk_catalog::import;

use super::Session;

pub async fn run(session: &Session, file: &Path, delimiter: char) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let batch = import::parse(&text, delimiter)
        .with_context(|| format!("parsing {}", file.display()))?;
    println!("Read {} rows from {}.", batch.rows.len() + batch.rejected.len(), file.display());

    let catalog = session.catalog()?;
    let summary = import::run(catalog.as_ref(), batch).await?;

    for key in &summary.skipped {
        println!("  skipped (already exists): {}", key);
    }
    for (line, reason) in &summary.failed {
        println!("  line {}: {}", line, reason);
    }
    println!(
        "Imported {}, skipped {}, failed {}.",
        summary.imported,
        summary.skipped.len(),
        summary.failed.len()
    );
    Ok(())
}
