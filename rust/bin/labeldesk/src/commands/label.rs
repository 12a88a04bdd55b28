//! `label` and `sizes`.

use std::path::PathBuf;

use anyhow::Result;

use super::Session;

/// Compose and print the label of one product.
pub async fn print(
    session: &Session,
    inventory_number: &str,
    size: Option<&str>,
    output: Option<PathBuf>,
) -> Result<()> {
    if let Some(size) = size {
        if session.config.label.size(size).is_none() {
            anyhow::bail!(
                "Unknown size {:?}. Available: {}.",
                size,
                session.config.label.ids().join(", ")
            );
        }
    }

    let desk = session.open(false, output).await?;
    if let Some(size) = size {
        desk.change_size(size).await;
    }
    if !desk.select(inventory_number).await {
        anyhow::bail!("No product with inventory number {}.", inventory_number);
    }
    desk.print().await;

    if desk.print_state().printed == 0 {
        anyhow::bail!("Label was not printed.");
    }
    Ok(())
}

/// List the configured label sizes.
pub fn sizes(session: &Session) {
    let label = &session.config.label;
    println!("{:<10}  {:<16}  {:>10}", "SIZE", "CLASS", "MM");
    for size in &label.sizes {
        let mm = match (size.width_mm, size.height_mm) {
            (Some(w), Some(h)) => format!("{}x{}", w, h),
            _ => "-".to_string(),
        };
        let marker = if size.id == label.default_size { " (default)" } else { "" };
        println!("{:<10}  {:<16}  {:>10}{}", size.id, size.class, mm, marker);
    }
}
