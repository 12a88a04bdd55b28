//! `list`, `add` and `delete`.

use anyhow::Result;
use labeldesk::render;
use labeldesk::request::FormField;
use labeldesk::state::DeleteOutcome;
use labeldesk_catalog::ProductRecord;

use super::Session;

/// Print the catalog, optionally narrowed by a search query.
pub async fn list(session: &Session, search: Option<&str>, json_output: bool) -> Result<()> {
    let desk = session.open(false, None).await?;
    if let Some(query) = search {
        desk.search(query).await;
    }
    let view = desk.view();

    if json_output {
        let records: Vec<&ProductRecord> = view.visible().map(|r| &r.record).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        print!("{}", render::rows_table(&view));
    }
    Ok(())
}

/// Submit one product through the entry form.
pub async fn add(session: &Session, fields: &[(FormField, Option<String>)]) -> Result<()> {
    let desk = session.open(false, None).await?;
    for (field, value) in fields {
        if let Some(value) = value {
            desk.set_field(*field, value).await;
        }
    }
    desk.submit().await;

    let form = desk.form();
    if form.error.is_some() {
        anyhow::bail!("Product {} was not added.", form.draft.inventory_number);
    }
    let key = fields
        .iter()
        .find(|(f, _)| *f == FormField::InventoryNumber)
        .and_then(|(_, v)| v.as_deref())
        .unwrap_or_default();
    println!("Product {} added ({} in catalog).", key, desk.view().rows.len());
    Ok(())
}

pub async fn delete(session: &Session, inventory_number: &str, yes: bool) -> Result<()> {
    let desk = session.open(yes, None).await?;
    let Some(outcome) = desk.delete(inventory_number).await else {
        anyhow::bail!("No product with inventory number {}.", inventory_number);
    };

    match outcome {
        DeleteOutcome::Declined => println!("Cancelled."),
        DeleteOutcome::Failed => {
            let error = desk.delete_state().error.unwrap_or_else(|| "delete failed".to_string());
            anyhow::bail!(error);
        }
        DeleteOutcome::Deleted => match desk.view().error {
            Some(error) => println!(
                "Product {} deleted, but the list could not be refreshed: {}",
                inventory_number, error
            ),
            None => println!("Product {} deleted.", inventory_number),
        },
    }
    Ok(())
}
