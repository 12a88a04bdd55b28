//! Catalog list: fetch and render.

use labeldesk_catalog::{ApiError, ProductRecord};
use labeldesk_flux::StateStore;
use tracing::{debug, warn};

use crate::handlers::{DeskContext, search};
use crate::state::*;

/// Display text of a row: name and key, then the optional attributes that
/// are present. Action labels are not part of it.
pub fn row_text(record: &ProductRecord) -> String {
    let mut parts = vec![record.product_name.as_str(), record.inventory_number.as_str()];
    for field in [
        &record.brand,
        &record.model,
        &record.equipment_type,
        &record.serial_number,
    ] {
        if let Some(value) = field.as_deref().filter(|v| !v.is_empty()) {
            parts.push(value);
        }
    }
    parts.join(" ")
}

/// Project records into rows, keeping server order.
pub fn build_rows(records: Vec<ProductRecord>) -> Vec<ProductRow> {
    records
        .into_iter()
        .map(|record| ProductRow {
            text: row_text(&record),
            record,
            visible: true,
        })
        .collect()
}

/// Handle `catalog/load`.
///
/// Rows are replaced only once the fetch has succeeded; on failure the
/// previous rows stay and the error is recorded on the view.
pub async fn handle_load(store: &StateStore, ctx: &DeskContext) -> Result<(), ApiError> {
    store.update(CatalogView::default, |view| view.loading = true);

    match ctx.catalog.list_products().await {
        Ok(records) => {
            let query = store.read::<SearchState>().unwrap_or_default().query;
            let mut rows = build_rows(records);
            search::apply(&query, &mut rows);
            debug!(rows = rows.len(), query = %query, "catalog rendered");
            store.put(CatalogView {
                rows,
                loading: false,
                loaded: true,
                error: None,
            });
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "failed to load products");
            store.update(CatalogView::default, |view| {
                view.loading = false;
                view.error = Some(e.to_string());
            });
            Err(e)
        }
    }
}
