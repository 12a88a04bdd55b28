//! Add and delete, each followed by a full catalog refresh.

use labeldesk_catalog::{ApiError, CreateOutcome};
use labeldesk_flux::StateStore;
use tracing::{debug, info, warn};

use crate::handlers::{DeskContext, catalog};
use crate::request::*;
use crate::state::*;

/// Handle `catalog/add-form/field`.
pub async fn handle_update_field(req: &UpdateFieldReq, store: &StateStore) {
    store.update(AddForm::empty, |form| {
        req.field.apply(&mut form.draft, &req.value);
    });
}

/// Handle `catalog/add-form/submit`.
///
/// Only the required fields are checked locally. On success the form is
/// cleared and the list refreshed; on any failure the form keeps its
/// values and the operator gets a notice.
pub async fn handle_submit(store: &StateStore, ctx: &DeskContext) {
    let form = store.read::<AddForm>().unwrap_or_default();

    if let Some(field) = form.draft.missing_required() {
        let message = format!("Error: {} is required", field);
        store.put(AddForm { error: Some(message.clone()), phase: Phase::Idle, ..form });
        ctx.host.notify(&message);
        return;
    }

    store.put(AddForm { phase: Phase::Submitting, error: None, ..form.clone() });

    let product = form.draft.clone().normalized();
    let result = ctx
        .catalog
        .create_product(&product)
        .await
        .and_then(CreateOutcome::into_result);

    match result {
        Ok(message) => {
            info!(inventory_number = %product.inventory_number, message = ?message, "product added");
            store.put(AddForm::empty());
            let _ = catalog::handle_load(store, ctx).await;
        }
        Err(e) => {
            warn!(inventory_number = %product.inventory_number, error = %e, "create failed");
            let message = match e {
                ApiError::Validation(message) => format!("Error: {}", message),
                other => format!("Error: {}", other),
            };
            store.put(AddForm {
                draft: form.draft,
                phase: Phase::Idle,
                error: Some(message.clone()),
            });
            ctx.host.notify(&message);
        }
    }
}

/// Handle `catalog/rows/{index}/delete`.
///
/// Asks for confirmation first. A record that is already gone counts as
/// deleted. The result lands in [`DeleteState::outcome`] before the
/// refresh, so a failed refresh does not hide a completed delete.
pub async fn handle_delete(event: &RowEvent, store: &StateStore, ctx: &DeskContext) {
    let record = &event.record;
    let question = format!(
        "Are you sure you want to delete \"{}\" ({})?",
        record.product_name, record.inventory_number
    );
    let key = record.inventory_number.clone();
    if !ctx.host.confirm(&question) {
        debug!(inventory_number = %key, "delete declined");
        store.put(DeleteState {
            target: Some(key),
            outcome: Some(DeleteOutcome::Declined),
            ..Default::default()
        });
        return;
    }

    store.put(DeleteState {
        phase: Phase::Submitting,
        target: Some(key.clone()),
        ..Default::default()
    });

    match ctx.catalog.delete_product(&key).await {
        Ok(()) => info!(inventory_number = %key, "product deleted"),
        Err(e) if e.is_not_found() => debug!(inventory_number = %key, "already deleted"),
        Err(e) => {
            warn!(inventory_number = %key, error = %e, "delete failed");
            let message = format!("Could not delete \"{}\": {}", record.product_name, e);
            store.put(DeleteState {
                phase: Phase::Idle,
                target: Some(key),
                outcome: Some(DeleteOutcome::Failed),
                error: Some(message.clone()),
            });
            ctx.host.notify(&message);
            return;
        }
    }

    store.put(DeleteState {
        target: Some(key),
        outcome: Some(DeleteOutcome::Deleted),
        ..Default::default()
    });
    let _ = catalog::handle_load(store, ctx).await;
}
