//! Row selection: compose the label preview.

use labeldesk_flux::StateStore;
use tracing::{debug, warn};

use crate::handlers::DeskContext;
use crate::label;
use crate::request::RowEvent;
use crate::state::*;

/// Handle a row activation at `catalog/rows/{index}`.
pub async fn handle_select(event: &RowEvent, store: &StateStore, ctx: &DeskContext) {
    let print = current_print(store, ctx);
    let Some(size) = ctx.config.size(&print.size).or_else(|| ctx.config.default_option()) else {
        warn!(size = %print.size, "no label size available, label not composed");
        return;
    };

    store.put(LabelPreview { label: None });
    let composed = label::compose(
        &event.record,
        size,
        ctx.catalog.endpoints(),
        &ctx.config.logo,
    );
    debug!(inventory_number = %event.record.inventory_number, "label composed");
    store.put(LabelPreview { label: Some(composed) });
    store.put(PrintState { enabled: true, ..print });
}

pub(crate) fn current_print(store: &StateStore, ctx: &DeskContext) -> PrintState {
    store
        .read::<PrintState>()
        .unwrap_or_else(|| PrintState::new(&ctx.config.default_size))
}
