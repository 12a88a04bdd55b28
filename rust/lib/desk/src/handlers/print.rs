//! Size selection and printing.

use labeldesk_flux::StateStore;
use tracing::{info, warn};

use crate::handlers::DeskContext;
use crate::handlers::label::current_print;
use crate::host::PrintJob;
use crate::render;
use crate::request::ChangeSizeReq;
use crate::state::*;

/// Handle `print/size`. Unknown ids are rejected and the previous
/// selection stays.
pub async fn handle_change_size(req: &ChangeSizeReq, store: &StateStore, ctx: &DeskContext) {
    if ctx.config.size(&req.size).is_none() {
        warn!(size = %req.size, known = ?ctx.config.ids(), "unknown label size");
        return;
    }
    let print = current_print(store, ctx);
    store.put(PrintState { size: req.size.clone(), ..print });
}

/// Handle `print/label`.
///
/// Resets the label's size class to exactly the selected one, then asks
/// the host to print. Does nothing while no label is composed.
pub async fn handle_print(store: &StateStore, ctx: &DeskContext) {
    let print = current_print(store, ctx);
    let label = store.read::<LabelPreview>().and_then(|p| p.label);
    let (true, Some(label)) = (print.enabled, label) else {
        warn!("print requested before a label was composed");
        return;
    };
    let Some(size) = ctx.config.size(&print.size).or_else(|| ctx.config.default_option()) else {
        return;
    };

    let label = label.with_size(size);
    store.put(LabelPreview { label: Some(label.clone()) });

    let job = PrintJob {
        html: render::label_html(&label),
        label,
        size: size.clone(),
    };
    match ctx.host.print(&job) {
        Ok(()) => {
            info!(inventory_number = %job.label.record.inventory_number, class = %size.class, "label printed");
            store.put(PrintState {
                applied_class: Some(size.class.clone()),
                printed: print.printed + 1,
                ..print
            });
        }
        Err(e) => {
            warn!(error = %e, "print failed");
            ctx.host.notify(&format!("Print failed: {}", e));
        }
    }
}
