//! Request handlers and their Flux wiring.

pub mod catalog;
pub mod label;
pub mod mutation;
pub mod print;
pub mod search;

use std::sync::Arc;

use labeldesk_catalog::CatalogApi;
use labeldesk_flux::{Flux, Payload, Propagation, StateStore};
use tracing::warn;

use crate::host::Host;
use crate::label::LabelConfig;
use crate::request::*;
use crate::state::*;

/// Everything the handlers reach outside the store.
pub struct DeskContext {
    pub catalog: Arc<dyn CatalogApi>,
    pub host: Arc<dyn Host>,
    pub config: LabelConfig,
}

fn downcast<'a, T: 'static>(payload: &'a Payload, path: &str) -> Option<&'a T> {
    let req = payload.downcast_ref::<T>();
    if req.is_none() {
        warn!(path, expected = std::any::type_name::<T>(), "unexpected payload type");
    }
    req
}

/// Reset every view state to its initial value.
pub async fn handle_initialize(store: &StateStore, ctx: &DeskContext) {
    store.put(CatalogView::default());
    store.put(SearchState::default());
    store.put(LabelPreview::default());
    store.put(PrintState::new(&ctx.config.default_size));
    store.put(AddForm::empty());
    store.put(DeleteState::default());
}

/// Register all handlers with a Flux instance.
pub fn register_handlers(flux: &Flux, ctx: Arc<DeskContext>) {
    // app/initialize
    {
        let ctx = ctx.clone();
        flux.on(InitializeReq::PATH, move |_, _, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                handle_initialize(&store, &ctx).await;
                let _ = catalog::handle_load(&store, &ctx).await;
            }
        });
    }

    // catalog/load
    {
        let ctx = ctx.clone();
        flux.on(LoadCatalogReq::PATH, move |_, _, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                let _ = catalog::handle_load(&store, &ctx).await;
            }
        });
    }

    // catalog/search
    flux.on(SearchReq::PATH, |path, payload, store: Arc<StateStore>| async move {
        if let Some(req) = downcast::<SearchReq>(&payload, &path) {
            search::handle_search(req, &store).await;
        }
    });

    // catalog/rows/+/delete: stops before the row's select handler.
    {
        let ctx = ctx.clone();
        flux.on(RowEvent::DELETE, move |path, payload, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                if let Some(event) = downcast::<RowEvent>(&payload, &path) {
                    mutation::handle_delete(event, &store, &ctx).await;
                }
                Propagation::Stop
            }
        });
    }

    // catalog/rows/+
    {
        let ctx = ctx.clone();
        flux.on(RowEvent::SELECT, move |path, payload, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                if let Some(event) = downcast::<RowEvent>(&payload, &path) {
                    label::handle_select(event, &store, &ctx).await;
                }
            }
        });
    }

    // catalog/add-form/field
    flux.on(UpdateFieldReq::PATH, |path, payload, store: Arc<StateStore>| async move {
        if let Some(req) = downcast::<UpdateFieldReq>(&payload, &path) {
            mutation::handle_update_field(req, &store).await;
        }
    });

    // catalog/add-form/submit
    {
        let ctx = ctx.clone();
        flux.on(SubmitProductReq::PATH, move |_, _, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                mutation::handle_submit(&store, &ctx).await;
            }
        });
    }

    // print/size
    {
        let ctx = ctx.clone();
        flux.on(ChangeSizeReq::PATH, move |path, payload, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                if let Some(req) = downcast::<ChangeSizeReq>(&payload, &path) {
                    print::handle_change_size(req, &store, &ctx).await;
                }
            }
        });
    }

    // print/label
    {
        let ctx = ctx.clone();
        flux.on(PrintLabelReq::PATH, move |_, _, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                print::handle_print(&store, &ctx).await;
            }
        });
    }
}
