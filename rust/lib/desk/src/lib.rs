//! Inventory label desk: the view engine behind the label front ends.
//!
//! - `state`: view states at well-known paths (`catalog/view`,
//!   `label/preview`, `print/state`, ...)
//! - `request`: what a front end emits
//! - `handlers`: request handlers and their wiring
//! - `label`: size options and the label composer
//! - `render`: HTML label and text table renderings
//! - `host`: confirmation, notices and printing, provided by the front end
//!
//! Every add or delete is followed by a full catalog fetch; rows are
//! never patched locally.

pub mod handlers;
pub mod host;
pub mod label;
pub mod render;
pub mod request;
pub mod state;

use std::sync::Arc;

use labeldesk_catalog::{CatalogApi, ProductRecord};
use labeldesk_flux::Flux;

pub use handlers::DeskContext;
pub use host::{Host, PrintJob};
pub use label::{ComposedLabel, ConfigError, LabelConfig, SizeOption};

use crate::request::*;
use crate::state::*;

/// A Flux engine with every desk handler registered.
///
/// Rows are addressed by inventory number here and by position on the
/// wire; only visible rows can be activated.
pub struct Desk {
    flux: Flux,
    ctx: Arc<DeskContext>,
}

impl Desk {
    /// Build a desk over `catalog`. Fails if the label sizes are unusable.
    pub fn new(
        catalog: Arc<dyn CatalogApi>,
        host: Arc<dyn Host>,
        config: LabelConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let flux = Flux::new();
        let ctx = Arc::new(DeskContext { catalog, host, config });
        handlers::register_handlers(&flux, ctx.clone());
        Ok(Self { flux, ctx })
    }

    pub fn flux(&self) -> &Flux {
        &self.flux
    }

    pub fn config(&self) -> &LabelConfig {
        &self.ctx.config
    }

    pub async fn initialize(&self) {
        self.flux.emit(InitializeReq::PATH, InitializeReq).await;
    }

    pub async fn refresh(&self) {
        self.flux.emit(LoadCatalogReq::PATH, LoadCatalogReq).await;
    }

    pub async fn search(&self, query: &str) {
        self.flux
            .emit(SearchReq::PATH, SearchReq { query: query.to_string() })
            .await;
    }

    /// Activate the row of `inventory_number`. Returns false if no such
    /// row is visible.
    pub async fn select(&self, inventory_number: &str) -> bool {
        let Some((index, record)) = self.visible_row(inventory_number) else {
            return false;
        };
        self.flux
            .bubble(&RowEvent::select_path(index), RowEvent { record })
            .await;
        true
    }

    /// Activate the delete action inside the row of `inventory_number`.
    /// Returns `None` if no such row is visible.
    pub async fn delete(&self, inventory_number: &str) -> Option<DeleteOutcome> {
        let (index, record) = self.visible_row(inventory_number)?;
        self.flux
            .bubble(&RowEvent::delete_path(index), RowEvent { record })
            .await;
        self.delete_state().outcome
    }

    pub async fn set_field(&self, field: FormField, value: &str) {
        self.flux
            .emit(UpdateFieldReq::PATH, UpdateFieldReq { field, value: value.to_string() })
            .await;
    }

    pub async fn submit(&self) {
        self.flux.emit(SubmitProductReq::PATH, SubmitProductReq).await;
    }

    pub async fn change_size(&self, size: &str) {
        self.flux
            .emit(ChangeSizeReq::PATH, ChangeSizeReq { size: size.to_string() })
            .await;
    }

    pub async fn print(&self) {
        self.flux.emit(PrintLabelReq::PATH, PrintLabelReq).await;
    }

    pub fn view(&self) -> CatalogView {
        self.flux.read::<CatalogView>().unwrap_or_default()
    }

    pub fn preview(&self) -> Option<ComposedLabel> {
        self.flux.read::<LabelPreview>().and_then(|p| p.label)
    }

    pub fn print_state(&self) -> PrintState {
        self.flux
            .read::<PrintState>()
            .unwrap_or_else(|| PrintState::new(&self.ctx.config.default_size))
    }

    pub fn form(&self) -> AddForm {
        self.flux.read::<AddForm>().unwrap_or_default()
    }

    pub fn delete_state(&self) -> DeleteState {
        self.flux.read::<DeleteState>().unwrap_or_default()
    }

    pub fn query(&self) -> String {
        self.flux.read::<SearchState>().unwrap_or_default().query
    }

    fn visible_row(&self, inventory_number: &str) -> Option<(usize, ProductRecord)> {
        let view = self.view();
        let index = view.position(inventory_number)?;
        let row = &view.rows[index];
        row.visible.then(|| (index, row.record.clone()))
    }
}
