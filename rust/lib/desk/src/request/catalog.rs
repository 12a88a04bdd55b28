//! Catalog list requests and row events.

use labeldesk_catalog::ProductRecord;

/// Re-fetch the full catalog and redraw every row.
#[derive(Debug, Clone)]
pub struct LoadCatalogReq;

impl LoadCatalogReq {
    pub const PATH: &'static str = "catalog/load";
}

/// Change the search query.
#[derive(Debug, Clone)]
pub struct SearchReq {
    pub query: String,
}

impl SearchReq {
    pub const PATH: &'static str = "catalog/search";
}

/// Activation of a row, or of the delete action inside it.
///
/// Row events are addressed by row position (`catalog/rows/3`) and
/// bubble: an event on `catalog/rows/3/delete` reaches the row's select
/// handler at `catalog/rows/3` unless the delete handler stops it.
#[derive(Debug, Clone)]
pub struct RowEvent {
    /// The record as rendered when the row was activated.
    pub record: ProductRecord,
}

impl RowEvent {
    pub const SELECT: &'static str = "catalog/rows/+";
    pub const DELETE: &'static str = "catalog/rows/+/delete";

    pub fn select_path(index: usize) -> String {
        format!("catalog/rows/{}", index)
    }

    pub fn delete_path(index: usize) -> String {
        format!("catalog/rows/{}/delete", index)
    }
}
