//! Catalog list state, stored at `catalog/view` and `catalog/query`.

use labeldesk_catalog::ProductRecord;
use labeldesk_flux::State;

/// One rendered row of the catalog list.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub record: ProductRecord,
    /// What the search filter matches against.
    pub text: String,
    pub visible: bool,
}

/// The rendered list: a direct projection of the last successful fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogView {
    pub rows: Vec<ProductRow>,
    pub loading: bool,
    /// At least one fetch has succeeded.
    pub loaded: bool,
    /// Diagnostic of the last failed fetch.
    pub error: Option<String>,
}

impl State for CatalogView {
    const PATH: &'static str = "catalog/view";
}

impl CatalogView {
    pub fn visible(&self) -> impl Iterator<Item = &ProductRow> {
        self.rows.iter().filter(|r| r.visible)
    }

    pub fn visible_keys(&self) -> Vec<&str> {
        self.visible().map(|r| r.record.inventory_number.as_str()).collect()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.record.inventory_number.as_str()).collect()
    }

    /// Position of the row for `inventory_number`.
    pub fn position(&self, inventory_number: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.record.inventory_number == inventory_number)
    }
}

/// Current search query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub query: String,
}

impl State for SearchState {
    const PATH: &'static str = "catalog/query";
}
