//! Mutation states, stored at `catalog/add-form` and `catalog/delete`.

use labeldesk_catalog::NewProduct;
use labeldesk_flux::State;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

/// Entry form for a new product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddForm {
    pub draft: NewProduct,
    pub phase: Phase,
    pub error: Option<String>,
}

impl State for AddForm {
    const PATH: &'static str = "catalog/add-form";
}

impl AddForm {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// How the last delete request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The operator said no. Nothing was sent.
    Declined,
    /// The record is no longer on the server, whether or not the refresh
    /// after it succeeded.
    Deleted,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteState {
    pub phase: Phase,
    pub target: Option<String>,
    pub outcome: Option<DeleteOutcome>,
    pub error: Option<String>,
}

impl State for DeleteState {
    const PATH: &'static str = "catalog/delete";
}
