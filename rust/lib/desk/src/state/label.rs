//! Label preview state, stored at `label/preview`.

use labeldesk_flux::State;

use crate::label::ComposedLabel;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelPreview {
    pub label: Option<ComposedLabel>,
}

impl State for LabelPreview {
    const PATH: &'static str = "label/preview";
}
