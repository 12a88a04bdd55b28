//! Print requests.

/// Pick a label size by id.
#[derive(Debug, Clone)]
pub struct ChangeSizeReq {
    pub size: String,
}

impl ChangeSizeReq {
    pub const PATH: &'static str = "print/size";
}

/// Apply the selected size class and hand the label to the host.
#[derive(Debug, Clone)]
pub struct PrintLabelReq;

impl PrintLabelReq {
    pub const PATH: &'static str = "print/label";
}
