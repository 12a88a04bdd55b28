//! Product records as exchanged with the inventory API.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// One inventory item, keyed by `inventory_number`.
///
/// Extra fields the server sends (such as its row id) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub inventory_number: String,
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

impl ProductRecord {
    pub fn new(inventory_number: impl Into<String>, product_name: impl Into<String>) -> Self {
        Self {
            inventory_number: inventory_number.into(),
            product_name: product_name.into(),
            brand: None,
            model: None,
            equipment_type: None,
            serial_number: None,
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }
}

/// Body of `POST /api/products`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub product_name: String,
    pub inventory_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_type: Option<String>,
}

impl NewProduct {
    pub fn new(inventory_number: impl Into<String>, product_name: impl Into<String>) -> Self {
        Self {
            inventory_number: inventory_number.into(),
            product_name: product_name.into(),
            ..Default::default()
        }
    }

    /// Name of the first required field that is empty, if any.
    ///
    /// Whitespace counts as a value; the server decides what it accepts.
    pub fn missing_required(&self) -> Option<&'static str> {
        if self.inventory_number.is_empty() {
            Some("inventory_number")
        } else if self.product_name.is_empty() {
            Some("product_name")
        } else {
            None
        }
    }

    /// Drop blank optional fields so they are sent as absent.
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.serial_number,
            &mut self.brand,
            &mut self.model,
            &mut self.equipment_type,
        ] {
            if field.as_deref().is_some_and(|v| v.trim().is_empty()) {
                *field = None;
            }
        }
        self
    }

    pub fn into_record(self) -> ProductRecord {
        ProductRecord {
            inventory_number: self.inventory_number,
            product_name: self.product_name,
            brand: self.brand,
            model: self.model,
            equipment_type: self.equipment_type,
            serial_number: self.serial_number,
        }
    }
}

/// Result of a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Success { message: Option<String> },
    Failure { message: String },
}

impl CreateOutcome {
    /// Turn a server-side rejection into [`ApiError::Validation`].
    pub fn into_result(self) -> Result<Option<String>, ApiError> {
        match self {
            CreateOutcome::Success { message } => Ok(message),
            CreateOutcome::Failure { message } => Err(ApiError::Validation(message)),
        }
    }
}

/// Wire shape of the create response: `{status, message?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CreateResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl From<CreateResponse> for CreateOutcome {
    fn from(resp: CreateResponse) -> Self {
        if resp.status == "success" {
            CreateOutcome::Success { message: resp.message }
        } else {
            CreateOutcome::Failure {
                message: resp.message.unwrap_or_else(|| format!("create failed ({})", resp.status)),
            }
        }
    }
}
