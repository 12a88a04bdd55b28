//! Label sizes and the label composer.

use std::collections::HashSet;

use labeldesk_catalog::{Endpoints, ProductRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_LOGO: &str = "/assets/logo.png";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no label sizes configured")]
    NoSizes,

    #[error("duplicate label size id {0:?}")]
    DuplicateId(String),

    #[error("duplicate label size class {0:?}")]
    DuplicateClass(String),

    #[error("default size {0:?} is not a configured size")]
    UnknownDefault(String),
}

/// One entry of the size selector. `id` is what the operator picks,
/// `class` is the style class applied to the label container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeOption {
    pub id: String,
    pub class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_mm: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_mm: Option<f32>,
}

impl SizeOption {
    pub fn new(id: &str, class: &str, width_mm: f32, height_mm: f32) -> Self {
        Self {
            id: id.to_string(),
            class: class.to_string(),
            width_mm: Some(width_mm),
            height_mm: Some(height_mm),
        }
    }
}

/// Closed set of label sizes plus the fixed decoration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub sizes: Vec<SizeOption>,
    pub default_size: String,
    /// Path of the logo asset, resolved against the API base URL.
    pub logo: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            sizes: vec![
                SizeOption::new("small", "label-small", 50.0, 25.0),
                SizeOption::new("medium", "label-medium", 62.0, 38.0),
                SizeOption::new("large", "label-large", 100.0, 50.0),
            ],
            default_size: "small".to_string(),
            logo: DEFAULT_LOGO.to_string(),
        }
    }
}

impl LabelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::NoSizes);
        }
        let mut ids = HashSet::new();
        let mut classes = HashSet::new();
        for size in &self.sizes {
            if !ids.insert(size.id.as_str()) {
                return Err(ConfigError::DuplicateId(size.id.clone()));
            }
            if !classes.insert(size.class.as_str()) {
                return Err(ConfigError::DuplicateClass(size.class.clone()));
            }
        }
        if self.size(&self.default_size).is_none() {
            return Err(ConfigError::UnknownDefault(self.default_size.clone()));
        }
        Ok(())
    }

    pub fn size(&self, id: &str) -> Option<&SizeOption> {
        self.sizes.iter().find(|s| s.id == id)
    }

    /// The default option, or the first one if the default is unknown.
    pub fn default_option(&self) -> Option<&SizeOption> {
        self.size(&self.default_size).or_else(|| self.sizes.first())
    }

    pub fn ids(&self) -> Vec<&str> {
        self.sizes.iter().map(|s| s.id.as_str()).collect()
    }
}

/// Print-ready projection of one record.
///
/// The record is a snapshot taken at selection time. The layout is always
/// two columns: text on the left, QR code and logo on the right.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedLabel {
    pub record: ProductRecord,
    pub text: Vec<String>,
    pub qr_url: String,
    pub logo_url: String,
    pub size_class: String,
}

impl ComposedLabel {
    /// Replace the size class. Only one class is ever applied.
    pub fn with_size(mut self, size: &SizeOption) -> Self {
        self.size_class = size.class.clone();
        self
    }
}

pub fn compose(
    record: &ProductRecord,
    size: &SizeOption,
    endpoints: &Endpoints,
    logo: &str,
) -> ComposedLabel {
    let mut text = vec![record.product_name.clone()];
    if let Some(brand) = record.brand.as_deref().filter(|b| !b.trim().is_empty()) {
        text.push(brand.to_string());
    }
    text.push(format!("ID: {}", record.inventory_number));

    ComposedLabel {
        record: record.clone(),
        text,
        qr_url: endpoints.qr(&record.inventory_number).to_string(),
        logo_url: endpoints.asset(logo).to_string(),
        size_class: size.class.clone(),
    }
}
