//! Catalog client for the equipment inventory API.
//!
//! Provides the product model, the error taxonomy, and two implementations
//! of [`CatalogApi`]: [`HttpCatalog`] talks to the REST API, and
//! [`MemoryCatalog`] keeps the catalog in process with the same contract.
//!
//! # Usage
//!
//! ```ignore
//! use labeldesk_catalog::{CatalogApi, HttpCatalog, NewProduct};
//!
//! let catalog = HttpCatalog::new("http://192.168.1.144:5000")?;
//! let products = catalog.list_products().await?;
//! let outcome = catalog.create_product(&NewProduct::new("INV-001", "Laptop")).await?;
//! ```

pub mod api;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod import;
pub mod memory;
pub mod model;

pub use api::CatalogApi;
pub use endpoints::Endpoints;
pub use error::ApiError;
pub use http::HttpCatalog;
pub use import::{ImportBatch, ImportError, ImportRow, ImportSummary};
pub use memory::MemoryCatalog;
pub use model::{CreateOutcome, NewProduct, ProductRecord};
