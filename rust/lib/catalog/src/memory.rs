//! In-process catalog with the same contract as the REST API.
//!
//! Lists are returned ordered by product name, as the server orders
//! them. Backs the desk and import tests without a running server.

use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::api::CatalogApi;
use crate::endpoints::Endpoints;
use crate::error::ApiError;
use crate::model::{CreateOutcome, NewProduct, ProductRecord};

pub struct MemoryCatalog {
    products: RwLock<Vec<ProductRecord>>,
    endpoints: Endpoints,
    offline: AtomicBool,
    list_calls: AtomicUsize,
}

impl MemoryCatalog {
    pub fn new(endpoints: Endpoints) -> Self {
        Self::with_products(endpoints, Vec::new())
    }

    pub fn with_products(endpoints: Endpoints, products: Vec<ProductRecord>) -> Self {
        Self {
            products: RwLock::new(products),
            endpoints,
            offline: AtomicBool::new(false),
            list_calls: AtomicUsize::new(0),
        }
    }

    /// Make every call fail with [`ApiError::Network`] until switched back.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of `list_products` calls served so far.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// The stored records, in insertion order.
    pub fn snapshot(&self) -> Vec<ProductRecord> {
        self.products.read().unwrap().clone()
    }

    fn check_online(&self) -> Result<(), ApiError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(ApiError::Network(format!("{} unreachable", self.endpoints.base())));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CatalogApi for MemoryCatalog {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ApiError> {
        self.check_online()?;
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let mut products = self.snapshot();
        products.sort_by(|a, b| a.product_name.cmp(&b.product_name));
        Ok(products)
    }

    async fn create_product(&self, product: &NewProduct) -> Result<CreateOutcome, ApiError> {
        self.check_online()?;
        if let Some(field) = product.missing_required() {
            return Ok(CreateOutcome::Failure { message: format!("{} is required", field) });
        }
        let mut products = self.products.write().unwrap();
        if products.iter().any(|p| p.inventory_number == product.inventory_number) {
            return Ok(CreateOutcome::Failure {
                message: "inventory number already exists".to_string(),
            });
        }
        products.push(product.clone().normalized().into_record());
        Ok(CreateOutcome::Success { message: Some("product added".to_string()) })
    }

    async fn delete_product(&self, inventory_number: &str) -> Result<(), ApiError> {
        self.check_online()?;
        let mut products = self.products.write().unwrap();
        let before = products.len();
        products.retain(|p| p.inventory_number != inventory_number);
        if products.len() == before {
            return Err(ApiError::NotFound(inventory_number.to_string()));
        }
        Ok(())
    }

    fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}
