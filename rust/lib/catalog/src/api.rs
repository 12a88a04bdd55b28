use crate::endpoints::Endpoints;
use crate::error::ApiError;
use crate::model::{CreateOutcome, NewProduct, ProductRecord};

/// CRUD access to the product catalog.
///
/// The catalog is the single source of truth: callers re-fetch the full
/// list after every successful mutation instead of patching local copies.
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync + 'static {
    /// Fetch the current catalog in server order.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ApiError>;

    /// Submit a new record. A rejection by the server is
    /// `Ok(CreateOutcome::Failure)`, not an `Err`.
    async fn create_product(&self, product: &NewProduct) -> Result<CreateOutcome, ApiError>;

    /// Remove a record by key. Fails with [`ApiError::NotFound`] if the
    /// key no longer exists.
    async fn delete_product(&self, inventory_number: &str) -> Result<(), ApiError>;

    /// URLs of the API this catalog talks to (QR and asset references).
    fn endpoints(&self) -> &Endpoints;
}
