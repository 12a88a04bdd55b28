//! HTTP implementation of [`CatalogApi`].

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::CatalogApi;
use crate::endpoints::Endpoints;
use crate::error::ApiError;
use crate::model::{CreateOutcome, CreateResponse, NewProduct, ProductRecord};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Catalog client over the REST API.
pub struct HttpCatalog {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpCatalog {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let endpoints = Endpoints::parse(base_url)?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoints })
    }

    /// Map a non-success response to `ApiError::Server`.
    async fn server_error(resp: reqwest::Response) -> ApiError {
        let status = resp.status().as_u16();
        let message = resp.text().await.unwrap_or_default();
        ApiError::Server { status, message }
    }

    async fn parse<R: DeserializeOwned>(resp: reqwest::Response) -> Result<R, ApiError> {
        if !resp.status().is_success() {
            return Err(Self::server_error(resp).await);
        }
        resp.json::<R>()
            .await
            .map_err(|e| ApiError::Decode(format!("response body: {}", e)))
    }
}

#[async_trait::async_trait]
impl CatalogApi for HttpCatalog {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ApiError> {
        let url = self.endpoints.products();
        debug!(%url, "list products");
        let resp = self.http.get(url).send().await?;
        Self::parse(resp).await
    }

    async fn create_product(&self, product: &NewProduct) -> Result<CreateOutcome, ApiError> {
        let url = self.endpoints.products();
        debug!(%url, inventory_number = %product.inventory_number, "create product");
        let resp = self.http.post(url).json(product).send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;

        // A rejection (e.g. 409 on a duplicate key) still carries `{status, message}`.
        match serde_json::from_slice::<CreateResponse>(&body) {
            Ok(parsed) if status.is_success() => Ok(parsed.into()),
            Ok(parsed) => Ok(CreateOutcome::Failure {
                message: parsed
                    .message
                    .unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
            }),
            Err(_) if !status.is_success() => Err(ApiError::Server {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&body).into_owned(),
            }),
            Err(e) => Err(ApiError::Decode(format!("create response: {}", e))),
        }
    }

    async fn delete_product(&self, inventory_number: &str) -> Result<(), ApiError> {
        let url = self.endpoints.product(inventory_number);
        debug!(%url, "delete product");
        let resp = self.http.delete(url).send().await?;
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(inventory_number.to_string()));
        }
        if !status.is_success() {
            return Err(Self::server_error(resp).await);
        }
        Ok(())
    }

    fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}
