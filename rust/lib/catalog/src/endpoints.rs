//! URL construction for the inventory API.

use reqwest::Url;

use crate::error::ApiError;

/// Resolves API paths against a base URL.
///
/// Inventory numbers are appended as single, percent-encoded path
/// segments, so a key such as `INV/7` stays one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn parse(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `GET`/`POST` `{base}/api/products`.
    pub fn products(&self) -> Url {
        self.join(&["api", "products"])
    }

    /// `DELETE` `{base}/api/products/{inventory_number}`.
    pub fn product(&self, inventory_number: &str) -> Url {
        self.join(&["api", "products", inventory_number])
    }

    /// Image reference `{base}/api/qr/{inventory_number}`.
    pub fn qr(&self, inventory_number: &str) -> Url {
        self.join(&["api", "qr", inventory_number])
    }

    /// A static asset such as `/assets/logo.png`. An absolute URL is used
    /// as is.
    pub fn asset(&self, path: &str) -> Url {
        if let Ok(url) = Url::parse(path) {
            return url;
        }
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        self.join(&segments)
    }

    fn join(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        // Checked in `parse`: the base can always take path segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
