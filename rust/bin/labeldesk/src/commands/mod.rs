pub mod catalog;
pub mod import;
pub mod label;
pub mod shell;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use labeldesk::Desk;
use labeldesk_catalog::HttpCatalog;

use crate::config::DeskConfig;
use crate::host::TerminalHost;

/// Settings shared by every command.
pub struct Session {
    pub config: DeskConfig,
}

impl Session {
    pub fn catalog(&self) -> anyhow::Result<Arc<HttpCatalog>> {
        let catalog = HttpCatalog::with_timeout(&self.config.server, self.config.timeout())
            .with_context(|| format!("connecting to {}", self.config.server))?;
        Ok(Arc::new(catalog))
    }

    /// Build a desk and run the initial load. Fails if the catalog could
    /// not be fetched.
    pub async fn open(&self, assume_yes: bool, output: Option<PathBuf>) -> anyhow::Result<Desk> {
        let host = Arc::new(TerminalHost::new(assume_yes, output));
        let desk = Desk::new(self.catalog()?, host, self.config.label.clone())?;
        desk.initialize().await;
        if let Some(error) = desk.view().error {
            anyhow::bail!("Could not load products from {}: {}", self.config.server, error);
        }
        Ok(desk)
    }
}
