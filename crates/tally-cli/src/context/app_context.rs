use std::sync::Arc;

use anyhow::Context;
use tally_auth::Directory;
use tally_config::TallyConfig;
use tally_core::Catalog;
use tally_session::AuditFlow;
use tally_suggest::GeminiClient;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: TallyConfig,
    pub catalog: Arc<Catalog>,
    pub directory: Directory,
}

impl AppContext {
    /// Resolve the catalog and auditor directory from configuration.
    pub fn init(config: TallyConfig) -> anyhow::Result<Self> {
        let catalog = config
            .catalog
            .load()
            .with_context(|| format!("failed to load catalog '{}'", config.catalog.path))?;
        tracing::debug!(
            items = catalog.len(),
            custom = config.catalog.is_custom(),
            "catalog ready"
        );

        let directory = Directory::from_config(&config.directory);

        Ok(Self {
            config,
            catalog: Arc::new(catalog),
            directory,
        })
    }

    /// A fresh session flow over the loaded catalog.
    #[must_use]
    pub fn flow(&self) -> AuditFlow {
        AuditFlow::new(Arc::clone(&self.catalog))
            .with_fallback_auditor(self.config.general.fallback_auditor_name.clone())
    }

    /// Suggestion client for the configured model and brand.
    pub fn suggester(&self) -> anyhow::Result<GeminiClient> {
        GeminiClient::new(&self.config.gemini, &self.config.general.brand)
            .context("failed to build suggestion client")
    }
}
