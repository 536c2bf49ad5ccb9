use anyhow::Context;
use tally_config::TallyConfig;

/// Load `.env`, then the layered TOML and `TALLY_*` configuration.
pub fn load_config() -> anyhow::Result<TallyConfig> {
    TallyConfig::load_with_dotenv().context("failed to load tally configuration")
}
