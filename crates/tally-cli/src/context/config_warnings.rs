use tally_config::TallyConfig;

/// Log configuration that looks intended but did not take effect.
pub fn warn_unconfigured(config: &TallyConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &TallyConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.gemini.is_configured() && has_single_underscore_key(&env_keys, "TALLY_GEMINI") {
        warnings.push(
            "Gemini config appears default while TALLY_GEMINI* env vars exist. Use double underscores (example: TALLY_GEMINI__API_KEY)."
                .to_string(),
        );
    }

    if !config.catalog.is_custom() && has_single_underscore_key(&env_keys, "TALLY_CATALOG") {
        warnings.push(
            "Catalog path appears default while TALLY_CATALOG* env vars exist. Use double underscores (example: TALLY_CATALOG__PATH)."
                .to_string(),
        );
    }

    warnings
}

/// `TALLY_GEMINI_API_KEY` instead of `TALLY_GEMINI__API_KEY`.
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    let nested = format!("{section}__");
    keys.iter()
        .any(|key| key.starts_with(section) && !key.starts_with(&nested))
}
