//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use tally_config::{TallyConfig, UserEntry};

#[test]
fn loads_gemini_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[gemini]
api_key = "AIza-toml"
model = "gemini-2.5-flash"
endpoint = "http://localhost:8089"
timeout_secs = 12
"#,
        )?;

        let config: TallyConfig = Figment::from(Serialized::defaults(TallyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.gemini.api_key, "AIza-toml");
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.gemini.endpoint, "http://localhost:8089");
        assert_eq!(config.gemini.timeout_secs, 12);
        assert!(config.gemini.is_configured());
        Ok(())
    });
}

#[test]
fn loads_directory_users_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[[directory.users]]
name = "Admin User"
username = "admin"
password = "admin"

[[directory.users]]
name = "Area Manager"
username = "Area Manager"
password = "s3cret"
"#,
        )?;

        let config: TallyConfig = Figment::from(Serialized::defaults(TallyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.directory.users.len(), 2);
        assert_eq!(
            config.directory.users[1],
            UserEntry {
                name: "Area Manager".into(),
                username: "Area Manager".into(),
                password: "s3cret".into(),
            }
        );
        Ok(())
    });
}

#[test]
fn project_local_config_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".tally")?;
        jail.create_file(
            ".tally/config.toml",
            r#"
[general]
brand = "Test Brand"
default_branch = "borella"

[catalog]
path = "catalog.toml"
"#,
        )?;

        let config = TallyConfig::load().expect("config loads");
        assert_eq!(config.general.brand, "Test Brand");
        assert_eq!(config.general.default_branch, "borella");
        assert_eq!(config.catalog.path, "catalog.toml");
        // Unset sections keep their defaults.
        assert_eq!(config.general.fallback_auditor_name, "Authorized Auditor");
        assert_eq!(config.gemini.timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn invalid_values_fail_validation() {
    Jail::expect_with(|jail| {
        jail.create_dir(".tally")?;
        jail.create_file(
            ".tally/config.toml",
            r#"
[gemini]
timeout_secs = 0
"#,
        )?;

        let err = TallyConfig::load().expect_err("zero timeout should be rejected");
        assert!(err.to_string().contains("gemini.timeout_secs"));
        Ok(())
    });
}
