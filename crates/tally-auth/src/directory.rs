use tally_config::{DirectoryConfig, UserEntry};
use tally_core::identity::AuditorIdentity;

use crate::error::AuthError;

/// Read-only table of authorized auditors.
#[derive(Debug, Clone)]
pub struct Directory {
    users: Vec<UserEntry>,
}

impl Directory {
    #[must_use]
    pub const fn new(users: Vec<UserEntry>) -> Self {
        Self { users }
    }

    /// Directory with the single built-in `admin` / `admin` account.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![UserEntry {
            name: "Admin User".into(),
            username: "admin".into(),
            password: "admin".into(),
        }])
    }

    /// Build from configuration, falling back to [`Directory::builtin`] when
    /// no users are configured.
    #[must_use]
    pub fn from_config(config: &DirectoryConfig) -> Self {
        if config.is_configured() {
            Self::new(config.users.clone())
        } else {
            tracing::debug!("no auditors configured; using built-in admin account");
            Self::builtin()
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Check a username/password pair.
    ///
    /// The username is trimmed and compared case-insensitively; the password
    /// must match exactly.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingUsername`] for a blank username and
    /// [`AuthError::InvalidCredentials`] when no entry matches.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<AuditorIdentity, AuthError> {
        let wanted = username.trim().to_lowercase();
        if wanted.is_empty() {
            return Err(AuthError::MissingUsername);
        }

        let Some(entry) = self
            .users
            .iter()
            .find(|user| user.username.to_lowercase() == wanted && user.password == password)
        else {
            tracing::warn!(username = %username.trim(), "rejected login attempt");
            return Err(AuthError::InvalidCredentials);
        };

        tracing::info!(username = %entry.username, "auditor authenticated");
        Ok(AuditorIdentity {
            name: entry.name.clone(),
            username: entry.username.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn directory() -> Directory {
        Directory::new(vec![
            UserEntry {
                name: "Admin User".into(),
                username: "admin".into(),
                password: "admin".into(),
            },
            UserEntry {
                name: "Area Manager".into(),
                username: "Area Manager".into(),
                password: "88888888".into(),
            },
        ])
    }

    #[rstest]
    #[case("admin")]
    #[case("ADMIN")]
    #[case("  Admin ")]
    fn username_match_is_case_insensitive_and_trimmed(#[case] username: &str) {
        let identity = directory().authenticate(username, "admin").unwrap();
        assert_eq!(
            identity,
            AuditorIdentity {
                name: "Admin User".into(),
                username: "admin".into(),
            }
        );
    }

    #[test]
    fn usernames_with_spaces_work() {
        let identity = directory()
            .authenticate("area manager", "88888888")
            .unwrap();
        assert_eq!(identity.name, "Area Manager");
    }

    #[rstest]
    #[case("admin", "ADMIN")]
    #[case("admin", "admin ")]
    #[case("nobody", "admin")]
    fn wrong_credentials_are_rejected(#[case] username: &str, #[case] password: &str) {
        let err = directory().authenticate(username, password).unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn blank_username_is_rejected() {
        let err = directory().authenticate("   ", "admin").unwrap_err();
        assert!(matches!(err, AuthError::MissingUsername));
    }

    #[test]
    fn empty_config_falls_back_to_builtin() {
        let dir = Directory::from_config(&DirectoryConfig::default());
        assert_eq!(dir.len(), 1);
        assert!(dir.authenticate("admin", "admin").is_ok());
    }

    #[test]
    fn configured_users_replace_builtin() {
        let config = DirectoryConfig {
            users: vec![UserEntry {
                name: "Only".into(),
                username: "only".into(),
                password: "pw".into(),
            }],
        };
        let dir = Directory::from_config(&config);
        assert!(dir.authenticate("admin", "admin").is_err());
        assert!(dir.authenticate("only", "pw").is_ok());
    }
}
