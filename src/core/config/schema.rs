//! core::config::schema
//!
//! Configuration file schema.
//!
//! # Location
//!
//! Searched in order:
//! 1. `$GHINIT_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/ghinit/config.toml`
//! 3. `~/.ghinit/config.toml`
//!
//! # Validation
//!
//! Values are validated after parsing. The token is deliberately not part
//! of the schema; it only comes from `--token` or the environment.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::Mode;

/// User-level defaults.
///
/// # Example
///
/// ```toml
/// username = "alice"
/// base_path = "~/projects"
/// public = false
/// mode = "clone"
///
/// [forge]
/// api_url = "https://api.github.com"
/// host = "github.com"
///
/// [git]
/// default_branch = "main"
/// commit_message = "Initial commit"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default forge account
    pub username: Option<String>,

    /// Default base directory for new working copies
    pub base_path: Option<String>,

    /// Create public repositories unless told otherwise
    pub public: Option<bool>,

    /// Default local workspace mode
    pub mode: Option<Mode>,

    /// Forge endpoints
    pub forge: Option<ForgeConfig>,

    /// Local git defaults
    pub git: Option<GitConfig>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(username) = &self.username {
            if username.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "username cannot be empty".to_string(),
                ));
            }
        }

        if let Some(forge) = &self.forge {
            forge.validate()?;
        }

        if let Some(git) = &self.git {
            git.validate()?;
        }

        Ok(())
    }
}

/// Forge endpoint configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ForgeConfig {
    /// REST API base URL (GitHub Enterprise: `https://host/api/v3`)
    pub api_url: Option<String>,

    /// Host used in clone and remote URLs
    pub host: Option<String>,
}

impl ForgeConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.api_url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::InvalidValue(format!(
                    "api_url must be an http(s) URL, got '{}'",
                    url
                )));
            }
        }

        if let Some(host) = &self.host {
            if host.is_empty() || host.contains('/') || host.contains('@') {
                return Err(ConfigError::InvalidValue(format!(
                    "host must be a bare host name, got '{}'",
                    host
                )));
            }
        }

        Ok(())
    }
}

/// Local git defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Branch created by `git init` and pushed in push mode
    pub default_branch: Option<String>,

    /// Message of the placeholder commit in push mode
    pub commit_message: Option<String>,
}

impl GitConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(branch) = &self.default_branch {
            let bad = branch.is_empty()
                || branch.starts_with('-')
                || branch.starts_with('.')
                || branch.contains("..")
                || branch.chars().any(|c| c.is_whitespace() || c.is_ascii_control());
            if bad {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid default_branch '{}'",
                    branch
                )));
            }
        }

        if let Some(message) = &self.commit_message {
            if message.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "commit_message cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GlobalConfig::default();
        assert!(config.username.is_none());
        assert!(config.mode.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_full() {
        let config: GlobalConfig = toml::from_str(
            r#"
            username = "alice"
            base_path = "~/projects"
            public = true
            mode = "push"

            [forge]
            api_url = "https://github.example.com/api/v3"
            host = "github.example.com"

            [git]
            default_branch = "trunk"
            commit_message = "chore: bootstrap"
            "#,
        )
        .unwrap();

        assert_eq!(config.username.as_deref(), Some("alice"));
        assert_eq!(config.mode, Some(Mode::Push));
        assert_eq!(config.public, Some(true));
        assert_eq!(
            config.forge.as_ref().and_then(|f| f.host.as_deref()),
            Some("github.example.com")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn token_is_not_a_config_key() {
        let result = toml::from_str::<GlobalConfig>("token = \"ghp_x\"");
        assert!(result.is_err());
    }

    #[test]
    fn invalid_mode_rejected() {
        assert!(toml::from_str::<GlobalConfig>("mode = \"mirror\"").is_err());
    }

    #[test]
    fn invalid_api_url_rejected() {
        let config = GlobalConfig {
            forge: Some(ForgeConfig {
                api_url: Some("api.github.com".to_string()),
                host: None,
            }),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn host_with_path_rejected() {
        let config = GlobalConfig {
            forge: Some(ForgeConfig {
                api_url: None,
                host: Some("github.com/alice".to_string()),
            }),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn invalid_branch_rejected() {
        let config = GlobalConfig {
            git: Some(GitConfig {
                default_branch: Some("has space".to_string()),
                commit_message: None,
            }),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
