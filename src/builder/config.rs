//! Store configuration.

use crate::builder::error::ConfigError;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Settings applied when a store is built.
///
/// Every field has a default, so an empty JSON object is a valid config.
///
/// # Example
///
/// ```rust
/// use refold::builder::StoreConfig;
///
/// let config = StoreConfig::from_json(r#"{"name":"counter","record_history":true}"#).unwrap();
/// assert_eq!(config.name.as_deref(), Some("counter"));
/// assert!(config.record_history);
/// assert_eq!(config.history_limit, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Label attached to the store's log events
    pub name: Option<String>,
    /// Record every successful dispatch in a [`StateHistory`](crate::core::StateHistory).
    /// Without `history_limit` the history grows for the life of the store.
    pub record_history: bool,
    /// Keep only this many of the most recent transitions
    pub history_limit: Option<usize>,
}

impl StoreConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, Vec<ConfigError>> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| vec![ConfigError::Parse(e.to_string())])?;
        config.check()?;
        Ok(config)
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = Vec::new();

        if let Some(name) = &self.name {
            checks.push(if name.trim().is_empty() {
                Validation::fail(ConfigError::BlankName)
            } else {
                Validation::success(())
            });
        }

        if let Some(limit) = self.history_limit {
            checks.push(if limit == 0 {
                Validation::fail(ConfigError::ZeroHistoryLimit)
            } else {
                Validation::success(())
            });

            checks.push(if self.record_history {
                Validation::success(())
            } else {
                Validation::fail(ConfigError::HistoryLimitWithoutRecording { limit })
            });
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`validate`](Self::validate) flattened into a plain `Result`.
    pub fn check(&self) -> Result<(), Vec<ConfigError>> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = StoreConfig::default();
        assert!(config.validate().is_success());
        assert!(!config.record_history);
        assert_eq!(config.name, None);
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = StoreConfig {
            name: Some("   ".to_string()),
            record_history: false,
            history_limit: Some(0),
        };

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors.iter().any(|e| matches!(e, ConfigError::BlankName)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::ZeroHistoryLimit)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::HistoryLimitWithoutRecording { limit: 0 })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn limit_with_recording_is_valid() {
        let config = StoreConfig {
            name: Some("todos".to_string()),
            record_history: true,
            history_limit: Some(16),
        };
        assert_eq!(config.check(), Ok(()));
    }

    #[test]
    fn check_flattens_violations() {
        let config = StoreConfig {
            history_limit: Some(8),
            ..StoreConfig::default()
        };
        assert_eq!(
            config.check(),
            Err(vec![ConfigError::HistoryLimitWithoutRecording { limit: 8 }])
        );
    }

    #[test]
    fn from_json_uses_defaults() {
        let config = StoreConfig::from_json("{}").unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn from_json_rejects_unknown_fields() {
        let result = StoreConfig::from_json(r#"{"record_histroy":true}"#);
        match result {
            Err(errors) => assert!(matches!(errors.as_slice(), [ConfigError::Parse(_)])),
            Ok(config) => panic!("Expected parse failure, got {:?}", config),
        }
    }

    #[test]
    fn from_json_validates() {
        let result = StoreConfig::from_json(r#"{"history_limit":0,"record_history":true}"#);
        assert_eq!(result, Err(vec![ConfigError::ZeroHistoryLimit]));
    }
}
