//! Configuration loading functionality.
//!
//! Reads a [`SchedulerConfig`] from a single YAML file. Missing knobs fall
//! back to the defaults declared in [`super::types`], so a partial file is
//! valid.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::SchedulerConfig;

impl SchedulerConfig {
    /// Loads the scheduling policy from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the policy file (e.g., "./config/scheduler.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed configuration, or an error if the file is missing
    /// or contains invalid YAML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use lpa_engine::config::SchedulerConfig;
    ///
    /// let config = SchedulerConfig::load("./config/scheduler.yaml")?;
    /// # Ok::<(), lpa_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/scheduler.yaml"
    }

    #[test]
    fn test_load_shipped_policy_file() {
        let result = SchedulerConfig::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
    }

    #[test]
    fn test_shipped_policy_matches_defaults() {
        let loaded = SchedulerConfig::load(config_path()).unwrap();
        let default = SchedulerConfig::default();
        assert_eq!(loaded.lpa_target, default.lpa_target);
        assert_eq!(loaded.pairing_lock_months, default.pairing_lock_months);
        assert_eq!(loaded.weights.same_role, default.weights.same_role);
        assert_eq!(loaded.weights.same_shift, default.weights.same_shift);
        assert_eq!(loaded.weights.recent_pairing, default.weights.recent_pairing);
        assert_eq!(loaded.weights.repeat_section, default.weights.repeat_section);
        assert_eq!(loaded.seed, default.seed);
    }

    #[test]
    fn test_load_missing_file_returns_config_not_found() {
        let result = SchedulerConfig::load("/nonexistent/scheduler.yaml");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("scheduler.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }
}
