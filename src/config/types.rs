//! Scheduling policy types.
//!
//! Strongly-typed knobs for the scheduler, deserialized from YAML. Defaults
//! reproduce the reference policy: two LPAs per auditor, a four-month pairing
//! lock, and the 10/5/100/15 scoring weights.

use serde::Deserialize;

/// Default number of LPA assignments each active auditor receives per run.
pub const DEFAULT_LPA_TARGET: u32 = 2;

/// Default width of the pairing lock window, in whole months.
pub const DEFAULT_PAIRING_LOCK_MONTHS: u32 = 4;

/// Additive scoring weights for candidate pairs. Lower totals are preferred.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreWeights {
    /// Added when both auditors share the same role; encourages cross-role
    /// pairing.
    #[serde(default = "default_same_role")]
    pub same_role: u32,
    /// Added when both auditors work the same shift; mild preference for
    /// mixed-shift exposure.
    #[serde(default = "default_same_shift")]
    pub same_shift: u32,
    /// Added when the pair appears in history inside the lock window; large
    /// enough to dominate every other weight.
    #[serde(default = "default_recent_pairing")]
    pub recent_pairing: u32,
    /// Added once per member who has already audited the candidate section
    /// this run.
    #[serde(default = "default_repeat_section")]
    pub repeat_section: u32,
}

fn default_same_role() -> u32 {
    10
}

fn default_same_shift() -> u32 {
    5
}

fn default_recent_pairing() -> u32 {
    100
}

fn default_repeat_section() -> u32 {
    15
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            same_role: default_same_role(),
            same_shift: default_same_shift(),
            recent_pairing: default_recent_pairing(),
            repeat_section: default_repeat_section(),
        }
    }
}

/// Scheduling policy for one engine instance.
///
/// Build one with [`Default`], the `with_*` builders, or
/// [`SchedulerConfig::load`].
///
/// # Example
///
/// ```
/// use lpa_engine::config::SchedulerConfig;
///
/// let config = SchedulerConfig::default().with_seed(42);
/// assert_eq!(config.lpa_target, 2);
/// assert_eq!(config.pairing_lock_months, 4);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerConfig {
    /// Number of LPA assignments targeted per active auditor per run.
    #[serde(default = "default_lpa_target")]
    pub lpa_target: u32,
    /// Whole months during which re-pairing the same two auditors is
    /// penalized.
    #[serde(default = "default_pairing_lock_months")]
    pub pairing_lock_months: u32,
    /// Scoring weights for candidate pairs.
    #[serde(default)]
    pub weights: ScoreWeights,
    /// Seed for slot-order shuffling. `Some` gives a reproducible order;
    /// `None` draws OS entropy each run.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_lpa_target() -> u32 {
    DEFAULT_LPA_TARGET
}

fn default_pairing_lock_months() -> u32 {
    DEFAULT_PAIRING_LOCK_MONTHS
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig {
            lpa_target: DEFAULT_LPA_TARGET,
            pairing_lock_months: DEFAULT_PAIRING_LOCK_MONTHS,
            weights: ScoreWeights::default(),
            seed: None,
        }
    }
}

impl SchedulerConfig {
    /// Sets the per-auditor LPA target.
    pub fn with_lpa_target(mut self, target: u32) -> Self {
        self.lpa_target = target;
        self
    }

    /// Sets the pairing lock window in whole months.
    pub fn with_pairing_lock_months(mut self, months: u32) -> Self {
        self.pairing_lock_months = months;
        self
    }

    /// Replaces the scoring weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Pins the slot-order shuffle to a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reproduces_reference_policy() {
        let config = SchedulerConfig::default();
        assert_eq!(config.lpa_target, 2);
        assert_eq!(config.pairing_lock_months, 4);
        assert_eq!(config.weights.same_role, 10);
        assert_eq!(config.weights.same_shift, 5);
        assert_eq!(config.weights.recent_pairing, 100);
        assert_eq!(config.weights.repeat_section, 15);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_recent_pairing_weight_dominates_others() {
        let weights = ScoreWeights::default();
        assert!(weights.recent_pairing > weights.same_role + weights.same_shift);
        assert!(weights.recent_pairing > 2 * weights.repeat_section + weights.same_role);
    }

    #[test]
    fn test_builders_override_fields() {
        let config = SchedulerConfig::default()
            .with_lpa_target(3)
            .with_pairing_lock_months(6)
            .with_seed(7);
        assert_eq!(config.lpa_target, 3);
        assert_eq!(config.pairing_lock_months, 6);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_with_weights_replaces_all_weights() {
        let config = SchedulerConfig::default().with_weights(ScoreWeights {
            same_role: 1,
            same_shift: 2,
            recent_pairing: 30,
            repeat_section: 4,
        });
        assert_eq!(config.weights.same_role, 1);
        assert_eq!(config.weights.recent_pairing, 30);
    }

    #[test]
    fn test_empty_yaml_yields_defaults() {
        let config: SchedulerConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.lpa_target, 2);
        assert_eq!(config.weights.recent_pairing, 100);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_yaml_fills_missing_fields() {
        let yaml = "lpa_target: 3\nweights:\n  same_shift: 9\n";
        let config: SchedulerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.lpa_target, 3);
        assert_eq!(config.pairing_lock_months, 4);
        assert_eq!(config.weights.same_shift, 9);
        assert_eq!(config.weights.same_role, 10);
    }

    #[test]
    fn test_seed_parses_from_yaml() {
        let config: SchedulerConfig = serde_yaml::from_str("seed: 1234\n").unwrap();
        assert_eq!(config.seed, Some(1234));
    }
}
