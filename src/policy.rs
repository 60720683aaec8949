//! Policy constants for load calculations
//!
//! Every threshold and factor the engine compares against lives here so a
//! different regulatory regime is a configuration change, not a code change.
//! Defaults reproduce the workspace's standard regime.
//!
//! A policy file is TOML with unit-tagged quantities. Missing keys keep
//! their defaults:
//!
//! ```toml
//! wind_threshold = { value = 20.0, unit = "km/h" }
//! wind_load_factor = 1.15
//! counterweight_lever_arm = { value = 2.5, unit = "m" }
//! min_stability_ratio = 1.5
//! max_utilization_percent = 85.0
//! max_wind_speed = { value = 35.0, unit = "km/h" }
//! sync_risk_utilization_percent = 70.0
//! ```

use crate::types::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadPolicy {
    /// Wind speed above which the wind load factor applies (strictly greater)
    pub wind_threshold: Velocity,

    /// Multiplier on the static load above the wind threshold
    pub wind_load_factor: f64,

    /// Lever arm of the counterweight about the tipping line
    pub counterweight_lever_arm: Length,

    /// Minimum restoring / overturning moment ratio
    pub min_stability_ratio: f64,

    /// Operational headroom ceiling, percent of net capacity
    pub max_utilization_percent: f64,

    /// Wind operating ceiling
    pub max_wind_speed: Velocity,

    /// Utilization above which a multi-crane lift is flagged high risk
    pub sync_risk_utilization_percent: f64,
}

impl Default for LoadPolicy {
    fn default() -> Self {
        Self {
            wind_threshold: Velocity::new::<kilometer_per_hour>(20.0),
            wind_load_factor: 1.15,
            counterweight_lever_arm: Length::new::<meter>(2.5),
            min_stability_ratio: 1.5,
            max_utilization_percent: 85.0,
            max_wind_speed: Velocity::new::<kilometer_per_hour>(35.0),
            sync_risk_utilization_percent: 70.0,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unit conversion error: {0}")]
    Unit(#[from] UnitError),

    #[error("Invalid policy value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl LoadPolicy {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, PolicyError> {
        let file: PolicyFile = toml::from_str(toml_str)?;
        let policy = file.into_policy()?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let policy = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.as_ref().display(), "loaded load policy");
        Ok(policy)
    }

    /// Check every value is usable as a threshold
    pub fn validate(&self) -> Result<(), PolicyError> {
        require_positive("wind_threshold", self.wind_threshold.get::<kilometer_per_hour>())?;
        require_positive("counterweight_lever_arm", self.counterweight_lever_arm.get::<meter>())?;
        require_positive("min_stability_ratio", self.min_stability_ratio)?;
        require_positive("max_utilization_percent", self.max_utilization_percent)?;
        require_positive("max_wind_speed", self.max_wind_speed.get::<kilometer_per_hour>())?;
        require_positive("sync_risk_utilization_percent", self.sync_risk_utilization_percent)?;

        if !self.wind_load_factor.is_finite() || self.wind_load_factor < 1.0 {
            return Err(PolicyError::InvalidValue {
                field: "wind_load_factor",
                reason: format!("must be at least 1.0, got {}", self.wind_load_factor),
            });
        }
        Ok(())
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), PolicyError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PolicyError::InvalidValue {
            field,
            reason: format!("must be positive and finite, got {}", value),
        })
    }
}

/// On-disk shape of a policy file
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PolicyFile {
    wind_threshold: VelocityValue,
    wind_load_factor: f64,
    counterweight_lever_arm: LengthValue,
    min_stability_ratio: f64,
    max_utilization_percent: f64,
    max_wind_speed: VelocityValue,
    sync_risk_utilization_percent: f64,
}

impl Default for PolicyFile {
    fn default() -> Self {
        let policy = LoadPolicy::default();
        Self {
            wind_threshold: VelocityValue::new(
                policy.wind_threshold.get::<kilometer_per_hour>(),
                "km/h",
            ),
            wind_load_factor: policy.wind_load_factor,
            counterweight_lever_arm: LengthValue::new(
                policy.counterweight_lever_arm.get::<meter>(),
                "m",
            ),
            min_stability_ratio: policy.min_stability_ratio,
            max_utilization_percent: policy.max_utilization_percent,
            max_wind_speed: VelocityValue::new(
                policy.max_wind_speed.get::<kilometer_per_hour>(),
                "km/h",
            ),
            sync_risk_utilization_percent: policy.sync_risk_utilization_percent,
        }
    }
}

impl PolicyFile {
    fn into_policy(self) -> Result<LoadPolicy, PolicyError> {
        Ok(LoadPolicy {
            wind_threshold: self.wind_threshold.to_velocity()?,
            wind_load_factor: self.wind_load_factor,
            counterweight_lever_arm: self.counterweight_lever_arm.to_length()?,
            min_stability_ratio: self.min_stability_ratio,
            max_utilization_percent: self.max_utilization_percent,
            max_wind_speed: self.max_wind_speed.to_velocity()?,
            sync_risk_utilization_percent: self.sync_risk_utilization_percent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    #[test]
    fn test_empty_document_gives_defaults() {
        let policy = LoadPolicy::from_toml_str("").unwrap();
        let default = LoadPolicy::default();

        assert_relative_eq!(
            policy.wind_threshold.get::<kilometer_per_hour>(),
            default.wind_threshold.get::<kilometer_per_hour>(),
            epsilon = 1e-9
        );
        assert_relative_eq!(policy.counterweight_lever_arm.get::<meter>(), 2.5, epsilon = 1e-12);
        assert_eq!(policy.min_stability_ratio, 1.5);
        assert_eq!(policy.max_utilization_percent, 85.0);
        assert_eq!(policy.sync_risk_utilization_percent, 70.0);
    }

    #[test]
    fn test_partial_override_with_units() {
        let policy = LoadPolicy::from_toml_str(
            r#"
            max_wind_speed = { value = 10.0, unit = "m/s" }
            min_stability_ratio = 1.25
            "#,
        )
        .unwrap();

        assert_relative_eq!(
            policy.max_wind_speed.get::<kilometer_per_hour>(),
            36.0,
            epsilon = 1e-9
        );
        assert_eq!(policy.min_stability_ratio, 1.25);
        assert_eq!(policy.wind_load_factor, 1.15);
    }

    #[test]
    fn test_rejects_wind_factor_below_one() {
        let err = LoadPolicy::from_toml_str("wind_load_factor = 0.9").unwrap_err();
        assert!(matches!(
            err,
            PolicyError::InvalidValue { field: "wind_load_factor", .. }
        ));
    }

    #[test]
    fn test_rejects_non_positive_threshold() {
        let err = LoadPolicy::from_toml_str("max_utilization_percent = 0.0").unwrap_err();
        assert!(matches!(
            err,
            PolicyError::InvalidValue { field: "max_utilization_percent", .. }
        ));
    }

    #[test]
    fn test_rejects_unknown_unit() {
        let err = LoadPolicy::from_toml_str(
            r#"counterweight_lever_arm = { value = 2.5, unit = "parsec" }"#,
        )
        .unwrap_err();
        assert!(matches!(err, PolicyError::Unit(_)));
    }

    #[test]
    fn test_rejects_unknown_key() {
        let err = LoadPolicy::from_toml_str("stability_minimum = 2.0").unwrap_err();
        assert!(matches!(err, PolicyError::Toml(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "wind_load_factor = 1.2").unwrap();

        let policy = LoadPolicy::from_toml_file(file.path()).unwrap();
        assert_eq!(policy.wind_load_factor, 1.2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LoadPolicy::from_toml_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, PolicyError::Io(_)));
    }
}
