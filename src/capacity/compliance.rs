//! Compliance checklist for a derived lift
//!
//! Four independent checks and their aggregate:
//! - Capacity: effective load within net capacity
//! - Stability: stability ratio at or above the policy minimum
//! - Utilization: operational headroom kept
//! - Wind: wind speed within the operating ceiling
//!
//! Every check is always evaluated; a failure never hides the others.

use crate::physics::StabilityRatio;
use crate::policy::LoadPolicy;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceCheck {
    Capacity,
    Stability,
    Utilization,
    Wind,
}

impl ComplianceCheck {
    pub const ALL: [ComplianceCheck; 4] = [
        ComplianceCheck::Capacity,
        ComplianceCheck::Stability,
        ComplianceCheck::Utilization,
        ComplianceCheck::Wind,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ComplianceCheck::Capacity => "capacityCheck",
            ComplianceCheck::Stability => "stabilityCheck",
            ComplianceCheck::Utilization => "utilizationCheck",
            ComplianceCheck::Wind => "windCheck",
        }
    }
}

impl fmt::Display for ComplianceCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Values the checklist is evaluated against
#[derive(Debug, Clone, Copy)]
pub struct ComplianceInputs {
    pub effective_load: Mass,
    pub net_capacity: Mass,
    pub stability_ratio: StabilityRatio,
    pub utilization_percentage: f64,
    pub wind_speed: Velocity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceChecks {
    pub capacity_check: bool,
    pub stability_check: bool,
    pub utilization_check: bool,
    pub wind_check: bool,
    pub overall_status: bool,
}

impl ComplianceChecks {
    /// Assemble from the four individual outcomes
    pub fn from_checks(
        capacity_check: bool,
        stability_check: bool,
        utilization_check: bool,
        wind_check: bool,
    ) -> Self {
        Self {
            capacity_check,
            stability_check,
            utilization_check,
            wind_check,
            overall_status: capacity_check && stability_check && utilization_check && wind_check,
        }
    }

    pub fn evaluate(inputs: &ComplianceInputs, policy: &LoadPolicy) -> Self {
        let capacity_check = inputs.effective_load <= inputs.net_capacity;
        let stability_check = inputs.stability_ratio.meets(policy.min_stability_ratio);
        let utilization_check = inputs.utilization_percentage <= policy.max_utilization_percent;
        let wind_check = inputs.wind_speed <= policy.max_wind_speed;

        Self::from_checks(capacity_check, stability_check, utilization_check, wind_check)
    }

    pub fn passed(&self, check: ComplianceCheck) -> bool {
        match check {
            ComplianceCheck::Capacity => self.capacity_check,
            ComplianceCheck::Stability => self.stability_check,
            ComplianceCheck::Utilization => self.utilization_check,
            ComplianceCheck::Wind => self.wind_check,
        }
    }

    /// Failing checks, in checklist order
    pub fn failed(&self) -> Vec<ComplianceCheck> {
        ComplianceCheck::ALL
            .into_iter()
            .filter(|check| !self.passed(*check))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> ComplianceInputs {
        ComplianceInputs {
            effective_load: Mass::new::<metric_ton>(10.0),
            net_capacity: Mass::new::<metric_ton>(34.0),
            stability_ratio: StabilityRatio::Ratio(2.0),
            utilization_percentage: 29.4,
            wind_speed: Velocity::new::<kilometer_per_hour>(15.0),
        }
    }

    #[test]
    fn test_overall_truth_table() {
        for bits in 0u8..16 {
            let capacity = bits & 0b0001 != 0;
            let stability = bits & 0b0010 != 0;
            let utilization = bits & 0b0100 != 0;
            let wind = bits & 0b1000 != 0;

            let checks = ComplianceChecks::from_checks(capacity, stability, utilization, wind);
            assert_eq!(checks.overall_status, bits == 0b1111, "combination {:04b}", bits);
            assert_eq!(checks.failed().len(), 4 - bits.count_ones() as usize);
        }
    }

    #[test]
    fn test_all_pass() {
        let checks = ComplianceChecks::evaluate(&inputs(), &LoadPolicy::default());
        assert!(checks.overall_status);
        assert!(checks.failed().is_empty());
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let policy = LoadPolicy::default();
        let edge = ComplianceInputs {
            effective_load: Mass::new::<metric_ton>(34.0),
            net_capacity: Mass::new::<metric_ton>(34.0),
            stability_ratio: StabilityRatio::Ratio(1.5),
            utilization_percentage: 85.0,
            wind_speed: Velocity::new::<kilometer_per_hour>(35.0),
        };

        let checks = ComplianceChecks::evaluate(&edge, &policy);
        assert!(checks.capacity_check);
        assert!(checks.stability_check);
        assert!(checks.utilization_check);
        assert!(checks.wind_check);
    }

    #[test]
    fn test_failures_do_not_short_circuit() {
        let policy = LoadPolicy::default();
        let bad = ComplianceInputs {
            effective_load: Mass::new::<metric_ton>(40.0),
            net_capacity: Mass::new::<metric_ton>(34.0),
            stability_ratio: StabilityRatio::Ratio(0.4),
            utilization_percentage: 117.6,
            wind_speed: Velocity::new::<kilometer_per_hour>(15.0),
        };

        let checks = ComplianceChecks::evaluate(&bad, &policy);
        assert_eq!(
            checks.failed(),
            vec![
                ComplianceCheck::Capacity,
                ComplianceCheck::Stability,
                ComplianceCheck::Utilization,
            ]
        );
        assert!(checks.wind_check);
        assert!(!checks.overall_status);
    }

    #[test]
    fn test_unloaded_passes_stability() {
        let checks = ComplianceChecks::evaluate(
            &ComplianceInputs {
                stability_ratio: StabilityRatio::Unloaded,
                ..inputs()
            },
            &LoadPolicy::default(),
        );
        assert!(checks.stability_check);
    }

    #[test]
    fn test_check_names() {
        let names: Vec<String> = ComplianceCheck::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            names,
            vec!["capacityCheck", "stabilityCheck", "utilizationCheck", "windCheck"]
        );
    }
}
