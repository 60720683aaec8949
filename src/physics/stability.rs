use crate::policy::LoadPolicy;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Restoring over overturning moment
///
/// A crane holding no load has nothing trying to tip it, so the ratio is
/// undefined rather than infinite. `Unloaded` keeps that case distinct from
/// an unstable configuration. A ratio too large to represent is also
/// reported as `Unloaded`; either way nothing measurable tips the crane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum StabilityRatio {
    Ratio(f64),
    Unloaded,
}

impl StabilityRatio {
    /// Ratio as a number, `f64::INFINITY` when unloaded
    pub fn value(&self) -> f64 {
        match self {
            StabilityRatio::Ratio(r) => *r,
            StabilityRatio::Unloaded => f64::INFINITY,
        }
    }

    /// Whether the ratio reaches a required minimum. Unloaded always does.
    pub fn meets(&self, minimum: f64) -> bool {
        match self {
            StabilityRatio::Ratio(r) => *r >= minimum,
            StabilityRatio::Unloaded => true,
        }
    }
}

impl PartialEq for StabilityRatio {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl PartialOrd for StabilityRatio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value().partial_cmp(&other.value())
    }
}

impl fmt::Display for StabilityRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StabilityRatio::Ratio(r) => write!(f, "{:.3}", r),
            StabilityRatio::Unloaded => write!(f, "unloaded"),
        }
    }
}

/// Stability analysis for a crane holding a load at radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityAnalysis {
    /// Load moment trying to tip the crane (t·m)
    pub load_moment: TonneMetres,

    /// Counterweight moment keeping it upright (t·m)
    pub restoring_moment: TonneMetres,

    pub stability_ratio: StabilityRatio,
}

/// Calculate stability from the effective load and the counterweight
///
/// The counterweight acts at the policy's fixed lever arm.
pub fn calculate_stability(
    effective_load: Mass,
    load_radius: Length,
    counterweight: Mass,
    policy: &LoadPolicy,
) -> StabilityAnalysis {
    let load_moment = tonnes(effective_load) * metres(load_radius);
    let restoring_moment = tonnes(counterweight) * metres(policy.counterweight_lever_arm);

    let stability_ratio = match restoring_moment / load_moment {
        ratio if load_moment > 0.0 && ratio.is_finite() => StabilityRatio::Ratio(ratio),
        _ => StabilityRatio::Unloaded,
    };

    StabilityAnalysis {
        load_moment,
        restoring_moment,
        stability_ratio,
    }
}
