use crate::types::*;
use serde::{Deserialize, Serialize};

/// Tolerance on the percentage sum of a fixed distribution
const DISTRIBUTION_TOLERANCE: f64 = 1e-6;

/// Minimum combined hook-to-COG distance for geometric sharing (metres)
const MIN_HOOK_SPREAD: f64 = 0.01;

/// How the load is shared between cranes in a multi-crane lift
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LoadShare {
    /// Explicit percentages, one per crane, summing to 100
    Fixed(Vec<f64>),

    /// Direct rigging, two cranes: hook positions in the load-local frame
    /// (metres). Each crane's share is inversely proportional to its
    /// horizontal distance from the load centre of gravity, so the closer
    /// crane carries more.
    HookPositions(Vec<na::Point3<f64>>),
}

impl Default for LoadShare {
    fn default() -> Self {
        LoadShare::Fixed(vec![60.0, 40.0])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiCraneSetup {
    pub load_share: LoadShare,

    /// Reported with every multi-crane result
    pub coordination_factor: f64,

    /// Multiply the effective load by the coordination factor. Off unless
    /// the caller asks for it.
    pub apply_coordination_factor: bool,
}

impl Default for MultiCraneSetup {
    fn default() -> Self {
        Self {
            load_share: LoadShare::default(),
            coordination_factor: 1.25,
            apply_coordination_factor: false,
        }
    }
}

impl MultiCraneSetup {
    pub fn with_load_share(mut self, load_share: LoadShare) -> Self {
        self.load_share = load_share;
        self
    }

    pub fn applying_coordination_factor(mut self) -> Self {
        self.apply_coordination_factor = true;
        self
    }

    /// Multiplier this setup puts on the effective load
    pub fn applied_coordination_factor(&self) -> f64 {
        if self.apply_coordination_factor {
            self.coordination_factor
        } else {
            1.0
        }
    }

    /// Percentage carried by each crane
    pub fn distribution(&self, load_cog: &na::Point3<f64>) -> Result<Vec<f64>, TandemLiftError> {
        if !self.coordination_factor.is_finite() || self.coordination_factor < 1.0 {
            return Err(TandemLiftError::InvalidCoordinationFactor(self.coordination_factor));
        }

        match &self.load_share {
            LoadShare::Fixed(percentages) => fixed_distribution(percentages),
            LoadShare::HookPositions(hooks) => direct_distribution(hooks, load_cog),
        }
    }
}

fn fixed_distribution(percentages: &[f64]) -> Result<Vec<f64>, TandemLiftError> {
    if percentages.len() < 2 {
        return Err(TandemLiftError::InsufficientCranes(percentages.len()));
    }

    if let Some((index, share)) = percentages
        .iter()
        .enumerate()
        .find(|(_, p)| !p.is_finite() || **p < 0.0)
    {
        return Err(TandemLiftError::InvalidShare { index, share: *share });
    }

    let total: f64 = percentages.iter().sum();
    if (total - 100.0).abs() > DISTRIBUTION_TOLERANCE {
        return Err(TandemLiftError::DistributionSum(total));
    }

    Ok(percentages.to_vec())
}

/// Moment equilibrium about the load COG for two hooks
fn direct_distribution(
    hooks: &[na::Point3<f64>],
    load_cog: &na::Point3<f64>,
) -> Result<Vec<f64>, TandemLiftError> {
    if hooks.len() < 2 {
        return Err(TandemLiftError::InsufficientCranes(hooks.len()));
    }
    if hooks.len() != 2 {
        return Err(TandemLiftError::UnsupportedConfiguration(
            "Direct rigging only supports 2-crane tandem".into(),
        ));
    }
    if hooks.iter().any(|h| !(h.x.is_finite() && h.y.is_finite() && h.z.is_finite())) {
        return Err(TandemLiftError::InvalidGeometry("Hook position is not finite".into()));
    }

    let d1 = horizontal_distance(&hooks[0], load_cog);
    let d2 = horizontal_distance(&hooks[1], load_cog);
    let total_distance = d1 + d2;

    if total_distance < MIN_HOOK_SPREAD {
        return Err(TandemLiftError::InvalidGeometry("Hooks too close together".into()));
    }

    Ok(vec![d2 / total_distance * 100.0, d1 / total_distance * 100.0])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SynchronizationRisk {
    Low,
    High,
}

impl std::fmt::Display for SynchronizationRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SynchronizationRisk::Low => f.write_str("Low"),
            SynchronizationRisk::High => f.write_str("High"),
        }
    }
}

/// Multi-crane part of a calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiCraneAnalysis {
    pub crane_count: usize,

    /// Percentage of the effective load carried by each crane
    pub load_distribution: Vec<f64>,

    /// Effective load carried by each crane
    pub crane_loads: Vec<Mass>,

    pub coordination_factor: f64,

    /// Whether the coordination factor went into the effective load
    pub coordination_factor_applied: bool,

    pub synchronization_risk: SynchronizationRisk,
}

impl MultiCraneAnalysis {
    /// Build the analysis from an already validated distribution
    pub fn new(
        setup: &MultiCraneSetup,
        load_distribution: Vec<f64>,
        effective_load: Mass,
        utilization_percentage: f64,
        sync_risk_threshold: f64,
    ) -> Self {
        let crane_loads = load_distribution
            .iter()
            .map(|share| effective_load * (share / 100.0))
            .collect();

        let synchronization_risk = if utilization_percentage > sync_risk_threshold {
            SynchronizationRisk::High
        } else {
            SynchronizationRisk::Low
        };

        Self {
            crane_count: load_distribution.len(),
            load_distribution,
            crane_loads,
            coordination_factor: setup.coordination_factor,
            coordination_factor_applied: setup.apply_coordination_factor,
            synchronization_risk,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TandemLiftError {
    #[error("Insufficient cranes for tandem lift (need at least 2, got {0})")]
    InsufficientCranes(usize),

    #[error("Unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Crane {index} share {share} is not a non-negative percentage")]
    InvalidShare { index: usize, share: f64 },

    #[error("Load shares sum to {0}%, expected 100%")]
    DistributionSum(f64),

    #[error("Coordination factor {0} must be at least 1.0")]
    InvalidCoordinationFactor(f64),
}
