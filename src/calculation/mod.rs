//! Load calculation engine
//!
//! One evaluation runs a fixed pipeline over a `CalculationRequest`:
//! - Load derivation (static, effective and wind load)
//! - Capacity derivation (deductions, net capacity, utilization)
//! - Stability derivation (load and restoring moments)
//! - Compliance checklist
//! - Multi-crane distribution, for multi-crane requests only
//!
//! Evaluation is pure. The same request and policy always give the same
//! derived values; only the timestamp of `evaluate` changes between calls.

pub mod validation;
pub mod history;
pub mod workspace;

pub use validation::PreconditionViolation;
pub use history::{CalculationHistory, HistoryRepository, HISTORY_CAPACITY};
pub use workspace::{LoadCalculationWorkspace, WorkspaceError};

use crate::capacity::{ComplianceChecks, ComplianceInputs, NetCapacity, Utilization};
use crate::equipment::{CraneSpecification, MultiCraneAnalysis, MultiCraneSetup};
use crate::load::LoadConfiguration;
use crate::physics::{calculate_stability, derive_loads, StabilityRatio, WindLoading};
use crate::policy::LoadPolicy;
use crate::types::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CalculationType {
    Static,
    Dynamic,
    MultiCrane(MultiCraneSetup),
}

impl CalculationType {
    pub fn label(&self) -> &'static str {
        match self {
            CalculationType::Static => "static",
            CalculationType::Dynamic => "dynamic",
            CalculationType::MultiCrane(_) => "multi-crane",
        }
    }
}

impl fmt::Display for CalculationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything one evaluation needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub crane: CraneSpecification,
    pub load: LoadConfiguration,
    pub calculation_type: CalculationType,
}

impl CalculationRequest {
    pub fn new(
        crane: CraneSpecification,
        load: LoadConfiguration,
        calculation_type: CalculationType,
    ) -> Self {
        Self {
            crane,
            load,
            calculation_type,
        }
    }
}

/// Outcome of one evaluation. Never modified after it is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub total_static_load: Mass,
    pub effective_load: Mass,
    pub wind_factor: f64,
    pub wind_load: Mass,

    pub deductions: Mass,
    pub net_capacity: Mass,
    pub utilization_percentage: f64,
    pub safety_margin: Mass,

    /// t·m
    pub load_moment: TonneMetres,
    /// t·m
    pub restoring_moment: TonneMetres,
    pub stability_ratio: StabilityRatio,

    pub compliance: ComplianceChecks,

    /// Present only for multi-crane calculations
    pub multi_crane: Option<MultiCraneAnalysis>,

    pub calculation_type: CalculationType,
    pub timestamp: DateTime<Utc>,

    /// Input snapshot for audit
    pub inputs: CalculationRequest,

    /// Policy the result was evaluated under
    pub policy: LoadPolicy,
}

impl CalculationResult {
    /// Whether every compliance check passed
    pub fn is_compliant(&self) -> bool {
        self.compliance.overall_status
    }

    /// Derived values equal, ignoring timestamp, inputs and policy
    pub fn same_derivation(&self, other: &Self) -> bool {
        self.total_static_load == other.total_static_load
            && self.effective_load == other.effective_load
            && self.wind_factor == other.wind_factor
            && self.wind_load == other.wind_load
            && self.deductions == other.deductions
            && self.net_capacity == other.net_capacity
            && self.utilization_percentage == other.utilization_percentage
            && self.safety_margin == other.safety_margin
            && self.load_moment == other.load_moment
            && self.restoring_moment == other.restoring_moment
            && self.stability_ratio == other.stability_ratio
            && self.compliance == other.compliance
            && self.multi_crane == other.multi_crane
    }
}

/// Evaluate a request, stamped with the current time
pub fn evaluate(
    request: &CalculationRequest,
    policy: &LoadPolicy,
) -> Result<CalculationResult, PreconditionViolation> {
    evaluate_at(request, policy, Utc::now())
}

/// Evaluate a request with an explicit timestamp
pub fn evaluate_at(
    request: &CalculationRequest,
    policy: &LoadPolicy,
    timestamp: DateTime<Utc>,
) -> Result<CalculationResult, PreconditionViolation> {
    let distribution = validation::validate_request(request).inspect_err(|err| {
        tracing::warn!(
            calculation_type = %request.calculation_type,
            error = %err,
            "rejected load calculation"
        );
    })?;

    let crane = &request.crane;
    let loads = derive_loads(&request.load, &request.calculation_type);
    let wind = WindLoading::new(crane.environmental.wind_speed, loads.total_static_load, policy);

    let capacity = NetCapacity::derive(crane.gross_capacity, &crane.safety_policy);
    if tonnes(capacity.net_capacity) <= 0.0 {
        let err =
            PreconditionViolation::NonPositiveNetCapacity(DisplayMass(capacity.net_capacity));
        tracing::warn!(error = %err, "rejected load calculation");
        return Err(err);
    }

    let utilization = Utilization::derive(loads.effective_load, capacity.net_capacity);
    let stability = calculate_stability(
        loads.effective_load,
        crane.load_radius,
        crane.counterweight,
        policy,
    );

    let compliance = ComplianceChecks::evaluate(
        &ComplianceInputs {
            effective_load: loads.effective_load,
            net_capacity: capacity.net_capacity,
            stability_ratio: stability.stability_ratio,
            utilization_percentage: utilization.utilization_percentage,
            wind_speed: crane.environmental.wind_speed,
        },
        policy,
    );

    let multi_crane = match (&request.calculation_type, distribution) {
        (CalculationType::MultiCrane(setup), Some(distribution)) => Some(MultiCraneAnalysis::new(
            setup,
            distribution,
            loads.effective_load,
            utilization.utilization_percentage,
            policy.sync_risk_utilization_percent,
        )),
        _ => None,
    };

    tracing::debug!(
        calculation_type = %request.calculation_type,
        effective_load_t = tonnes(loads.effective_load),
        net_capacity_t = tonnes(capacity.net_capacity),
        utilization = utilization.utilization_percentage,
        stability_ratio = %stability.stability_ratio,
        compliant = compliance.overall_status,
        "evaluated load calculation"
    );
    if !compliance.overall_status {
        let failed: Vec<&str> = compliance.failed().iter().map(|c| c.name()).collect();
        tracing::warn!(failed = ?failed, "lift fails compliance");
    }

    Ok(CalculationResult {
        total_static_load: loads.total_static_load,
        effective_load: loads.effective_load,
        wind_factor: wind.wind_factor,
        wind_load: wind.wind_load,
        deductions: capacity.deductions,
        net_capacity: capacity.net_capacity,
        utilization_percentage: utilization.utilization_percentage,
        safety_margin: utilization.safety_margin,
        load_moment: stability.load_moment,
        restoring_moment: stability.restoring_moment,
        stability_ratio: stability.stability_ratio,
        compliance,
        multi_crane,
        calculation_type: request.calculation_type.clone(),
        timestamp,
        inputs: request.clone(),
        policy: policy.clone(),
    })
}
