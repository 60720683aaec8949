//! Input preconditions
//!
//! Everything is checked before any derived value is computed. A request that
//! fails here produces no partial result.

use crate::calculation::{CalculationRequest, CalculationType};
use crate::equipment::{CraneSpecification, TandemLiftError};
use crate::load::{DYNAMIC_FACTOR_RANGE, LIFTING_POINTS_RANGE, LoadConfiguration};
use crate::types::*;

#[derive(Debug, thiserror::Error)]
pub enum PreconditionViolation {
    #[error("{field} is not a finite number")]
    NonFinite { field: &'static str },

    #[error("Gross capacity must be positive, got {0}")]
    NonPositiveCapacity(DisplayMass),

    #[error("Load radius must be positive, got {0}")]
    NonPositiveRadius(DisplayLength),

    #[error("Boom length must be positive when given, got {0}")]
    NonPositiveBoomLength(DisplayLength),

    #[error("Counterweight cannot be negative, got {0}")]
    NegativeCounterweight(DisplayMass),

    #[error("Wind speed cannot be negative, got {0}")]
    NegativeWindSpeed(DisplayVelocity),

    #[error("Safety factor must be at least 1.0, got {0}")]
    SafetyFactorBelowOne(f64),

    #[error("Operational limit must be in (0, 100] percent, got {0}")]
    OperationalLimitOutOfRange(f64),

    #[error("{field} cannot be negative, got {mass}")]
    NegativeLoad { field: &'static str, mass: DisplayMass },

    #[error("Load {axis} must be positive, got {length}")]
    NonPositiveDimension { axis: &'static str, length: DisplayLength },

    #[error("Lifting points must be between 1 and 8, got {0}")]
    LiftingPointsOutOfRange(u8),

    #[error("Dynamic factor must be between 1.0 and 2.0, got {0}")]
    DynamicFactorOutOfRange(f64),

    #[error("Invalid multi-crane load distribution: {0}")]
    InvalidLoadDistribution(#[from] TandemLiftError),

    #[error("Net capacity resolves to {0}; nothing can be lifted")]
    NonPositiveNetCapacity(DisplayMass),
}

fn require_finite(field: &'static str, value: f64) -> Result<(), PreconditionViolation> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PreconditionViolation::NonFinite { field })
    }
}

pub fn validate_crane(crane: &CraneSpecification) -> Result<(), PreconditionViolation> {
    let gross_t = tonnes(crane.gross_capacity);
    require_finite("gross_capacity", gross_t)?;
    if gross_t <= 0.0 {
        return Err(PreconditionViolation::NonPositiveCapacity(DisplayMass(crane.gross_capacity)));
    }

    let radius_m = metres(crane.load_radius);
    require_finite("load_radius", radius_m)?;
    if radius_m <= 0.0 {
        return Err(PreconditionViolation::NonPositiveRadius(DisplayLength(crane.load_radius)));
    }

    if let Some(boom) = crane.boom_length {
        require_finite("boom_length", metres(boom))?;
        if metres(boom) <= 0.0 {
            return Err(PreconditionViolation::NonPositiveBoomLength(DisplayLength(boom)));
        }
    }

    let counterweight_t = tonnes(crane.counterweight);
    require_finite("counterweight", counterweight_t)?;
    if counterweight_t < 0.0 {
        return Err(PreconditionViolation::NegativeCounterweight(DisplayMass(crane.counterweight)));
    }

    let wind = crane.environmental.wind_speed;
    require_finite("wind_speed", wind.get::<kilometer_per_hour>())?;
    if wind.get::<kilometer_per_hour>() < 0.0 {
        return Err(PreconditionViolation::NegativeWindSpeed(DisplayVelocity(wind)));
    }

    let policy = &crane.safety_policy;
    require_finite("safety_factor", policy.safety_factor)?;
    if policy.safety_factor < 1.0 {
        return Err(PreconditionViolation::SafetyFactorBelowOne(policy.safety_factor));
    }

    let limit = policy.operational_limit_percent;
    require_finite("operational_limit_percent", limit)?;
    if limit <= 0.0 || limit > 100.0 {
        return Err(PreconditionViolation::OperationalLimitOutOfRange(limit));
    }

    Ok(())
}

pub fn validate_load(
    load: &LoadConfiguration,
    calculation_type: &CalculationType,
) -> Result<(), PreconditionViolation> {
    for (field, mass) in [("weight", load.weight), ("rigging_weight", load.rigging_weight)] {
        require_finite(field, tonnes(mass))?;
        if tonnes(mass) < 0.0 {
            return Err(PreconditionViolation::NegativeLoad {
                field,
                mass: DisplayMass(mass),
            });
        }
    }

    for (axis, length) in load.dimensions.axes() {
        require_finite(axis, metres(length))?;
        if metres(length) <= 0.0 {
            return Err(PreconditionViolation::NonPositiveDimension {
                axis,
                length: DisplayLength(length),
            });
        }
    }

    let cog = &load.center_of_gravity;
    for value in [cog.x, cog.y, cog.z] {
        require_finite("center_of_gravity", value)?;
    }

    if !LIFTING_POINTS_RANGE.contains(&load.lifting_points) {
        return Err(PreconditionViolation::LiftingPointsOutOfRange(load.lifting_points));
    }

    if matches!(calculation_type, CalculationType::Dynamic) {
        require_finite("dynamic_factor", load.dynamic_factor)?;
        if !DYNAMIC_FACTOR_RANGE.contains(&load.dynamic_factor) {
            return Err(PreconditionViolation::DynamicFactorOutOfRange(load.dynamic_factor));
        }
    }

    Ok(())
}

/// Check a whole request; returns the multi-crane distribution when there is one
pub fn validate_request(
    request: &CalculationRequest,
) -> Result<Option<Vec<f64>>, PreconditionViolation> {
    validate_crane(&request.crane)?;
    validate_load(&request.load, &request.calculation_type)?;

    match &request.calculation_type {
        CalculationType::MultiCrane(setup) => {
            Ok(Some(setup.distribution(&request.load.center_of_gravity)?))
        }
        _ => Ok(None),
    }
}
