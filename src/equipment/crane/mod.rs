use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CraneType {
    Mobile,
    Overhead,
    Gantry,
    Jib,
    Monorail,
}

impl CraneType {
    /// Whether this kind of crane normally carries a boom
    pub fn has_boom(&self) -> bool {
        matches!(self, CraneType::Mobile | CraneType::Jib)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroundConditions {
    Firm,
    Compacted,
    Soft,
    Paved,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Good,
    Moderate,
    Poor,
}

/// Site conditions at the time of the lift.
///
/// Only `wind_speed` feeds the numeric core; the rest is carried for reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalConditions {
    pub wind_speed: Velocity,
    pub temperature: ThermodynamicTemperature,
    pub ground_conditions: GroundConditions,
    pub visibility: Visibility,
}

impl EnvironmentalConditions {
    pub fn calm() -> Self {
        Self {
            wind_speed: Velocity::new::<kilometer_per_hour>(0.0),
            temperature: ThermodynamicTemperature::new::<degree_celsius>(20.0),
            ground_conditions: GroundConditions::Firm,
            visibility: Visibility::Good,
        }
    }

    pub fn with_wind_speed(mut self, wind_speed: Velocity) -> Self {
        self.wind_speed = wind_speed;
        self
    }
}

/// Safety policy applied to the gross rated capacity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyPolicy {
    /// Divisor applied after operational deductions (>= 1.0)
    pub safety_factor: f64,

    /// Share of gross capacity usable before deductions, in (0, 100]
    pub operational_limit_percent: f64,
}

impl Default for SafetyPolicy {
    fn default() -> Self {
        Self {
            safety_factor: 1.25,
            operational_limit_percent: 85.0,
        }
    }
}

/// Lifting equipment for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CraneSpecification {
    pub crane_type: CraneType,

    /// Gross rated capacity
    pub gross_capacity: Mass,

    /// Operating radius at which the load is held
    pub load_radius: Length,

    /// Boom length, for geometry diagrams only. Overhead and monorail
    /// equipment has none.
    pub boom_length: Option<Length>,

    pub counterweight: Mass,

    pub environmental: EnvironmentalConditions,

    pub safety_policy: SafetyPolicy,
}

impl CraneSpecification {
    pub fn new(crane_type: CraneType, gross_capacity: Mass, load_radius: Length) -> Self {
        Self {
            crane_type,
            gross_capacity,
            load_radius,
            boom_length: None,
            counterweight: Mass::new::<kilogram>(0.0),
            environmental: EnvironmentalConditions::calm(),
            safety_policy: SafetyPolicy::default(),
        }
    }

    pub fn with_boom_length(mut self, boom_length: Length) -> Self {
        self.boom_length = Some(boom_length);
        self
    }

    pub fn with_counterweight(mut self, counterweight: Mass) -> Self {
        self.counterweight = counterweight;
        self
    }

    pub fn with_environment(mut self, environmental: EnvironmentalConditions) -> Self {
        self.environmental = environmental;
        self
    }

    pub fn with_safety_policy(mut self, safety_policy: SafetyPolicy) -> Self {
        self.safety_policy = safety_policy;
        self
    }
}
