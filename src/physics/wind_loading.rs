use crate::policy::LoadPolicy;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Wind contribution on top of the static load
///
/// A step function: above the policy threshold the static load is scaled by
/// the wind load factor, at or below it there is no wind load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindLoading {
    pub wind_speed: Velocity,
    pub wind_factor: f64,
    pub wind_load: Mass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindCondition {
    /// At or below the loading threshold
    Calm,
    /// Above the loading threshold, within the operating ceiling
    Loaded,
    /// Above the operating ceiling
    ExceedsLimit,
}

/// Wind factor for a wind speed; the threshold itself does not trigger it
pub fn wind_factor(wind_speed: Velocity, policy: &LoadPolicy) -> f64 {
    if wind_speed > policy.wind_threshold {
        policy.wind_load_factor
    } else {
        1.0
    }
}

impl WindLoading {
    pub fn new(wind_speed: Velocity, total_static_load: Mass, policy: &LoadPolicy) -> Self {
        let wind_factor = wind_factor(wind_speed, policy);
        Self {
            wind_speed,
            wind_factor,
            wind_load: total_static_load * (wind_factor - 1.0),
        }
    }

    /// Classify the wind speed against the policy
    pub fn condition(&self, policy: &LoadPolicy) -> WindCondition {
        if self.wind_speed > policy.max_wind_speed {
            WindCondition::ExceedsLimit
        } else if self.wind_speed > policy.wind_threshold {
            WindCondition::Loaded
        } else {
            WindCondition::Calm
        }
    }
}
