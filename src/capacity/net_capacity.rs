use crate::equipment::SafetyPolicy;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Usable capacity after operational deductions and the safety factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetCapacity {
    pub gross_capacity: Mass,

    /// Capacity withheld by the operational limit
    pub deductions: Mass,

    pub net_capacity: Mass,
}

impl NetCapacity {
    /// `net = (gross - gross * (1 - limit/100)) / safety_factor`
    ///
    /// Never exceeds gross for a policy with `safety_factor >= 1.0` and a
    /// limit in (0, 100].
    pub fn derive(gross_capacity: Mass, policy: &SafetyPolicy) -> Self {
        let deductions = gross_capacity * (1.0 - policy.operational_limit_percent / 100.0);
        let net_capacity = (gross_capacity - deductions) / policy.safety_factor;

        Self {
            gross_capacity,
            deductions,
            net_capacity,
        }
    }
}

/// How much of the net capacity a load consumes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Utilization {
    /// Effective load over net capacity, percent
    pub utilization_percentage: f64,

    /// Net capacity left over; negative when overloaded
    pub safety_margin: Mass,
}

impl Utilization {
    /// Net capacity must be positive; callers reject anything else first.
    pub fn derive(effective_load: Mass, net_capacity: Mass) -> Self {
        Self {
            utilization_percentage: tonnes(effective_load) / tonnes(net_capacity) * 100.0,
            safety_margin: net_capacity - effective_load,
        }
    }
}
