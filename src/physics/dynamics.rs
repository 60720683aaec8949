//! Dynamic amplification presets
//!
//! Most lifts are treated as static. Dynamic calculations amplify the total
//! load to cover:
//! - Sudden stops (shock loading)
//! - Acceleration/deceleration of the hoist
//! - Snatch when slack rigging takes up

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiftType {
    /// Smooth, controlled lift
    Smooth,
    /// Normal operational lift
    Normal,
    /// Sudden loading or shock
    Shock,
}

impl LiftType {
    /// Dynamic amplification factor (DAF) for this kind of lift
    ///
    /// Typical values: 1.15 for smooth lifts, 1.33 for shock loading
    pub fn dynamic_amplification_factor(&self) -> f64 {
        match self {
            LiftType::Smooth => 1.15,
            LiftType::Normal => 1.25,
            LiftType::Shock => 1.33,
        }
    }
}
