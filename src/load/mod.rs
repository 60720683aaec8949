//! The object being lifted
//!
//! # Coordinate system
//!
//! The centre of gravity is given in a load-local, right-handed frame:
//! - **X-axis**: lateral
//! - **Y-axis**: Down(-) / Up(+)
//! - **Z-axis**: longitudinal
//!
//! All `Point3` coordinates are stored in **METRES**.

use crate::physics::dynamics::LiftType;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Number of lifting points a rigging plan may use
pub const LIFTING_POINTS_RANGE: std::ops::RangeInclusive<u8> = 1..=8;

/// Range accepted for the dynamic amplification factor
pub const DYNAMIC_FACTOR_RANGE: std::ops::RangeInclusive<f64> = 1.0..=2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadDimensions {
    pub length: Length,
    pub width: Length,
    pub height: Length,
}

impl LoadDimensions {
    pub fn new(length: Length, width: Length, height: Length) -> Self {
        Self { length, width, height }
    }

    /// Named axes, in declaration order
    pub fn axes(&self) -> [(&'static str, Length); 3] {
        [("length", self.length), ("width", self.width), ("height", self.height)]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadConfiguration {
    /// Net load, excluding rigging
    pub weight: Mass,

    pub rigging_weight: Mass,

    pub dimensions: LoadDimensions,

    /// Offset from the load-local origin, metres
    pub center_of_gravity: na::Point3<f64>,

    pub lifting_points: u8,

    /// Only applied when the calculation type is dynamic
    pub dynamic_factor: f64,
}

impl LoadConfiguration {
    pub fn new(weight: Mass, rigging_weight: Mass, dimensions: LoadDimensions) -> Self {
        Self {
            weight,
            rigging_weight,
            dimensions,
            center_of_gravity: na::Point3::origin(),
            lifting_points: 4,
            dynamic_factor: 1.0,
        }
    }

    pub fn with_center_of_gravity(mut self, cog: na::Point3<f64>) -> Self {
        self.center_of_gravity = cog;
        self
    }

    pub fn with_lifting_points(mut self, points: u8) -> Self {
        self.lifting_points = points;
        self
    }

    pub fn with_dynamic_factor(mut self, factor: f64) -> Self {
        self.dynamic_factor = factor;
        self
    }

    /// Use the standard amplification factor for a kind of lift
    pub fn with_lift_type(self, lift_type: LiftType) -> Self {
        self.with_dynamic_factor(lift_type.dynamic_amplification_factor())
    }
}
