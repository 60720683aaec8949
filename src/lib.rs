pub mod types;
pub mod equipment;
pub mod load;
pub mod physics;
pub mod capacity;
pub mod policy;
pub mod calculation;
pub mod repository;
pub mod report;

pub use types::*;
pub use calculation::{
    evaluate, evaluate_at, CalculationRequest, CalculationResult, CalculationType,
};
pub use policy::LoadPolicy;
