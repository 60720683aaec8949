pub mod net_capacity;
pub mod compliance;

pub use net_capacity::*;
pub use compliance::*;
