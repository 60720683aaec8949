pub mod loads;
pub mod wind_loading;
pub mod stability;
pub mod dynamics;

pub use loads::*;
pub use wind_loading::*;
pub use stability::*;
pub use dynamics::*;
