pub mod crane;
pub mod tandem;

pub use crane::*;
pub use tandem::*;
