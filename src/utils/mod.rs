pub mod calculate;
pub mod starting_point;
pub mod validation;

pub use calculate::*;
pub use starting_point::*;
pub use validation::*;
