pub mod project;
pub mod time_interval;

pub use project::Project;
pub use time_interval::{TimeInterval, TimeIntervalError};
