pub mod models;
pub mod repositories;
pub mod services;
pub mod test_utils;
pub mod timesheet;
pub mod utils;

pub use models::*;
pub use timesheet::*;
pub use utils::*;
