pub mod group;
pub mod item;

pub use group::{Timesheet, TimesheetDay};
pub use item::TimesheetItem;
