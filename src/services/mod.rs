pub mod tracking;

pub use tracking::{clock_in, clock_out};
