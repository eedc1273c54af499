pub mod driver;
pub mod recurrence;
pub mod traceback;
pub mod types;

pub use types::{Direction, Matrices};
