//! Background Tasks Module
//!
//! Contains background tasks used by the demo host.
//!
//! # Tasks
//! - Clock: Publishes the current time at a configured interval

mod clock;

pub use clock::{spawn_clock_task, TIME_FORMAT};
