//! Platform abstraction layer
//!
//! The simulation consumes these seams and never implements them for a real
//! window:
//! - Time (frame delta, close request)
//! - Input (edge-triggered jump)
//! - The session loop that ties them to a render sink

pub mod input;
pub mod session;
pub mod time;

pub use input::{Autopilot, JumpInput, ScriptedInput};
pub use session::{SessionReport, run_session};
pub use time::{Clock, FixedClock};
