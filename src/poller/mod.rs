//! Dashboard Poller
//!
//! Periodically fetches the next simulation step and publishes the values
//! for the dashboard's readouts, chart and date display.

pub mod core;
pub mod state;
pub mod worker;

pub use self::core::{EventSender, OverlapPolicy, PauseBehavior, PollerConfig};
pub use self::state::{PollUpdate, PollerState};
pub use self::worker::{PollerCommand, StepPoller};
