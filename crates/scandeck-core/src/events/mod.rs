//! # Application events
//!
//! Publish/subscribe distribution of state-change notifications between
//! the session controller and observers (UI layers, loggers, tests):
//! - Publishers emit typed events without knowing subscribers
//! - Subscribers filter and receive events of interest
//! - Supports both sync handlers and async broadcast receivers

mod bus;
mod types;

pub use bus::*;
pub use types::*;
