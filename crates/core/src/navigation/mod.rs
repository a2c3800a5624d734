//! Dual-axis navigation state machine.
//!
//! The user's position is a [`NavigationState`]: a temporal position, a
//! category position, and a chart mode. States change only through the
//! transitions in `service`, which are pure and never let one axis
//! disturb the other.
//!
//! # Modules
//!
//! - `types` - Category positions, chart mode, and the state itself
//! - `error` - Navigation error types
//! - `service` - Transition functions
//! - `command` - Serializable/parsable transition requests
//! - `navigator` - Session object holding the current state

pub mod command;
pub mod error;
pub mod navigator;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use command::NavigationCommand;
pub use error::{InvalidTransition, NavigationError};
pub use navigator::{Navigator, TransitionOutcome};
pub use types::{CategoryLevel, CategoryPosition, ChartMode, NavigationState};
