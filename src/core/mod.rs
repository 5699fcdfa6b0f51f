//! Core state machine types shared by the explorer views.
//!
//! - Phase definitions via the `State` trait
//! - Guard predicates for transition control
//! - Bounded phase history
//!
//! Everything here is pure; timers and callbacks live in the views and the
//! `timer` module.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
