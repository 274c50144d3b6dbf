//! Dashboard session orchestration.
//!
//! The session owns all mutable dashboard state (status, diagnosis,
//! live logs, monitored sites) and mutates it exclusively through
//! typed [`SessionEvent`]s, one atomic transition per event. User
//! actions enter through the [`ActionDispatcher`]; push-channel
//! messages enter through [`route_push_events`]. Both paths serialize
//! on the same session lock, so interleaving is deterministic.

mod aggregate;
mod controller;
mod dispatcher;
mod event;
mod session;

pub use aggregate::aggregate;
pub use controller::StatusController;
pub use dispatcher::{
    ActionDispatcher, ActionError, ActionId, CheckOutcome, HealOutcome, DEFAULT_FAULT_URL,
};
pub use event::SessionEvent;
pub use session::{route_push_events, Session, SharedSession};
