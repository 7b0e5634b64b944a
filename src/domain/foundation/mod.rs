//! Foundation module - Shared domain primitives.
//!
//! Value objects, error types and the state machine trait used across the
//! session, notification and request domains.

mod errors;
mod state_machine;
mod timestamp;

pub use errors::ValidationError;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
