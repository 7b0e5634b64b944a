//! Domain layer containing client-side types and rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (timestamp, errors, state machine)
//! - `session` - Authenticated-user record and persistence scopes
//! - `notification` - Toast notifications and their display lifecycle
//! - `request` - Request options, bodies, envelopes and failures
//! - `validation` - Advisory form-field validators

pub mod foundation;
pub mod notification;
pub mod request;
pub mod session;
pub mod validation;
