//! Session domain module.
//!
//! The authenticated-user record the client keeps between page loads and the
//! two scopes it can be persisted in.

mod aggregate;
mod scope;
mod user;

pub use aggregate::Session;
pub use scope::PersistenceScope;
pub use user::{UserRecord, UserRole};
