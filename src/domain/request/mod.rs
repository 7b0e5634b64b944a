//! Request domain module.
//!
//! The vocabulary shared by the gateway and the transports: caller options,
//! bodies, the prepared envelope and the failure classification.

mod body;
mod envelope;
mod error;

pub use body::{MultipartPart, RequestBody, UploadFile};
pub use envelope::{RequestEnvelope, RequestOptions};
pub use error::{status_fallback_message, RequestError};
