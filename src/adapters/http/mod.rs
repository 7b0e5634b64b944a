//! HTTP transport adapters.
//!
//! - `ReqwestTransport` - real network calls
//! - `MockTransport` - canned replies and request recording for tests

mod mock_transport;
mod reqwest_transport;

pub use mock_transport::{MockReply, MockTransport};
pub use reqwest_transport::ReqwestTransport;
