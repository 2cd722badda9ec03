//! Submission transports

mod http;

pub use http::{HttpFormTransport, DEFAULT_TIMEOUT};
