//! HTTP client for the Notespace REST API.
//!
//! Wraps every outbound call in a uniform envelope: successful responses are
//! unwrapped to their `data` payload before the caller sees them, and
//! failures are classified into the [`error::ApiError`] taxonomy. Transport
//! is abstracted behind [`transport::Transport`] so the whole surface can be
//! exercised against a scripted in-memory implementation.

pub mod api;
pub mod client;
pub mod envelope;
pub mod error;
pub mod observer;
pub mod transport;
pub mod wire;

pub use client::{ApiClient, ClientConfig};
pub use error::{ApiError, Result};
pub use observer::{ClientObserver, NullObserver, TransportAlert};
pub use transport::{ApiRequest, HttpTransport, RawResponse, RequestBody, Transport};
