//! HTTP client layer — `LookupHttp` with opt-in retry policies.

pub mod client;
pub mod retry;

pub use client::LookupHttp;
pub use retry::{RetryConfig, RetryPolicy};
