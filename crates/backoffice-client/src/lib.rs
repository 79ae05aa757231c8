// HTTP client for the backoffice API
//
// `ApiClient` wraps reqwest with the small request/response handling the
// backend needs; `endpoints` adds one typed method per REST operation.

mod client;
mod endpoints;

pub use client::{ApiClient, ClientError};
