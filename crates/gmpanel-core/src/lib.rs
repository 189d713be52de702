//! Shared HTTP-service plumbing: request-id middleware, tracing setup, and
//! serde helpers.

pub mod middleware;
pub mod serde;
pub mod tracing;
