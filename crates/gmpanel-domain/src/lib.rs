//! Domain types shared across the gmpanel workspace.
//!
//! This crate contains only pure types with no framework dependencies.

pub mod account;
pub mod authority;
pub mod pagination;
