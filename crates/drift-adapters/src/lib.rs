//! Drift adapters - Infrastructure implementations
//!
//! This crate contains concrete implementations of the ports defined in
//! drift-core. It bridges the domain logic with the remote wellbeing API.

pub mod testing;
pub mod wellbeing;

pub use testing::{FailingWellbeingGateway, StubWellbeingGateway};
pub use wellbeing::HttpWellbeingGateway;
