//! Base types and error handling.
//!
//! - [`BridgeError`](error::BridgeError): failures of the checked contract
//! - [`BridgeConfig`](config::BridgeConfig): bridge configuration

pub mod config;
pub mod error;
