//! LinkGate redirect resolution service
//!
//! The latency-critical core of the LinkGate URL shortener: resolve an
//! incoming short slug to its destination, enforce activation/expiration
//! policy, and record a click event without blocking the redirect.
//!
//! # Architecture
//! - `services`: the request handler and the pure resolution policy gate
//! - `storage`: link store trait + SeaORM backend over the product's tables
//! - `analytics`: click event model, sink trait, fire-and-forget recorder
//! - `config`: environment/TOML configuration with fallback page URLs
//! - `server`: actix-web assembly (routes, CORS preflight contract)
//! - `system`: logging initialization
//! - `utils`: client IP extraction and user-agent classification

pub mod analytics;
pub mod config;
pub mod errors;
pub mod server;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
