//! Shared building blocks for the cafe query services.
//!
//! - `config`: environment-driven service configuration
//! - `errors`: the application error type and its HTTP mapping
//! - `middleware`: request-scoped middleware (request IDs)
//! - `models`: request models shared between services

pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
