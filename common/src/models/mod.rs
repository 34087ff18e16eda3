//! Shared data models for all services.

pub mod cafe;

// Re-export commonly used types
pub use cafe::CafeQuery;
