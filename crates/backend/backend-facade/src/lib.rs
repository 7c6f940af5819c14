//! Backend Facade
//!
//! High-level API for dispatching forecast and cross-validation calls.
//! Re-exports all public types from the backend stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use backend_api::*;

// Explicit re-exports for documentation
pub use backend_api::prelude;

// Re-export core modules for direct access
pub use backend_core::dispatcher;

// Re-export SPI modules
pub use backend_spi::{contract, error, model};
