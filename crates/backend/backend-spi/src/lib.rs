//! Backend Service Provider Interface
//!
//! Defines the contracts, value types and errors shared by forecast backends.
//!
//! - [`Forecaster`]: The collaborator that fits models and produces results
//! - [`ParallelBackend`]: The calling convention execution frameworks implement
//! - [`Options`]: Open-ended named parameters forwarded to the collaborator
//! - [`DispatchRequest`] / [`DispatchOutput`]: A call and its result as values

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Forecaster, ParallelBackend};
pub use error::{OptionError, RequestError, Result};
pub use model::{DispatchOutput, DispatchRequest, LosslessValue, Operation, OptionValue, Options};
