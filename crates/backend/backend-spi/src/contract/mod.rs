//! Contract traits for forecast backends
//!
//! - [`Forecaster`]: The collaborator that performs fitting and prediction
//! - [`ParallelBackend`]: The calling convention backends expose to callers

mod forecaster;
mod parallel_backend;

pub use forecaster::Forecaster;
pub use parallel_backend::ParallelBackend;
