//! Backend Core
//!
//! In-process implementation of the backend calling convention.
//!
//! ## Example
//!
//! ```rust,ignore
//! use backend_core::prelude::*;
//!
//! let dispatcher = ForecastDispatcher::<StatsEngine>::new();
//! let forecast = dispatcher.forecast(df, models, "D", None, Options::new().with("h", 7))?;
//! let cv = dispatcher.cross_validation(df, models, "D", None, Options::new().with("n_windows", 3))?;
//! ```

pub mod dispatcher;

// Re-export SPI traits for implementations
pub use backend_spi::{
    DispatchOutput, DispatchRequest, Forecaster, Operation, OptionError, Options,
    ParallelBackend, RequestError, Result,
};

// Re-export main types
pub use dispatcher::ForecastDispatcher;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dispatcher::ForecastDispatcher;
    pub use backend_spi::{
        DispatchOutput, DispatchRequest, Forecaster, Operation, Options, ParallelBackend,
    };
}
