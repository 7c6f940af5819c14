//! Backend Consumer API
//!
//! Consumer builders for forecast backend requests.
//!
//! This crate provides:
//! - [`RequestBuilder`] for assembling a [`DispatchRequest`] step by step
//! - Re-exports from SPI and core for convenience

// Re-export from core
pub use backend_core::{dispatcher, ForecastDispatcher};

// Re-export traits and models from SPI
pub use backend_spi::{
    DispatchOutput, DispatchRequest, Forecaster, LosslessValue, Operation, OptionError,
    OptionValue, Options, ParallelBackend, RequestError, Result,
};

/// Builder for [`DispatchRequest`]
///
/// `df` and `freq` must be set before [`RequestBuilder::build`]. The model
/// list may be left empty; the collaborator decides whether that is valid.
/// An option rejected by [`RequestBuilder::try_option`] is reported by
/// `build`.
///
/// # Example
///
/// ```rust
/// use backend_api::{Operation, RequestBuilder};
///
/// let request = RequestBuilder::forecast()
///     .df(vec![1.0, 2.0, 3.0])
///     .model("ets")
///     .model("theta")
///     .freq("D")
///     .option("h", 7)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.operation, Operation::Forecast);
/// assert_eq!(request.models, vec!["ets", "theta"]);
/// ```
#[derive(Debug, Clone)]
pub struct RequestBuilder<D, M, Q> {
    operation: Operation,
    df: Option<D>,
    models: Vec<M>,
    freq: Option<Q>,
    fallback_model: Option<M>,
    options: Options,
    option_error: Option<OptionError>,
}

impl<D, M, Q> RequestBuilder<D, M, Q> {
    /// Create a builder for the given operation.
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            df: None,
            models: Vec::new(),
            freq: None,
            fallback_model: None,
            options: Options::new(),
            option_error: None,
        }
    }

    /// Create a builder for a forecast request.
    pub fn forecast() -> Self {
        Self::new(Operation::Forecast)
    }

    /// Create a builder for a cross-validation request.
    pub fn cross_validation() -> Self {
        Self::new(Operation::CrossValidation)
    }

    /// Set the dataset.
    pub fn df(mut self, df: D) -> Self {
        self.df = Some(df);
        self
    }

    /// Replace the model list.
    pub fn models(mut self, models: impl IntoIterator<Item = M>) -> Self {
        self.models = models.into_iter().collect();
        self
    }

    /// Append one model.
    pub fn model(mut self, model: M) -> Self {
        self.models.push(model);
        self
    }

    /// Set the frequency.
    pub fn freq(mut self, freq: Q) -> Self {
        self.freq = Some(freq);
        self
    }

    /// Set the fallback model.
    pub fn fallback_model(mut self, model: M) -> Self {
        self.fallback_model = Some(model);
        self
    }

    /// Set one named option.
    pub fn option(mut self, name: impl Into<String>, value: impl LosslessValue) -> Self {
        self.options.insert(name, value);
        self
    }

    /// Set one named option that may be rejected, such as a float.
    pub fn try_option(mut self, name: impl Into<String>, value: impl OptionValue) -> Self {
        if let Err(e) = self.options.try_insert(name, value) {
            self.option_error.get_or_insert(e);
        }
        self
    }

    /// Replace all options.
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Build the request.
    pub fn build(self) -> Result<DispatchRequest<D, M, Q>> {
        if let Some(e) = self.option_error {
            return Err(e.into());
        }
        Ok(DispatchRequest {
            operation: self.operation,
            df: self.df.ok_or(RequestError::MissingField("df"))?,
            models: self.models,
            freq: self.freq.ok_or(RequestError::MissingField("freq"))?,
            fallback_model: self.fallback_model,
            options: self.options,
        })
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::RequestBuilder;
    pub use backend_core::ForecastDispatcher;
    pub use backend_spi::{
        DispatchOutput, DispatchRequest, Forecaster, LosslessValue, Operation, OptionError,
        OptionValue, Options, ParallelBackend, RequestError,
    };
}
