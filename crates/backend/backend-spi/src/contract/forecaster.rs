//! Forecasting collaborator contract

use crate::model::Options;

/// A forecasting engine that backends construct and drive
///
/// An instance is bound to one dataset, one ordered set of models, a
/// sampling frequency and an optional fallback model. Both operations
/// consume the instance, so every call works on a fresh one.
///
/// # Example
///
/// ```rust,ignore
/// use backend_spi::{Forecaster, Options};
///
/// fn run<F: Forecaster>(df: F::Dataset, models: Vec<F::Model>, freq: F::Frequency) -> Result<F::Forecast, F::Error> {
///     F::new(df, models, freq, None)?.forecast(Options::new().with("h", 7))
/// }
/// ```
pub trait Forecaster: Sized {
    /// Tabular time series input
    type Dataset;
    /// Model descriptor, used for both the primary models and the fallback
    type Model;
    /// Sampling cadence descriptor
    type Frequency;
    /// Output of [`Forecaster::forecast`]
    type Forecast;
    /// Output of [`Forecaster::cross_validation`]
    type CrossValidation;
    type Error;

    /// Bind the engine to its inputs
    ///
    /// Validation of the dataset and models, including an empty model list,
    /// belongs here.
    fn new(
        df: Self::Dataset,
        models: Vec<Self::Model>,
        freq: Self::Frequency,
        fallback_model: Option<Self::Model>,
    ) -> Result<Self, Self::Error>;

    /// Fit the models and predict ahead, configured by `options`
    fn forecast(self, options: Options) -> Result<Self::Forecast, Self::Error>;

    /// Evaluate the models over rolling windows, configured by `options`
    fn cross_validation(self, options: Options) -> Result<Self::CrossValidation, Self::Error>;
}
