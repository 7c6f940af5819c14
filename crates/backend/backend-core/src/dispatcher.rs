//! In-process forecast dispatcher

use std::fmt;
use std::marker::PhantomData;

use backend_spi::{Forecaster, Options, ParallelBackend};
use tracing::trace_span;

/// Runs each call on a freshly constructed `F` in the calling thread
///
/// The dispatcher holds no state, so one value can serve any number of
/// concurrent callers. Arguments reach the collaborator untouched and its
/// results and errors come back untouched.
///
/// Each call enters a `trace`-level span named after the operation, with
/// the model count, fallback presence and option count as fields. The span
/// records no events, so it only appears in output when a subscriber enables
/// `trace` level together with span lifecycle events (for example
/// `FmtSpan::CLOSE` in `tracing-subscriber`).
///
/// # Example
///
/// ```rust,ignore
/// use backend_core::ForecastDispatcher;
/// use backend_spi::{Options, ParallelBackend};
///
/// let dispatcher = ForecastDispatcher::<StatsEngine>::new();
/// let forecast = dispatcher.forecast(df, vec![ets, naive], "D", None, Options::new().with("h", 7))?;
/// ```
pub struct ForecastDispatcher<F> {
    _forecaster: PhantomData<fn() -> F>,
}

impl<F> ForecastDispatcher<F> {
    pub const fn new() -> Self {
        Self {
            _forecaster: PhantomData,
        }
    }
}

impl<F> Default for ForecastDispatcher<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Clone for ForecastDispatcher<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for ForecastDispatcher<F> {}

impl<F> fmt::Debug for ForecastDispatcher<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastDispatcher")
            .field("forecaster", &std::any::type_name::<F>())
            .finish()
    }
}

impl<F: Forecaster> ParallelBackend<F> for ForecastDispatcher<F> {
    fn forecast(
        &self,
        df: F::Dataset,
        models: Vec<F::Model>,
        freq: F::Frequency,
        fallback_model: Option<F::Model>,
        options: Options,
    ) -> Result<F::Forecast, F::Error> {
        let _span = trace_span!(
            "forecast",
            models = models.len(),
            fallback = fallback_model.is_some(),
            options = options.len()
        )
        .entered();

        let model = F::new(df, models, freq, fallback_model)?;
        model.forecast(options)
    }

    fn cross_validation(
        &self,
        df: F::Dataset,
        models: Vec<F::Model>,
        freq: F::Frequency,
        fallback_model: Option<F::Model>,
        options: Options,
    ) -> Result<F::CrossValidation, F::Error> {
        let _span = trace_span!(
            "cross_validation",
            models = models.len(),
            fallback = fallback_model.is_some(),
            options = options.len()
        )
        .entered();

        let model = F::new(df, models, freq, fallback_model)?;
        model.cross_validation(options)
    }
}
