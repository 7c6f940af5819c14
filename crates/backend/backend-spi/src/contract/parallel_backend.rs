//! Backend calling convention

use crate::contract::Forecaster;
use crate::model::{DispatchOutput, DispatchRequest, Operation, Options};

/// Uniform entry point for running a [`Forecaster`]
///
/// Execution frameworks implement this trait to run forecasts wherever they
/// schedule work. Implementations must hand every argument to the
/// collaborator unchanged and return its result and errors as they are.
pub trait ParallelBackend<F: Forecaster> {
    fn forecast(
        &self,
        df: F::Dataset,
        models: Vec<F::Model>,
        freq: F::Frequency,
        fallback_model: Option<F::Model>,
        options: Options,
    ) -> Result<F::Forecast, F::Error>;

    fn cross_validation(
        &self,
        df: F::Dataset,
        models: Vec<F::Model>,
        freq: F::Frequency,
        fallback_model: Option<F::Model>,
        options: Options,
    ) -> Result<F::CrossValidation, F::Error>;

    /// Route a captured request to the operation it names
    fn dispatch(
        &self,
        request: DispatchRequest<F::Dataset, F::Model, F::Frequency>,
    ) -> Result<DispatchOutput<F::Forecast, F::CrossValidation>, F::Error> {
        let DispatchRequest {
            operation,
            df,
            models,
            freq,
            fallback_model,
            options,
        } = request;

        match operation {
            Operation::Forecast => self
                .forecast(df, models, freq, fallback_model, options)
                .map(DispatchOutput::Forecast),
            Operation::CrossValidation => self
                .cross_validation(df, models, freq, fallback_model, options)
                .map(DispatchOutput::CrossValidation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    // ==========================================================================
    // Mock Implementations for Testing Trait Definitions
    // ==========================================================================

    struct MockForecaster {
        df: Vec<f64>,
    }

    impl Forecaster for MockForecaster {
        type Dataset = Vec<f64>;
        type Model = &'static str;
        type Frequency = &'static str;
        type Forecast = f64;
        type CrossValidation = usize;
        type Error = String;

        fn new(
            df: Self::Dataset,
            _models: Vec<Self::Model>,
            _freq: Self::Frequency,
            _fallback_model: Option<Self::Model>,
        ) -> Result<Self, Self::Error> {
            Ok(Self { df })
        }

        fn forecast(self, _options: Options) -> Result<Self::Forecast, Self::Error> {
            self.df.last().copied().ok_or_else(|| "empty".to_string())
        }

        fn cross_validation(self, _options: Options) -> Result<Self::CrossValidation, Self::Error> {
            Ok(self.df.len())
        }
    }

    /// Records which operation was routed to it
    #[derive(Default)]
    struct RecordingBackend {
        calls: RefCell<Vec<Operation>>,
    }

    impl ParallelBackend<MockForecaster> for RecordingBackend {
        fn forecast(
            &self,
            df: Vec<f64>,
            models: Vec<&'static str>,
            freq: &'static str,
            fallback_model: Option<&'static str>,
            options: Options,
        ) -> Result<f64, String> {
            self.calls.borrow_mut().push(Operation::Forecast);
            MockForecaster::new(df, models, freq, fallback_model)?.forecast(options)
        }

        fn cross_validation(
            &self,
            df: Vec<f64>,
            models: Vec<&'static str>,
            freq: &'static str,
            fallback_model: Option<&'static str>,
            options: Options,
        ) -> Result<usize, String> {
            self.calls.borrow_mut().push(Operation::CrossValidation);
            MockForecaster::new(df, models, freq, fallback_model)?.cross_validation(options)
        }
    }

    #[test]
    fn test_dispatch_routes_forecast() {
        let backend = RecordingBackend::default();
        let request = DispatchRequest::new(Operation::Forecast, vec![1.0, 2.0], vec!["naive"], "D");

        let output = backend.dispatch(request).unwrap();

        assert_eq!(output, DispatchOutput::Forecast(2.0));
        assert_eq!(*backend.calls.borrow(), vec![Operation::Forecast]);
    }

    #[test]
    fn test_dispatch_routes_cross_validation() {
        let backend = RecordingBackend::default();
        let request =
            DispatchRequest::new(Operation::CrossValidation, vec![1.0, 2.0, 3.0], vec!["naive"], "D");

        let output = backend.dispatch(request).unwrap();

        assert_eq!(output, DispatchOutput::CrossValidation(3));
        assert_eq!(*backend.calls.borrow(), vec![Operation::CrossValidation]);
    }

    #[test]
    fn test_dispatch_propagates_error() {
        let backend = RecordingBackend::default();
        let request = DispatchRequest::new(Operation::Forecast, vec![], vec!["naive"], "D");

        assert_eq!(backend.dispatch(request), Err("empty".to_string()));
    }
}
