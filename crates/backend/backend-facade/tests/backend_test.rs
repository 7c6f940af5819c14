//! Smoke tests for backend-facade re-exports

use backend_facade::prelude::*;

struct LastValue(Vec<f64>);

impl Forecaster for LastValue {
    type Dataset = Vec<f64>;
    type Model = &'static str;
    type Frequency = &'static str;
    type Forecast = Vec<f64>;
    type CrossValidation = Vec<f64>;
    type Error = OptionError;

    fn new(
        df: Vec<f64>,
        _models: Vec<&'static str>,
        _freq: &'static str,
        _fallback_model: Option<&'static str>,
    ) -> Result<Self, OptionError> {
        Ok(Self(df))
    }

    fn forecast(self, options: Options) -> Result<Vec<f64>, OptionError> {
        let h: usize = options.require("h")?;
        Ok(vec![self.0.last().copied().unwrap_or(f64::NAN); h])
    }

    fn cross_validation(self, options: Options) -> Result<Vec<f64>, OptionError> {
        let h: usize = options.require("h")?;
        Ok(self.0.iter().rev().take(h).copied().collect())
    }
}

#[test]
fn test_prelude_exposes_dispatcher() {
    let dispatcher = ForecastDispatcher::<LastValue>::new();
    let forecast = dispatcher
        .forecast(vec![1.0, 2.0], vec!["naive"], "D", None, Options::new().with("h", 3))
        .unwrap();
    assert_eq!(forecast, vec![2.0, 2.0, 2.0]);
}

#[test]
fn test_collaborator_option_error_reaches_caller() {
    let dispatcher = ForecastDispatcher::<LastValue>::new();
    let err = dispatcher
        .cross_validation(vec![1.0], vec!["naive"], "D", None, Options::new())
        .unwrap_err();
    assert_eq!(
        err,
        OptionError::Missing {
            name: "h".to_string()
        }
    );
}

#[test]
fn test_builder_from_prelude() {
    let request = RequestBuilder::forecast()
        .df(vec![4.0])
        .model("naive")
        .freq("D")
        .option("h", 1)
        .build()
        .unwrap();

    let output = ForecastDispatcher::<LastValue>::new().dispatch(request).unwrap();
    assert_eq!(output, DispatchOutput::Forecast(vec![4.0]));
}
