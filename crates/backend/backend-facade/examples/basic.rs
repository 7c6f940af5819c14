//! Basic example dispatching forecast and cross-validation calls
//!
//! Run with: RUST_LOG=trace cargo run --example basic -p backend-facade

use backend_facade::prelude::*;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Seasonal naive engine: repeats the value observed one season earlier
struct SeasonalNaive {
    df: Vec<f64>,
    season: usize,
}

impl Forecaster for SeasonalNaive {
    type Dataset = Vec<f64>;
    type Model = String;
    type Frequency = usize;
    type Forecast = Vec<f64>;
    type CrossValidation = Vec<(f64, f64)>;
    type Error = Box<dyn std::error::Error + Send + Sync>;

    fn new(
        df: Vec<f64>,
        models: Vec<String>,
        freq: usize,
        _fallback_model: Option<String>,
    ) -> Result<Self, Self::Error> {
        if models.iter().any(|m| m != "seasonal_naive") {
            return Err(format!("unsupported models: {:?}", models).into());
        }
        if freq == 0 || df.len() < freq {
            return Err(format!("need at least one full season of {} points", freq).into());
        }
        Ok(Self { df, season: freq })
    }

    fn forecast(self, options: Options) -> Result<Vec<f64>, Self::Error> {
        let h: usize = options.require("h")?;
        let last_season = &self.df[self.df.len() - self.season..];
        Ok((0..h).map(|i| last_season[i % self.season]).collect())
    }

    /// Pairs of (actual, predicted) over the trailing `test_size` points
    fn cross_validation(self, options: Options) -> Result<Vec<(f64, f64)>, Self::Error> {
        let test_size: usize = options.get_or("test_size", self.season)?;
        let start = self.df.len().saturating_sub(test_size).max(self.season);
        Ok((start..self.df.len())
            .map(|t| (self.df[t], self.df[t - self.season]))
            .collect())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(FmtSpan::CLOSE)
        .init();

    println!("=== backend-facade Basic Examples ===\n");

    let data = vec![
        10.0, 20.0, 30.0, 40.0,
        12.0, 22.0, 31.0, 43.0,
        13.0, 21.0, 33.0, 44.0,
    ];
    let models = vec!["seasonal_naive".to_string()];
    let dispatcher = ForecastDispatcher::<SeasonalNaive>::new();

    // 1. Direct forecast call
    println!("1. Forecast");
    let forecast = dispatcher.forecast(
        data.clone(),
        models.clone(),
        4,
        None,
        Options::new().with("h", 6),
    )?;
    println!("   h=6: {:?}\n", forecast);

    // 2. Direct cross-validation call
    println!("2. Cross-validation");
    let cv = dispatcher.cross_validation(
        data.clone(),
        models.clone(),
        4,
        None,
        Options::new().with("test_size", 4),
    )?;
    for (actual, predicted) in &cv {
        println!("   actual={:>5.1} predicted={:>5.1}", actual, predicted);
    }
    println!();

    // 3. Request decoded from JSON, as an execution framework would send it
    println!("3. JSON request");
    let request = DispatchRequest::from_json(
        r#"{"operation":"forecast","df":[1.0,2.0,3.0,4.0],"models":["seasonal_naive"],"freq":2,"options":{"h":3}}"#,
    )?;
    match dispatcher.dispatch(request)? {
        DispatchOutput::Forecast(values) => println!("   forecast: {:?}\n", values),
        DispatchOutput::CrossValidation(pairs) => println!("   cv: {:?}\n", pairs),
    }

    // 4. Collaborator errors come back untouched
    println!("4. Error propagation");
    let err = dispatcher
        .forecast(data, vec!["arima".to_string()], 4, None, Options::new())
        .unwrap_err();
    println!("   {}", err);

    Ok(())
}
