//! Dispatch request and output models

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{RequestError, Result};
use crate::model::Options;

/// The collaborator operation a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Forecast,
    CrossValidation,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Forecast => "forecast",
            Operation::CrossValidation => "cross_validation",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "forecast" => Ok(Operation::Forecast),
            "cross_validation" => Ok(Operation::CrossValidation),
            other => Err(RequestError::UnknownOperation(other.to_string())),
        }
    }
}

/// A single backend call captured as a value
///
/// `D`, `M` and `Q` are the collaborator's dataset, model and frequency types.
/// Missing `fallback_model` and `options` decode as `None` and empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchRequest<D, M, Q> {
    pub operation: Operation,
    pub df: D,
    pub models: Vec<M>,
    pub freq: Q,
    pub fallback_model: Option<M>,
    #[serde(default)]
    pub options: Options,
}

impl<D, M, Q> DispatchRequest<D, M, Q> {
    pub fn new(operation: Operation, df: D, models: Vec<M>, freq: Q) -> Self {
        Self {
            operation,
            df,
            models,
            freq,
            fallback_model: None,
            options: Options::new(),
        }
    }
}

impl<D, M, Q> DispatchRequest<D, M, Q>
where
    D: DeserializeOwned,
    M: DeserializeOwned,
    Q: DeserializeOwned,
{
    /// Decode a request from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<D, M, Q> DispatchRequest<D, M, Q>
where
    D: Serialize,
    M: Serialize,
    Q: Serialize,
{
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Result of a dispatched request, tagged by operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchOutput<F, C> {
    Forecast(F),
    CrossValidation(C),
}

impl<F, C> DispatchOutput<F, C> {
    pub fn operation(&self) -> Operation {
        match self {
            DispatchOutput::Forecast(_) => Operation::Forecast,
            DispatchOutput::CrossValidation(_) => Operation::CrossValidation,
        }
    }

    pub fn into_forecast(self) -> Option<F> {
        match self {
            DispatchOutput::Forecast(result) => Some(result),
            DispatchOutput::CrossValidation(_) => None,
        }
    }

    pub fn into_cross_validation(self) -> Option<C> {
        match self {
            DispatchOutput::Forecast(_) => None,
            DispatchOutput::CrossValidation(result) => Some(result),
        }
    }
}
