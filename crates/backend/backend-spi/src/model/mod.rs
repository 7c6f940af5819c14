//! Model module containing data structures

mod option_value;
mod options;
mod request;

pub use option_value::{LosslessValue, OptionValue};
pub use options::Options;
pub use request::{DispatchOutput, DispatchRequest, Operation};
