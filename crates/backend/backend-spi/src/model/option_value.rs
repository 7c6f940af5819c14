//! Conversions from Rust values to option values

use serde_json::Value;

/// A value that can be stored as an option, possibly failing
///
/// JSON has no NaN or infinity, so non-finite floats are rejected
/// instead of being stored as `null`.
pub trait OptionValue {
    /// Convert to a JSON value, or explain why it cannot be stored as given
    fn into_option_value(self) -> Result<Value, String>;
}

/// An [`OptionValue`] whose conversion never fails or changes the value
///
/// Floats are not lossless; set them with [`Options::try_with`] or
/// [`Options::try_insert`].
///
/// [`Options::try_with`]: crate::Options::try_with
/// [`Options::try_insert`]: crate::Options::try_insert
pub trait LosslessValue: OptionValue + Into<Value> {}

macro_rules! lossless {
    ($($t:ty),* $(,)?) => {
        $(
            impl OptionValue for $t {
                fn into_option_value(self) -> Result<Value, String> {
                    Ok(Value::from(self))
                }
            }

            impl LosslessValue for $t {}
        )*
    };
}

lossless!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, bool, String, &str, Value);

impl OptionValue for f64 {
    fn into_option_value(self) -> Result<Value, String> {
        if self.is_finite() {
            Ok(Value::from(self))
        } else {
            Err(format!("non-finite float {} has no JSON form", self))
        }
    }
}

impl OptionValue for f32 {
    fn into_option_value(self) -> Result<Value, String> {
        f64::from(self).into_option_value()
    }
}

impl<T: OptionValue> OptionValue for Vec<T> {
    fn into_option_value(self) -> Result<Value, String> {
        self.into_iter()
            .map(OptionValue::into_option_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}

impl<T: LosslessValue> LosslessValue for Vec<T> {}

impl<T: OptionValue> OptionValue for Option<T> {
    fn into_option_value(self) -> Result<Value, String> {
        match self {
            Some(value) => value.into_option_value(),
            None => Ok(Value::Null),
        }
    }
}

impl<T: LosslessValue> LosslessValue for Option<T> {}
