//! Conversions for flag and argument values
//!
//! Every helper takes the result of a context lookup directly, so a missing
//! value propagates as [`ConvertError::Lookup`]:
//!
//! ```
//! # use kubo::command::{Argument, Command};
//! # use kubo::runner::App;
//! # use std::io::Write;
//! let root = Command::new("add")
//!     .argument(Argument::new("n"))
//!     .handler(|ctx| {
//!         let n = kubo::util::int(ctx.argument("n"))?;
//!         writeln!(ctx.stdout(), "{}", n + 1)?;
//!         Ok(())
//!     });
//! # let _ = App::new(root);
//! ```

use crate::error::{ConvertError, ConvertResult, LookupError};
use crate::parser::ArgumentValue;
use std::fmt::Display;
use std::str::FromStr;

/// A looked-up value that can be read as one string
pub trait RawValue {
    fn raw(&self) -> ConvertResult<&str>;
}

impl RawValue for &str {
    fn raw(&self) -> ConvertResult<&str> {
        Ok(*self)
    }
}

impl RawValue for String {
    fn raw(&self) -> ConvertResult<&str> {
        Ok(self.as_str())
    }
}

impl RawValue for &ArgumentValue {
    fn raw(&self) -> ConvertResult<&str> {
        match self {
            ArgumentValue::Single(value) => Ok(value.as_str()),
            ArgumentValue::Multiple(values) => Err(ConvertError::NotSingle(values.len())),
        }
    }
}

fn convert<T>(raw: &str, target: &'static str) -> ConvertResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>().map_err(|e| ConvertError::Invalid {
        value: raw.to_string(),
        target,
        reason: e.to_string(),
    })
}

/// Parse any `FromStr` type
pub fn value<T, V>(value: Result<V, LookupError>) -> ConvertResult<T>
where
    T: FromStr,
    T::Err: Display,
    V: RawValue,
{
    convert(value?.raw()?, std::any::type_name::<T>())
}

pub fn int<V: RawValue>(value: Result<V, LookupError>) -> ConvertResult<i64> {
    convert(value?.raw()?, "integer")
}

pub fn uint<V: RawValue>(value: Result<V, LookupError>) -> ConvertResult<u64> {
    convert(value?.raw()?, "unsigned integer")
}

pub fn float<V: RawValue>(value: Result<V, LookupError>) -> ConvertResult<f64> {
    convert(value?.raw()?, "float")
}

/// Accepts `true` and `false` only, the values boolean flags bind
pub fn boolean<V: RawValue>(value: Result<V, LookupError>) -> ConvertResult<bool> {
    convert(value?.raw()?, "boolean")
}

/// Convert every value of an argument; a single value gives a one-element list
pub fn list<T>(value: Result<&ArgumentValue, LookupError>) -> ConvertResult<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
{
    value?
        .values()
        .iter()
        .map(|raw| convert(raw, std::any::type_name::<T>()))
        .collect()
}
