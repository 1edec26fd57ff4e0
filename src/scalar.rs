//! Scalar codecs: integers, booleans and strings.
//!
//! Integers use plain decimal notation. Parsing is whole-string: an optional
//! leading `-` followed by at least one ASCII digit, and nothing else.
//! Signed integers describe themselves as `int`, unsigned ones as `size`.
//!
//! ```rust
//! use option_codec::OptionValue;
//!
//! let mut width: i32 = 5;
//! assert!(width.add("3").unwrap());
//! assert_eq!(width, 8);
//! assert!(!width.add("0").unwrap());
//!
//! assert_eq!(bool::decode("yes").unwrap(), true);
//! assert!(bool::decode("on").is_err());
//! ```

use crate::{Error, OptionValue, Result};
use std::borrow::Cow;
use std::num::IntErrorKind;

fn is_numeral(input: &str) -> bool {
    let digits = input.strip_prefix('-').unwrap_or(input);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a whole-string decimal numeral into any integer type.
fn parse_integer<T: TryFrom<i128>>(input: &str, type_name: &str) -> Result<T> {
    if !is_numeral(input) {
        return Err(Error::parse(input));
    }
    let wide = input.parse::<i128>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            Error::out_of_range(input, type_name)
        }
        _ => Error::parse(input),
    })?;
    T::try_from(wide).map_err(|_| Error::out_of_range(input, type_name))
}

/// Deltas are always signed, whatever the target type.
pub(crate) fn parse_delta(delta: &str) -> Result<i64> {
    parse_integer(delta, "int")
}

macro_rules! impl_integer_option {
    ($name:literal => $($ty:ty),* $(,)?) => {
        $(
            impl OptionValue for $ty {
                fn describe() -> Cow<'static, str> {
                    Cow::Borrowed($name)
                }

                fn encode(&self) -> String {
                    self.to_string()
                }

                fn decode(input: &str) -> Result<Self> {
                    parse_integer(input, $name)
                }

                fn add(&mut self, delta: &str) -> Result<bool> {
                    let delta = parse_delta(delta)?;
                    let sum = *self as i128 + i128::from(delta);
                    *self = <$ty>::try_from(sum)
                        .map_err(|_| Error::out_of_range(&sum.to_string(), $name))?;
                    Ok(delta != 0)
                }
            }
        )*
    };
}

impl_integer_option!("int" => i8, i16, i32, i64, isize);
impl_integer_option!("size" => u8, u16, u32, u64, usize);

impl OptionValue for bool {
    fn describe() -> Cow<'static, str> {
        Cow::Borrowed("bool")
    }

    fn encode(&self) -> String {
        String::from(if *self { "true" } else { "false" })
    }

    fn decode(input: &str) -> Result<Self> {
        match input {
            "true" | "yes" => Ok(true),
            "false" | "no" => Ok(false),
            _ => Err(Error::invalid_value(
                "boolean values are either true, yes, false or no",
            )),
        }
    }
}

impl OptionValue for String {
    fn describe() -> Cow<'static, str> {
        Cow::Borrowed("str")
    }

    fn encode(&self) -> String {
        self.clone()
    }

    fn decode(input: &str) -> Result<Self> {
        Ok(input.to_string())
    }
}
