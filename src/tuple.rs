//! Fixed-arity tuple codec, implemented for tuples of one to six fields.
//!
//! Fields are encoded in order, escaped against `|` and joined with `|`.
//! Decoding requires exactly as many fields as the tuple declares.
//!
//! ```rust
//! use option_codec::OptionValue;
//!
//! assert_eq!((1, true).encode(), "1|true");
//! assert_eq!(<(i32, bool)>::decode("1|true").unwrap(), (1, true));
//! assert!(<(i32, bool)>::decode("1").is_err());
//! ```

use crate::escape::{escape, split};
use crate::separators::{ESCAPE, TUPLE_SEPARATOR};
use crate::{Error, OptionValue, Result};
use std::borrow::Cow;

macro_rules! impl_tuple_option {
    ($len:literal => $($name:ident : $idx:tt),+) => {
        impl<$($name: OptionValue),+> OptionValue for ($($name,)+) {
            fn describe() -> Cow<'static, str> {
                let fields: Vec<Cow<'static, str>> = vec![$($name::describe()),+];
                Cow::Owned(format!("tuple({})", fields.join("|")))
            }

            fn encode(&self) -> String {
                let fields = [$(escape(&self.$idx.encode(), TUPLE_SEPARATOR, ESCAPE)),+];
                fields.join(&TUPLE_SEPARATOR.to_string())
            }

            fn decode(input: &str) -> Result<Self> {
                let fields = split(input, TUPLE_SEPARATOR, ESCAPE);
                if fields.len() != $len {
                    return Err(Error::arity_mismatch($len, fields.len()));
                }
                Ok(($($name::decode(&fields[$idx])?,)+))
            }
        }
    };
}

impl_tuple_option!(1 => T0: 0);
impl_tuple_option!(2 => T0: 0, T1: 1);
impl_tuple_option!(3 => T0: 0, T1: 1, T2: 2);
impl_tuple_option!(4 => T0: 0, T1: 1, T2: 2, T3: 3);
impl_tuple_option!(5 => T0: 0, T1: 1, T2: 2, T3: 3, T4: 4);
impl_tuple_option!(6 => T0: 0, T1: 1, T2: 2, T3: 3, T4: 4, T5: 5);
