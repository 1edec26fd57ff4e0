//! # option_codec
//!
//! Text codecs for typed configuration option values.
//!
//! ## What is it for?
//!
//! An option system stores typed values (integers, booleans, lists, maps,
//! tuples, ...) but talks to users in text: values are displayed as text,
//! `set` from text and merged with `add`/`+=` from text. This crate provides
//! that conversion for every value type, losslessly and composably.
//!
//! ## Key Features
//!
//! - **Lossless**: decoding an encoded value always gives the value back
//! - **Composable**: lists of maps of tuples work with no extra code
//! - **Escaped**: each nesting level escapes its own separator
//! - **Atomic**: a failed `set` or `add` never leaves a half-updated value
//! - **Self-describing**: every type has a grammar name for help text
//!
//! ## Quick Start
//!
//! ```rust
//! use option_codec::{add_from_str, from_str, set_from_str, to_string, type_name};
//!
//! let mut tabs: Vec<String> = from_str("a\\:b:c").unwrap();
//! assert_eq!(tabs, vec!["a:b", "c"]);
//! assert_eq!(to_string(&tabs), "a\\:b:c");
//!
//! // `add` appends to lists
//! assert!(add_from_str(&mut tabs, "d").unwrap());
//! assert_eq!(tabs.len(), 3);
//!
//! // `set` replaces, and leaves the value alone on failure
//! let mut widths = vec![1, 2];
//! assert!(set_from_str(&mut widths, "3:x").is_err());
//! assert_eq!(widths, vec![1, 2]);
//!
//! assert_eq!(type_name::<Vec<i32>>(), "int-list");
//! ```
//!
//! ## Supported Types
//!
//! | Type | Grammar name |
//! |------|--------------|
//! | `i8`..`i64`, `isize` | `int` |
//! | `u8`..`u64`, `usize` | `size` |
//! | `bool` | `bool` |
//! | `String` | `str` |
//! | [`StrongNumber<U, R>`](units::StrongNumber) | name of `R` |
//! | enums via [`impl_option_enum!`] | `enum(a\|b)` |
//! | [`FlagSet<F>`] | `flags(a\|b)` |
//! | `Vec<T>` | `<T>-list` |
//! | `HashMap<K, V>`, `IndexMap<K, V>` | `<K>-to-<V>-map` |
//! | tuples of 1 to 6 fields | `tuple(<T1>\|<T2>...)` |
//! | [`PrefixedList<P, T>`] | `<P>-prefixed-<T>-list` |
//! | [`LineAndColumn<L, C>`] | `coord` |
//!
//! See [`grammar`] for the full textual format.
//!
//! ## Logging
//!
//! The mutating entry points emit `tracing` events at `trace` level, and at
//! `debug` level when a value is rejected. The codecs themselves are silent.

pub mod coord;
pub mod dynamic;
pub mod enums;
pub mod error;
pub mod escape;
pub mod grammar;
pub mod list;
pub mod macros;
pub mod map;
pub mod prefixed;
pub mod scalar;
pub mod separators;
pub mod text;
pub mod tuple;
pub mod units;
pub mod value;

pub use coord::{BufferCoord, DisplayCoord, LineAndColumn};
pub use dynamic::DynOption;
pub use enums::{EnumDesc, FlagDesc, FlagSet};
pub use error::{Arity, Error, ErrorKind, Result};
pub use prefixed::{PrefixedList, TimestampedList};
pub use text::Text;
pub use units::StrongNumber;
pub use value::OptionValue;

use std::borrow::Cow;

/// Encode any option value to its textual form.
///
/// # Examples
///
/// ```rust
/// use option_codec::to_string;
///
/// assert_eq!(to_string(&(1, true)), "1|true");
/// ```
#[must_use]
pub fn to_string<T: OptionValue>(value: &T) -> String {
    value.encode()
}

/// Decode an option value of type `T` from its textual form.
///
/// # Examples
///
/// ```rust
/// use option_codec::from_str;
///
/// let pair: (i32, bool) = from_str("1|true").unwrap();
/// assert_eq!(pair, (1, true));
/// ```
///
/// # Errors
///
/// Returns an error if `input` is not in `T`'s grammar.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T: OptionValue>(input: &str) -> Result<T> {
    T::decode(input)
}

/// Grammar name of `T`, for help text and error messages.
#[must_use]
pub fn type_name<T: OptionValue>() -> Cow<'static, str> {
    T::describe()
}

/// Replace `target` with the value decoded from `input`.
///
/// This is what a `set` command runs. On failure `target` is unchanged.
///
/// # Errors
///
/// Returns the decoding error.
pub fn set_from_str<T: OptionValue>(target: &mut T, input: &str) -> Result<()> {
    tracing::trace!(option_type = %T::describe(), input, "setting option value");
    target.assign(input).map_err(|err| {
        tracing::debug!(option_type = %T::describe(), input, %err, "rejected option value");
        err
    })
}

/// Merge the delta in `input` into `target`.
///
/// This is what an `add` / `+=` command runs. Returns whether `target`
/// changed. On failure `target` is unchanged.
///
/// # Examples
///
/// ```rust
/// use option_codec::add_from_str;
///
/// let mut indent = 5;
/// assert!(add_from_str(&mut indent, "3").unwrap());
/// assert_eq!(indent, 8);
/// assert!(add_from_str(&mut true, "true").is_err());
/// ```
///
/// # Errors
///
/// Fails with [`Error::UnsupportedOperation`] for types without a merge, and
/// with the decoding error for a malformed delta.
pub fn add_from_str<T: OptionValue>(target: &mut T, input: &str) -> Result<bool> {
    tracing::trace!(option_type = %T::describe(), input, "adding to option value");
    match target.add(input) {
        Ok(changed) => {
            tracing::trace!(option_type = %T::describe(), changed, "option value merged");
            Ok(changed)
        }
        Err(err) => {
            tracing::debug!(option_type = %T::describe(), input, %err, "rejected option delta");
            Err(err)
        }
    }
}
