//! The codec interface every option value type implements.
//!
//! [`OptionValue`] bundles the four operations an option system needs from a
//! value type:
//!
//! | Operation | Used by |
//! |-----------|---------|
//! | [`describe`](OptionValue::describe) | help text, error messages |
//! | [`encode`](OptionValue::encode) | displaying and persisting a value |
//! | [`decode`](OptionValue::decode) / [`assign`](OptionValue::assign) | the `set` command |
//! | [`add`](OptionValue::add) | the `add` / `+=` command |
//!
//! Composite codecs are generic over their element codecs, so a
//! `Vec<(i32, HashMap<String, bool>)>` is a valid option type with no extra
//! code.
//!
//! ## Implementing for a new type
//!
//! ```rust
//! use std::borrow::Cow;
//! use option_codec::{OptionValue, Result};
//!
//! #[derive(Debug, PartialEq)]
//! struct Percent(u8);
//!
//! impl OptionValue for Percent {
//!     fn describe() -> Cow<'static, str> {
//!         Cow::Borrowed("percent")
//!     }
//!
//!     fn encode(&self) -> String {
//!         format!("{}%", self.0)
//!     }
//!
//!     fn decode(input: &str) -> Result<Self> {
//!         let digits = input.strip_suffix('%').unwrap_or(input);
//!         Ok(Percent(u8::decode(digits)?))
//!     }
//! }
//!
//! let mut p = Percent(10);
//! assert_eq!(p.encode(), "10%");
//! assert!(p.add("5").is_err()); // no merge defined
//! ```

use crate::{Error, Result};
use std::borrow::Cow;

/// Text codec for one option value type.
pub trait OptionValue: Sized {
    /// Grammar name of this type, such as `int-list` or `str-to-bool-map`.
    fn describe() -> Cow<'static, str>;

    /// Encodes the value to its textual form.
    fn encode(&self) -> String;

    /// Decodes a fresh value from its textual form.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` is not in this type's grammar.
    fn decode(input: &str) -> Result<Self>;

    /// Replaces `self` with the value decoded from `input`.
    ///
    /// On failure `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns the decoding error.
    fn assign(&mut self, input: &str) -> Result<()> {
        *self = Self::decode(input)?;
        Ok(())
    }

    /// Merges a delta expressed in this type's grammar into `self`.
    ///
    /// Returns whether the delta changed anything, so callers can skip
    /// invalidating caches on no-op merges.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnsupportedOperation`] unless the type defines a
    /// merge, and with the decoding error if `delta` is malformed.
    fn add(&mut self, delta: &str) -> Result<bool> {
        let _ = delta;
        Err(Error::unsupported_add(&Self::describe()))
    }
}
