//! List codec for `Vec<T>`.
//!
//! Elements are encoded through `T`'s codec, escaped against `:` and joined
//! with `:`. Decoding replaces the whole list; [`add`](OptionValue::add)
//! appends instead.
//!
//! ```rust
//! use option_codec::OptionValue;
//!
//! let list = vec!["a:b".to_string(), "c".to_string()];
//! assert_eq!(list.encode(), "a\\:b:c");
//! assert_eq!(Vec::<String>::decode("a\\:b:c").unwrap(), list);
//! ```

use crate::escape::{escape, split};
use crate::separators::{ESCAPE, LIST_SEPARATOR};
use crate::{OptionValue, Result};
use std::borrow::Cow;

impl<T: OptionValue> OptionValue for Vec<T> {
    fn describe() -> Cow<'static, str> {
        Cow::Owned(format!("{}-list", T::describe()))
    }

    fn encode(&self) -> String {
        self.iter()
            .map(|elem| escape(&elem.encode(), LIST_SEPARATOR, ESCAPE))
            .collect::<Vec<_>>()
            .join(&LIST_SEPARATOR.to_string())
    }

    /// The empty string is the empty list. A list holding one element that
    /// encodes to `""` (such as `[""]` or `[[]]`) therefore encodes to `""`
    /// too and decodes back as `[]`; for the same reason `add("")` appends
    /// nothing.
    fn decode(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Ok(Vec::new());
        }
        split(input, LIST_SEPARATOR, ESCAPE)
            .iter()
            .map(|elem| T::decode(elem))
            .collect()
    }

    fn add(&mut self, delta: &str) -> Result<bool> {
        let extra = Self::decode(delta)?;
        let changed = !extra.is_empty();
        self.extend(extra);
        Ok(changed)
    }
}
