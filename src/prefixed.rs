//! Lists paired with an opaque prefix.
//!
//! A [`PrefixedList`] is a list plus a marker that travels with it. The usual
//! marker is a counter bumped whenever the list is rewritten
//! ([`TimestampedList`]), which lets a reader tell whether the list changed
//! without comparing contents.
//!
//! The textual form is `<prefix>:<list>`. Merging with
//! [`add`](OptionValue::add) only ever touches the list.
//!
//! ```rust
//! use option_codec::{OptionValue, TimestampedList};
//!
//! let mut ranges = TimestampedList::<String>::decode("7:a:b").unwrap();
//! assert_eq!(ranges.prefix, 7);
//! assert!(ranges.add("c").unwrap());
//! assert_eq!(ranges.encode(), "7:a:b:c");
//! ```

use crate::escape::{escape, split_once};
use crate::separators::{ESCAPE, LIST_SEPARATOR};
use crate::{OptionValue, Result};
use std::borrow::Cow;

/// A list of `T` tagged with a prefix of type `P`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PrefixedList<P, T> {
    pub prefix: P,
    pub list: Vec<T>,
}

/// A list tagged with a counter.
pub type TimestampedList<T> = PrefixedList<usize, T>;

impl<P, T> PrefixedList<P, T> {
    pub fn new(prefix: P, list: Vec<T>) -> Self {
        PrefixedList { prefix, list }
    }
}

impl<P: OptionValue, T: OptionValue> PrefixedList<P, T> {
    /// Decodes the prefix and, when a separator is present, the list.
    fn decode_parts(input: &str) -> Result<(P, Option<Vec<T>>)> {
        let (prefix, rest) = split_once(input, LIST_SEPARATOR, ESCAPE);
        let prefix = P::decode(&prefix)?;
        let list = rest.map(Vec::<T>::decode).transpose()?;
        Ok((prefix, list))
    }
}

impl<P: OptionValue, T: OptionValue> OptionValue for PrefixedList<P, T> {
    fn describe() -> Cow<'static, str> {
        Cow::Owned(format!("{}-prefixed-{}-list", P::describe(), T::describe()))
    }

    fn encode(&self) -> String {
        format!(
            "{}{}{}",
            escape(&self.prefix.encode(), LIST_SEPARATOR, ESCAPE),
            LIST_SEPARATOR,
            self.list.encode()
        )
    }

    /// A missing list part decodes to the empty list.
    fn decode(input: &str) -> Result<Self> {
        let (prefix, list) = Self::decode_parts(input)?;
        Ok(PrefixedList {
            prefix,
            list: list.unwrap_or_default(),
        })
    }

    /// A missing list part keeps the current list.
    fn assign(&mut self, input: &str) -> Result<()> {
        let (prefix, list) = Self::decode_parts(input)?;
        self.prefix = prefix;
        if let Some(list) = list {
            self.list = list;
        }
        Ok(())
    }

    fn add(&mut self, delta: &str) -> Result<bool> {
        self.list.add(delta)
    }
}
