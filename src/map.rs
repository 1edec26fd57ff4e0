//! Map codec for `HashMap<K, V>` and [`IndexMap<K, V>`].
//!
//! Each entry is written as `key=value`, with `=` escaped inside the key and
//! the value. The entry as a whole is then escaped against `:` and entries are
//! joined with `:`, so keys and values may hold any character.
//!
//! `HashMap` output order is unspecified; only the set of pairs round-trips.
//! `IndexMap` encodes in insertion order, which gives stable output.
//!
//! Decoding replaces the whole map. When a key appears more than once, the
//! last occurrence wins.
//!
//! ## Examples
//!
//! ```rust
//! use indexmap::IndexMap;
//! use option_codec::OptionValue;
//!
//! let mut map = IndexMap::new();
//! map.insert("x".to_string(), 1);
//! map.insert("a=b".to_string(), 2);
//! assert_eq!(map.encode(), "x=1:a\\\\=b=2");
//!
//! let back = IndexMap::<String, i32>::decode("x=1:a\\\\=b=2").unwrap();
//! assert_eq!(back, map);
//! ```

use crate::escape::{escape, split};
use crate::separators::{ESCAPE, LIST_SEPARATOR, PAIR_SEPARATOR};
use crate::{Error, OptionValue, Result};
use indexmap::IndexMap;
use std::borrow::Cow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

fn encode_entry<K: OptionValue, V: OptionValue>(key: &K, value: &V) -> String {
    let entry = format!(
        "{}{}{}",
        escape(&key.encode(), PAIR_SEPARATOR, ESCAPE),
        PAIR_SEPARATOR,
        escape(&value.encode(), PAIR_SEPARATOR, ESCAPE)
    );
    escape(&entry, LIST_SEPARATOR, ESCAPE)
}

/// Splits a `key=value` entry that has already been unescaped once.
fn decode_entry<K: OptionValue, V: OptionValue>(entry: &str) -> Result<(K, V)> {
    match split(entry, PAIR_SEPARATOR, ESCAPE).as_slice() {
        [key, value] => Ok((K::decode(key)?, V::decode(value)?)),
        _ => Err(Error::malformed_pair(entry)),
    }
}

fn map_name<K: OptionValue, V: OptionValue>() -> Cow<'static, str> {
    Cow::Owned(format!("{}-to-{}-map", K::describe(), V::describe()))
}

macro_rules! impl_map_option {
    ($($map:ident),*) => {
        $(
            impl<K, V, S> OptionValue for $map<K, V, S>
            where
                K: OptionValue + Eq + Hash,
                V: OptionValue,
                S: BuildHasher + Default,
            {
                fn describe() -> Cow<'static, str> {
                    map_name::<K, V>()
                }

                fn encode(&self) -> String {
                    self.iter()
                        .map(|(key, value)| encode_entry(key, value))
                        .collect::<Vec<_>>()
                        .join(&LIST_SEPARATOR.to_string())
                }

                /// The empty string is the empty map.
                fn decode(input: &str) -> Result<Self> {
                    let mut map = Self::default();
                    if input.is_empty() {
                        return Ok(map);
                    }
                    for entry in split(input, LIST_SEPARATOR, ESCAPE) {
                        let (key, value) = decode_entry::<K, V>(&entry)?;
                        map.insert(key, value);
                    }
                    Ok(map)
                }
            }
        )*
    };
}

impl_map_option!(HashMap, IndexMap);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn pairs(items: &[(&str, &str)]) -> HashMap<String, String> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_encode_contains_every_pair() {
        let map = pairs(&[("x", "1"), ("y", "2")]);
        let encoded = map.encode();
        assert!(encoded == "x=1:y=2" || encoded == "y=2:x=1", "{encoded}");
    }

    #[test]
    fn test_decode_any_order() {
        let expected = pairs(&[("x", "1"), ("y", "2")]);
        assert_eq!(HashMap::<String, String>::decode("x=1:y=2").unwrap(), expected);
        assert_eq!(HashMap::<String, String>::decode("y=2:x=1").unwrap(), expected);
    }

    #[test]
    fn test_structural_chars_in_keys_and_values() {
        let map = pairs(&[("a:b", "c=d"), ("e\\", "|"), ("", "")]);
        let encoded = map.encode();
        assert_eq!(HashMap::<String, String>::decode(&encoded).unwrap(), map);
    }

    #[test]
    fn test_malformed_pair() {
        let err = HashMap::<String, i32>::decode("x=1:y").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedPair);
        assert!(err.to_string().contains("map option expects key=value"));

        let err = HashMap::<String, String>::decode("a=b=c").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedPair);
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let map = IndexMap::<String, i32>::decode("k=1:j=0:k=2").unwrap();
        assert_eq!(map.get("k"), Some(&2));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_assign_clears_and_is_atomic() {
        let mut map = pairs(&[("old", "1")]);
        map.assign("new=2").unwrap();
        assert_eq!(map, pairs(&[("new", "2")]));

        assert!(map.assign("a=1:broken").is_err());
        assert_eq!(map, pairs(&[("new", "2")]));
    }

    #[test]
    fn test_empty_map() {
        assert_eq!(HashMap::<String, i32>::new().encode(), "");
        assert!(HashMap::<String, i32>::decode("").unwrap().is_empty());
    }

    #[test]
    fn test_add_unsupported() {
        let mut map = pairs(&[]);
        assert_eq!(
            map.add("a=b").unwrap_err().kind(),
            ErrorKind::UnsupportedOperation
        );
    }

    #[test]
    fn test_map_of_lists() {
        let mut map: IndexMap<String, Vec<i32>> = IndexMap::new();
        map.insert("odd".to_string(), vec![1, 3]);
        map.insert("none".to_string(), vec![]);
        let encoded = map.encode();
        assert_eq!(encoded, "odd=1\\:3:none=");
        assert_eq!(IndexMap::<String, Vec<i32>>::decode(&encoded).unwrap(), map);
    }

    #[test]
    fn test_describe() {
        assert_eq!(HashMap::<String, bool>::describe(), "str-to-bool-map");
        assert_eq!(IndexMap::<i32, Vec<i32>>::describe(), "int-to-int-list-map");
    }
}
