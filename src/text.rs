//! Serde adapter that stores option values in their textual form.
//!
//! Use the module with `#[serde(with = "option_codec::text")]` on a field, or
//! wrap a value in [`Text`]. Either way the value is written as the same
//! string the option system displays, and read back through its codec.
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Session {
//!     #[serde(with = "option_codec::text")]
//!     matching_pairs: Vec<String>,
//!     #[serde(with = "option_codec::text")]
//!     scrolloff: (i32, i32),
//! }
//!
//! let session = Session {
//!     matching_pairs: vec!["(".into(), ")".into()],
//!     scrolloff: (2, 4),
//! };
//! let json = serde_json::to_string(&session).unwrap();
//! assert_eq!(json, r#"{"matching_pairs":"(:)","scrolloff":"2|4"}"#);
//! assert_eq!(serde_json::from_str::<Session>(&json).unwrap(), session);
//! ```

use crate::OptionValue;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serializes `value` as its encoded string.
///
/// # Errors
///
/// Returns the serializer's error.
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: OptionValue,
    S: Serializer,
{
    serializer.serialize_str(&value.encode())
}

/// Deserializes a string and decodes it as `T`.
///
/// # Errors
///
/// Returns a custom deserializer error carrying the codec's message.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: OptionValue,
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    T::decode(&text).map_err(D::Error::custom)
}

/// A value that serializes as its option text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Text<T>(pub T);

impl<T: OptionValue> Serialize for Text<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize(&self.0, serializer)
    }
}

impl<'de, T: OptionValue> Deserialize<'de> for Text<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize(deserializer).map(Text)
    }
}
