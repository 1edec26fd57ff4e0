//! Structural characters of the option text grammar.
//!
//! Each nesting level owns its own separator so that escaping at one level
//! never collides with another:
//!
//! - [`LIST_SEPARATOR`] joins list elements and map entries
//! - [`PAIR_SEPARATOR`] joins a map key to its value
//! - [`TUPLE_SEPARATOR`] joins tuple fields
//! - [`FLAG_SEPARATOR`] joins flag names
//! - [`COORD_SEPARATOR`] joins a line to a column (never escaped)
//! - [`ESCAPE`] makes the next character literal
//!
//! ## Examples
//!
//! ```rust
//! use option_codec::separators::{ESCAPE, LIST_SEPARATOR, TUPLE_SEPARATOR};
//!
//! assert_eq!(LIST_SEPARATOR, ':');
//! assert_eq!(TUPLE_SEPARATOR, '|');
//! assert_eq!(ESCAPE, '\\');
//! ```

pub const LIST_SEPARATOR: char = ':';
pub const PAIR_SEPARATOR: char = '=';
pub const TUPLE_SEPARATOR: char = '|';
pub const FLAG_SEPARATOR: char = '|';
pub const COORD_SEPARATOR: char = ',';
pub const ESCAPE: char = '\\';
