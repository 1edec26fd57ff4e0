//! Option text grammar
//!
//! This module documents the textual form every option value type uses, as
//! implemented by this library.
//!
//! # Overview
//!
//! Option values are displayed, persisted and edited as plain text. Each type
//! has exactly one textual form, and decoding that form gives back the value
//! it came from. Composite types build on their element types and escape the
//! structural characters of their own level, so values nest to any depth.
//!
//! # Scalars
//!
//! | Type | Grammar | Name | Example |
//! |------|---------|------|---------|
//! | Signed integer | `[-]digit+` | `int` | `-42` |
//! | Unsigned integer | `[-]digit+`, non-negative value | `size` | `8` |
//! | Boolean | `true`, `yes`, `false` or `no` | `bool` | `yes` |
//! | String | any text | `str` | `hello world` |
//! | Enum | one declared name | `enum(a\|b)` | `a` |
//! | Flags | declared names joined by `\|` | `flags(a\|b)` | `a\|b` |
//! | Coordinate | `<int>,<int>` | `coord` | `3,14` |
//!
//! Integers are matched against the whole input: `12abc`, ` 12` and `+12` are
//! all rejected. Booleans always encode as `true` or `false`.
//!
//! # Composites
//!
//! | Construct | Grammar | Separator | Escaped |
//! |-----------|---------|-----------|---------|
//! | List | `e0:e1:...` | `:` | `:` and `\` in each element |
//! | Map | `k0=v0:k1=v1:...` | `:` between entries, `=` inside | `=` and `\` in keys and values, then `:` and `\` in each entry |
//! | Tuple | `f0\|f1\|...` | `\|` | `\|` and `\` in each field |
//! | Prefixed list | `<prefix>:<list>` | first unescaped `:` | `:` and `\` in the prefix |
//!
//! The escape character `\` makes the following character literal. A lone
//! trailing `\` is kept as is.
//!
//! **Examples**:
//! ```text
//! a\:b:c             list ["a:b", "c"]
//! x=1:y=2            map {x: 1, y: 2}
//! 1|true             tuple (1, true)
//! 7:a:b              timestamped list, prefix 7, list ["a", "b"]
//! 1\:2::3            list of lists [[1, 2], [], [3]]
//! ```
//!
//! # Grammar names
//!
//! Names compose the same way values do:
//!
//! ```text
//! int-list                    Vec<i32>
//! str-to-bool-map             HashMap<String, bool>
//! tuple(int|bool)             (i32, bool)
//! size-prefixed-str-list      TimestampedList<String>
//! ```
//!
//! # Additive merge
//!
//! The `add` operation takes a delta in the same grammar as a full value:
//!
//! | Type | Effect | Reports a change when |
//! |------|--------|-----------------------|
//! | Integer, unit-tagged integer | adds a signed delta | delta is non-zero |
//! | List | appends the decoded elements | delta list is non-empty |
//! | Prefixed list | appends to the list, prefix untouched | delta list is non-empty |
//! | Flags | sets the decoded flags | delta set is non-empty |
//! | Anything else | fails with `UnsupportedOperation` | |
//!
//! # Edge Cases
//!
//! - The empty string decodes to the empty list, the empty map and the empty
//!   flag set. A list holding one empty string therefore encodes to the empty
//!   string and reads back as the empty list.
//! - A prefixed list without any unescaped `:` sets only the prefix.
//! - Map keys that repeat resolve to the last occurrence.
//! - `HashMap` entry order in the output is unspecified.

// This module contains only documentation; no implementation code
