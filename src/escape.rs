//! Escape and split primitives shared by every composite codec.
//!
//! [`escape`] prefixes each occurrence of a separator (and of the escape
//! character itself) with the escape character. [`split`] is its exact
//! inverse: it scans left to right, treats the escape character as "take the
//! next character literally", and cuts on every unescaped separator.
//!
//! ```rust
//! use option_codec::escape::{escape, split};
//!
//! let escaped = escape("a:b", ':', '\\');
//! assert_eq!(escaped, "a\\:b");
//! assert_eq!(split(&format!("{escaped}:c"), ':', '\\'), vec!["a:b", "c"]);
//! ```

/// Returns `input` with every `sep` and `esc` prefixed by `esc`.
#[must_use]
pub fn escape(input: &str, sep: char, esc: char) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch == sep || ch == esc {
            out.push(esc);
        }
        out.push(ch);
    }
    out
}

/// Removes one level of escaping without splitting.
///
/// A trailing lone `esc` has nothing to escape and is kept literally.
#[must_use]
pub fn unescape(input: &str, esc: char) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(ch) = chars.next() {
        if ch == esc {
            match chars.next() {
                Some(next) => out.push(next),
                None => out.push(ch),
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Splits `input` on unescaped `sep`, unescaping each part.
///
/// The empty string yields a single empty part, and so does every pair of
/// adjacent separators.
#[must_use]
pub fn split(input: &str, sep: char, esc: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars();
    while let Some(ch) = chars.next() {
        if ch == esc {
            match chars.next() {
                Some(next) => current.push(next),
                None => current.push(ch),
            }
        } else if ch == sep {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    parts.push(current);
    parts
}

/// Byte offset of the first unescaped `sep` in `input`.
#[must_use]
pub fn find_unescaped(input: &str, sep: char, esc: char) -> Option<usize> {
    let mut chars = input.char_indices();
    while let Some((pos, ch)) = chars.next() {
        if ch == esc {
            chars.next();
        } else if ch == sep {
            return Some(pos);
        }
    }
    None
}

/// Splits at the first unescaped `sep`.
///
/// The head is unescaped; the tail is returned raw so the caller can hand it
/// to a codec that does its own splitting.
#[must_use]
pub fn split_once(input: &str, sep: char, esc: char) -> (String, Option<&str>) {
    match find_unescaped(input, sep, esc) {
        Some(pos) => (
            unescape(&input[..pos], esc),
            Some(&input[pos + sep.len_utf8()..]),
        ),
        None => (unescape(input, esc), None),
    }
}
