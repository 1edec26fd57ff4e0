//! Error types for option value encoding, decoding and merging.
//!
//! Every codec failure is surfaced synchronously to the caller as an [`Error`].
//! Nothing is retried or recovered internally: a failed `set` or `add` leaves
//! the target value exactly as it was.
//!
//! ## Error Categories
//!
//! - **Parse**: a numeral was not a whole-string decimal integer
//! - **InvalidValue**: a boolean, enum or flag literal was not recognised
//! - **MalformedPair**: a map entry did not hold exactly one unescaped `=`
//! - **ArityMismatch**: a tuple had too few or too many fields
//! - **Format**: a positional pair (such as `line,column`) had the wrong shape
//! - **UnsupportedOperation**: `add` was invoked on a type without merge semantics
//! - **OutOfRange**: a numeral or merge result does not fit the target width
//!
//! ## Examples
//!
//! ```rust
//! use option_codec::{from_str, Error, ErrorKind};
//!
//! let err = from_str::<(i32, bool)>("1|true|3").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::ArityMismatch);
//! assert!(err.to_string().contains("too many elements in tuple"));
//! ```

use std::fmt;
use thiserror::Error;

/// Which side of a tuple's declared arity the input fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    NotEnough,
    TooMany,
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::NotEnough => f.write_str("not enough"),
            Arity::TooMany => f.write_str("too many"),
        }
    }
}

/// Payload-free discriminant of an [`Error`], for callers that only need to branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    InvalidValue,
    MalformedPair,
    ArityMismatch,
    Format,
    UnsupportedOperation,
    OutOfRange,
    Custom,
}

/// Represents all possible errors raised by the option codecs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A scalar numeral failed to parse
    #[error("invalid integer '{input}': expected [-]digits")]
    Parse { input: String },

    /// A literal was not one of the accepted words
    #[error("{msg}")]
    InvalidValue { msg: String },

    /// A map entry lacked exactly one unescaped `=`
    #[error("map option expects key=value, got '{entry}'")]
    MalformedPair { entry: String },

    /// Tuple field count did not match the declared arity
    #[error("{kind} elements in tuple: expected {expected}, found {found}")]
    ArityMismatch {
        kind: Arity,
        expected: usize,
        found: usize,
    },

    /// A positional value did not have the expected shape
    #[error("expected {expected}, got '{input}'")]
    Format {
        expected: &'static str,
        input: String,
    },

    /// No additive merge is defined for this type
    #[error("no add operation supported for option type '{type_name}'")]
    UnsupportedOperation { type_name: String },

    /// A numeral or merge result does not fit the target type
    #[error("value '{input}' is out of range for {type_name}")]
    OutOfRange { input: String, type_name: String },

    /// Custom error, mostly from the serde adapter
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a parse error for a malformed numeral.
    pub fn parse(input: &str) -> Self {
        Error::Parse {
            input: input.to_string(),
        }
    }

    /// Creates an invalid value error with a human-readable message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use option_codec::Error;
    ///
    /// let err = Error::invalid_value("boolean values are either true, yes, false or no");
    /// assert_eq!(err.to_string(), "boolean values are either true, yes, false or no");
    /// ```
    pub fn invalid_value<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidValue {
            msg: msg.to_string(),
        }
    }

    /// Creates a malformed map entry error.
    pub fn malformed_pair(entry: &str) -> Self {
        Error::MalformedPair {
            entry: entry.to_string(),
        }
    }

    /// Creates an arity error, deriving the too-few/too-many side from the counts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use option_codec::Error;
    ///
    /// let err = Error::arity_mismatch(2, 1);
    /// assert!(err.to_string().starts_with("not enough elements in tuple"));
    /// ```
    pub fn arity_mismatch(expected: usize, found: usize) -> Self {
        Error::ArityMismatch {
            kind: if found < expected {
                Arity::NotEnough
            } else {
                Arity::TooMany
            },
            expected,
            found,
        }
    }

    /// Creates a shape error for positional values.
    pub fn format(expected: &'static str, input: &str) -> Self {
        Error::Format {
            expected,
            input: input.to_string(),
        }
    }

    /// Creates the error returned by the default `add` implementation.
    pub fn unsupported_add(type_name: &str) -> Self {
        Error::UnsupportedOperation {
            type_name: type_name.to_string(),
        }
    }

    /// Creates an out of range error.
    pub fn out_of_range(input: &str, type_name: &str) -> Self {
        Error::OutOfRange {
            input: input.to_string(),
            type_name: type_name.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the payload-free kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse { .. } => ErrorKind::Parse,
            Error::InvalidValue { .. } => ErrorKind::InvalidValue,
            Error::MalformedPair { .. } => ErrorKind::MalformedPair,
            Error::ArityMismatch { .. } => ErrorKind::ArityMismatch,
            Error::Format { .. } => ErrorKind::Format,
            Error::UnsupportedOperation { .. } => ErrorKind::UnsupportedOperation,
            Error::OutOfRange { .. } => ErrorKind::OutOfRange,
            Error::Custom(_) => ErrorKind::Custom,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
