//! Unit-tagged integers.
//!
//! [`StrongNumber`] wraps an integer together with a phantom unit marker, so a
//! line count can never be mixed up with a byte count at the type level. The
//! codec is the wrapped integer's: same text, same additive merge.
//!
//! ```rust
//! use option_codec::units::{ByteCount, LineCount};
//! use option_codec::OptionValue;
//!
//! let mut scroll = LineCount::decode("3").unwrap();
//! assert!(scroll.add("-1").unwrap());
//! assert_eq!(scroll.get(), 2);
//! assert_eq!(ByteCount::new(40).encode(), "40");
//! ```

use crate::{OptionValue, Result};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// An integer of representation `R` measured in unit `U`.
///
/// `StrongNumber` also implements [`std::ops::Add`], whose by-value `add`
/// wins method lookup wherever that trait is imported. Name the option merge
/// through the trait in that case:
///
/// ```rust
/// use option_codec::units::LineCount;
/// use option_codec::OptionValue;
/// use std::ops::Add;
///
/// let mut height = LineCount::new(10);
/// assert!(OptionValue::add(&mut height, "-2").unwrap());
/// assert_eq!(height.add(LineCount::new(1)), LineCount::new(9));
/// ```
pub struct StrongNumber<U, R = i32> {
    value: R,
    _unit: PhantomData<fn() -> U>,
}

/// Marker for counts of lines.
#[derive(Debug)]
pub enum Lines {}

/// Marker for counts of display columns.
#[derive(Debug)]
pub enum Columns {}

/// Marker for counts of bytes.
#[derive(Debug)]
pub enum Bytes {}

/// Marker for counts of codepoints.
#[derive(Debug)]
pub enum Codepoints {}

pub type LineCount = StrongNumber<Lines>;
pub type ColumnCount = StrongNumber<Columns>;
pub type ByteCount = StrongNumber<Bytes>;
pub type CharCount = StrongNumber<Codepoints>;

impl<U, R> StrongNumber<U, R> {
    pub const fn new(value: R) -> Self {
        StrongNumber {
            value,
            _unit: PhantomData,
        }
    }

    pub fn into_inner(self) -> R {
        self.value
    }
}

impl<U, R: Copy> StrongNumber<U, R> {
    pub fn get(&self) -> R {
        self.value
    }
}

impl<U, R: Clone> Clone for StrongNumber<U, R> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<U, R: Copy> Copy for StrongNumber<U, R> {}

impl<U, R: Default> Default for StrongNumber<U, R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<U, R: PartialEq> PartialEq for StrongNumber<U, R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<U, R: Eq> Eq for StrongNumber<U, R> {}

impl<U, R: PartialOrd> PartialOrd for StrongNumber<U, R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<U, R: Ord> Ord for StrongNumber<U, R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<U, R: Hash> Hash for StrongNumber<U, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<U, R: fmt::Debug> fmt::Debug for StrongNumber<U, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StrongNumber").field(&self.value).finish()
    }
}

impl<U, R: fmt::Display> fmt::Display for StrongNumber<U, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<U, R> From<R> for StrongNumber<U, R> {
    fn from(value: R) -> Self {
        Self::new(value)
    }
}

impl<U, R: Add<Output = R>> Add for StrongNumber<U, R> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.value + other.value)
    }
}

impl<U, R: Sub<Output = R>> Sub for StrongNumber<U, R> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.value - other.value)
    }
}

impl<U, R: AddAssign> AddAssign for StrongNumber<U, R> {
    fn add_assign(&mut self, other: Self) {
        self.value += other.value;
    }
}

impl<U, R: SubAssign> SubAssign for StrongNumber<U, R> {
    fn sub_assign(&mut self, other: Self) {
        self.value -= other.value;
    }
}

impl<U, R: OptionValue> OptionValue for StrongNumber<U, R> {
    fn describe() -> Cow<'static, str> {
        R::describe()
    }

    fn encode(&self) -> String {
        self.value.encode()
    }

    fn decode(input: &str) -> Result<Self> {
        R::decode(input).map(Self::new)
    }

    fn add(&mut self, delta: &str) -> Result<bool> {
        self.value.add(delta)
    }
}
