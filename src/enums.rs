//! Enumerations and flag sets.
//!
//! An enum takes part in the codec by declaring its value-to-name table once,
//! in declaration order, through [`EnumDesc`]. Plain enums then get their
//! codec from [`impl_option_enum!`](crate::impl_option_enum); enums whose
//! values are independent bits implement [`FlagDesc`] and are stored in a
//! [`FlagSet`].
//!
//! | Kind | Encoding | Grammar name |
//! |------|----------|--------------|
//! | enum | `name` | `enum(a\|b\|c)` |
//! | flags | `a\|c` (declaration order) | `flags(a\|b\|c)` |
//!
//! ```rust
//! use option_codec::{EnumDesc, FlagDesc, FlagSet, OptionValue};
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! enum Trace { Hooks = 1, Shell = 2, Keys = 4 }
//!
//! impl EnumDesc for Trace {
//!     const DESC: &'static [(Self, &'static str)] =
//!         &[(Trace::Hooks, "hooks"), (Trace::Shell, "shell"), (Trace::Keys, "keys")];
//! }
//!
//! impl FlagDesc for Trace {
//!     fn bits(self) -> u32 { self as u32 }
//! }
//!
//! let mut flags = FlagSet::<Trace>::decode("keys|hooks").unwrap();
//! assert_eq!(flags.encode(), "hooks|keys");
//! assert!(flags.add("shell").unwrap());
//! assert_eq!(FlagSet::<Trace>::describe(), "flags(hooks|shell|keys)");
//! ```

use crate::separators::FLAG_SEPARATOR;
use crate::{Error, OptionValue, Result};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{BitOr, BitOrAssign};

/// Ordered value-to-name table of an enumeration.
pub trait EnumDesc: Copy + PartialEq + 'static {
    /// Every value with its display name, in declaration order.
    const DESC: &'static [(Self, &'static str)];

    fn name(self) -> Option<&'static str> {
        Self::DESC
            .iter()
            .find(|(value, _)| *value == self)
            .map(|(_, name)| *name)
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::DESC
            .iter()
            .find(|(_, candidate)| *candidate == name)
            .map(|(value, _)| *value)
    }
}

/// An enumeration whose values are independently combinable bits.
pub trait FlagDesc: EnumDesc {
    fn bits(self) -> u32;
}

fn symbol_listing<E: EnumDesc>(keyword: &str) -> String {
    let names = E::DESC.iter().map(|(_, name)| *name).collect::<Vec<_>>();
    format!("{}({})", keyword, names.join("|"))
}

/// `enum(a|b|...)`
pub fn describe_enum<E: EnumDesc>() -> Cow<'static, str> {
    Cow::Owned(symbol_listing::<E>("enum"))
}

/// Name of `value`, or the empty string for a value missing from
/// [`EnumDesc::DESC`]. Such a value cannot round-trip, so every variant that
/// can be stored in an option belongs in the table.
pub fn encode_enum<E: EnumDesc>(value: E) -> String {
    value.name().unwrap_or_default().to_string()
}

pub fn decode_enum<E: EnumDesc>(input: &str) -> Result<E> {
    E::from_name(input).ok_or_else(|| {
        Error::invalid_value(format!(
            "invalid value '{}', expected {}",
            input,
            symbol_listing::<E>("enum")
        ))
    })
}

/// A set of flags of type `F`, stored as a bit mask.
pub struct FlagSet<F> {
    bits: u32,
    _flags: PhantomData<F>,
}

impl<F> FlagSet<F> {
    #[must_use]
    pub const fn empty() -> Self {
        FlagSet {
            bits: 0,
            _flags: PhantomData,
        }
    }

    #[must_use]
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl<F: FlagDesc> FlagSet<F> {
    /// Union of the bits of every declared flag.
    #[must_use]
    pub fn declared_bits() -> u32 {
        F::DESC.iter().fold(0, |acc, (flag, _)| acc | flag.bits())
    }

    /// Set built from a raw mask. Bits no declared flag covers are dropped,
    /// so every set encodes to text that decodes back to it.
    #[must_use]
    pub fn from_bits(bits: u32) -> Self {
        FlagSet {
            bits: bits & Self::declared_bits(),
            _flags: PhantomData,
        }
    }

    /// Whether every bit of `flag` is set. Zero-valued flags are never contained.
    #[must_use]
    pub fn contains(&self, flag: F) -> bool {
        let bits = flag.bits();
        bits != 0 && self.bits & bits == bits
    }

    pub fn insert(&mut self, flag: F) {
        self.bits |= flag.bits() & Self::declared_bits();
    }

    pub fn remove(&mut self, flag: F) {
        self.bits &= !flag.bits();
    }

    /// Declared flags contained in the set, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        F::DESC
            .iter()
            .map(|(flag, _)| *flag)
            .filter(move |flag| self.contains(*flag))
    }
}

impl<F> Clone for FlagSet<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for FlagSet<F> {}

impl<F> Default for FlagSet<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F> PartialEq for FlagSet<F> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<F> Eq for FlagSet<F> {}

impl<F> Hash for FlagSet<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<F: FlagDesc> fmt::Debug for FlagSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().filter_map(|flag| flag.name()))
            .finish()
    }
}

impl<F: FlagDesc> From<F> for FlagSet<F> {
    fn from(flag: F) -> Self {
        Self::from_bits(flag.bits())
    }
}

impl<F: FlagDesc> FromIterator<F> for FlagSet<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        let mut set = Self::empty();
        for flag in iter {
            set.insert(flag);
        }
        set
    }
}

impl<F: FlagDesc> BitOr<F> for FlagSet<F> {
    type Output = Self;

    fn bitor(mut self, flag: F) -> Self {
        self.insert(flag);
        self
    }
}

impl<F> BitOr for FlagSet<F> {
    type Output = Self;

    fn bitor(mut self, other: Self) -> Self {
        self.bits |= other.bits;
        self
    }
}

impl<F> BitOrAssign for FlagSet<F> {
    fn bitor_assign(&mut self, other: Self) {
        self.bits |= other.bits;
    }
}

impl<F: FlagDesc> OptionValue for FlagSet<F> {
    fn describe() -> Cow<'static, str> {
        Cow::Owned(symbol_listing::<F>("flags"))
    }

    fn encode(&self) -> String {
        self.iter()
            .filter_map(|flag| flag.name())
            .collect::<Vec<_>>()
            .join(&FLAG_SEPARATOR.to_string())
    }

    /// The empty string is the empty set.
    fn decode(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Ok(Self::empty());
        }
        input
            .split(FLAG_SEPARATOR)
            .map(|name| {
                F::from_name(name).ok_or_else(|| {
                    Error::invalid_value(format!(
                        "invalid flag '{}', expected {}",
                        name,
                        symbol_listing::<F>("flags")
                    ))
                })
            })
            .collect()
    }

    fn add(&mut self, delta: &str) -> Result<bool> {
        let extra = Self::decode(delta)?;
        *self |= extra;
        Ok(!extra.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum DebugFlags {
        None = 0,
        Hooks = 1 << 0,
        Shell = 1 << 1,
        Profile = 1 << 2,
        Keys = 1 << 3,
    }

    impl EnumDesc for DebugFlags {
        const DESC: &'static [(Self, &'static str)] = &[
            (DebugFlags::Hooks, "hooks"),
            (DebugFlags::Shell, "shell"),
            (DebugFlags::Profile, "profile"),
            (DebugFlags::Keys, "keys"),
        ];
    }

    impl FlagDesc for DebugFlags {
        fn bits(self) -> u32 {
            self as u32
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Wrap {
        Word,
        Char,
    }

    impl EnumDesc for Wrap {
        const DESC: &'static [(Self, &'static str)] =
            &[(Wrap::Word, "word"), (Wrap::Char, "char")];
    }

    #[test]
    fn test_flags_describe() {
        assert_eq!(
            FlagSet::<DebugFlags>::describe(),
            "flags(hooks|shell|profile|keys)"
        );
    }

    #[test]
    fn test_enum_helpers() {
        assert_eq!(describe_enum::<Wrap>(), "enum(word|char)");
        assert_eq!(encode_enum(Wrap::Char), "char");
        assert_eq!(decode_enum::<Wrap>("word").unwrap(), Wrap::Word);

        let err = decode_enum::<Wrap>("line").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert!(err.to_string().contains("enum(word|char)"));
    }

    #[test]
    fn test_flags_encode_declaration_order() {
        let flags = FlagSet::from(DebugFlags::Keys) | DebugFlags::Hooks;
        assert_eq!(flags.encode(), "hooks|keys");
        assert_eq!(FlagSet::<DebugFlags>::empty().encode(), "");
    }

    #[test]
    fn test_flags_decode() {
        let flags = FlagSet::<DebugFlags>::decode("shell|profile").unwrap();
        assert!(flags.contains(DebugFlags::Shell));
        assert!(flags.contains(DebugFlags::Profile));
        assert!(!flags.contains(DebugFlags::Hooks));
        assert!(!flags.contains(DebugFlags::None));
        assert!(FlagSet::<DebugFlags>::decode("").unwrap().is_empty());

        let err = FlagSet::<DebugFlags>::decode("shell|nope").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_flags_add_merges() {
        let mut flags = FlagSet::from(DebugFlags::Hooks);
        assert!(flags.add("keys").unwrap());
        assert_eq!(flags.encode(), "hooks|keys");
        assert!(!flags.add("").unwrap());
        assert!(flags.add("bogus").is_err());
        assert_eq!(flags.encode(), "hooks|keys");
    }

    #[test]
    fn test_flag_set_ops() {
        let mut flags: FlagSet<DebugFlags> = [DebugFlags::Hooks, DebugFlags::Shell]
            .into_iter()
            .collect();
        flags.remove(DebugFlags::Hooks);
        assert_eq!(flags.iter().collect::<Vec<_>>(), vec![DebugFlags::Shell]);
        assert_eq!(flags.bits(), 2);
        assert_eq!(format!("{:?}", flags), "{\"shell\"}");
    }

    #[test]
    fn test_from_bits_drops_undeclared() {
        assert_eq!(FlagSet::<DebugFlags>::declared_bits(), 0b1111);
        let flags = FlagSet::<DebugFlags>::from_bits(0b1_0000_0101);
        assert_eq!(flags.bits(), 0b101);
        assert_eq!(flags.encode(), "hooks|profile");
        assert_eq!(FlagSet::<DebugFlags>::decode(&flags.encode()).unwrap(), flags);
    }

    #[test]
    fn test_undeclared_enum_value_encodes_empty() {
        assert_eq!(encode_enum(DebugFlags::None), "");
        assert!(decode_enum::<DebugFlags>("").is_err());
    }
}
