//! Type-erased option values.
//!
//! An option table stores values of many types side by side. [`DynOption`] is
//! the object-safe face of [`OptionValue`]: every sized option value type gets
//! it for free, and `Box<dyn DynOption>` values can live in one container
//! while still being displayed, set and merged through their own codecs.
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use option_codec::DynOption;
//!
//! let mut table: BTreeMap<&str, Box<dyn DynOption>> = BTreeMap::new();
//! table.insert("tabstop", Box::new(8i32));
//! table.insert("autoinfo", Box::new(true));
//!
//! let tabstop = table.get_mut("tabstop").unwrap();
//! tabstop.add_from_str("-4").unwrap();
//! assert_eq!(tabstop.to_option_string(), "4");
//! assert_eq!(tabstop.downcast_ref::<i32>(), Some(&4));
//!
//! assert!(table.get_mut("autoinfo").unwrap().add_from_str("yes").is_err());
//! ```

use crate::{OptionValue, Result};
use std::any::Any;
use std::borrow::Cow;
use std::fmt;

/// Object-safe option codec.
pub trait DynOption: fmt::Debug + Send + Sync {
    /// Grammar name of the stored value's type.
    fn type_name(&self) -> Cow<'static, str>;

    fn to_option_string(&self) -> String;

    /// Replaces the value; leaves it untouched on error.
    fn set_from_str(&mut self, input: &str) -> Result<()>;

    /// Merges a delta; returns whether anything changed.
    fn add_from_str(&mut self, delta: &str) -> Result<bool>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T> DynOption for T
where
    T: OptionValue + fmt::Debug + Send + Sync + 'static,
{
    fn type_name(&self) -> Cow<'static, str> {
        T::describe()
    }

    fn to_option_string(&self) -> String {
        self.encode()
    }

    fn set_from_str(&mut self, input: &str) -> Result<()> {
        crate::set_from_str(self, input)
    }

    fn add_from_str(&mut self, delta: &str) -> Result<bool> {
        crate::add_from_str(self, delta)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl dyn DynOption {
    pub fn is<T: 'static>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    pub fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, TimestampedList};

    fn boxed<T: DynOption + 'static>(value: T) -> Box<dyn DynOption> {
        Box::new(value)
    }

    #[test]
    fn test_heterogeneous_values() {
        let mut values = vec![
            boxed(3i32),
            boxed(vec!["a".to_string()]),
            boxed((1usize, false)),
            boxed(TimestampedList::<i32>::new(1, vec![5])),
        ];

        let names: Vec<_> = values.iter().map(|v| v.type_name()).collect();
        assert_eq!(
            names,
            vec!["int", "str-list", "tuple(size|bool)", "size-prefixed-int-list"]
        );

        values[1].add_from_str("b:c").unwrap();
        assert_eq!(values[1].to_option_string(), "a:b:c");

        values[2].set_from_str("2|yes").unwrap();
        assert_eq!(values[2].to_option_string(), "2|true");

        values[3].add_from_str("6").unwrap();
        assert_eq!(values[3].to_option_string(), "1:5:6");
    }

    #[test]
    fn test_failed_set_keeps_value() {
        let mut value = boxed(vec![1, 2]);
        let err = value.set_from_str("3:x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(value.downcast_ref::<Vec<i32>>(), Some(&vec![1, 2]));
    }

    #[test]
    fn test_downcast() {
        let mut value = boxed(7u8);
        assert!(value.is::<u8>());
        assert!(value.downcast_ref::<i32>().is_none());
        *value.downcast_mut::<u8>().unwrap() = 9;
        assert_eq!(value.to_option_string(), "9");
    }
}
