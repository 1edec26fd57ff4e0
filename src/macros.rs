/// Implements [`OptionValue`](crate::OptionValue) for plain enums that
/// implement [`EnumDesc`](crate::EnumDesc).
///
/// The value encodes as its declared name and describes itself as
/// `enum(name1|name2|...)`. Enums have no additive merge.
///
/// # Examples
///
/// ```rust
/// use option_codec::{impl_option_enum, EnumDesc, OptionValue};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Autoreload { Yes, No, Ask }
///
/// impl EnumDesc for Autoreload {
///     const DESC: &'static [(Self, &'static str)] = &[
///         (Autoreload::Yes, "yes"),
///         (Autoreload::No, "no"),
///         (Autoreload::Ask, "ask"),
///     ];
/// }
///
/// impl_option_enum!(Autoreload);
///
/// assert_eq!(Autoreload::describe(), "enum(yes|no|ask)");
/// assert_eq!(Autoreload::decode("ask").unwrap(), Autoreload::Ask);
/// assert_eq!(Autoreload::No.encode(), "no");
/// ```
#[macro_export]
macro_rules! impl_option_enum {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::OptionValue for $ty {
                fn describe() -> ::std::borrow::Cow<'static, str> {
                    $crate::enums::describe_enum::<$ty>()
                }

                fn encode(&self) -> ::std::string::String {
                    $crate::enums::encode_enum(*self)
                }

                fn decode(input: &str) -> $crate::Result<Self> {
                    $crate::enums::decode_enum(input)
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use crate::{EnumDesc, ErrorKind, OptionValue};

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Position {
        Top,
        Bottom,
    }

    impl EnumDesc for Position {
        const DESC: &'static [(Self, &'static str)] =
            &[(Position::Top, "top"), (Position::Bottom, "bottom")];
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Ending {
        Lf,
        Crlf,
    }

    impl EnumDesc for Ending {
        const DESC: &'static [(Self, &'static str)] = &[(Ending::Lf, "lf"), (Ending::Crlf, "crlf")];
    }

    impl_option_enum!(Position, Ending);

    #[test]
    fn test_enum_codec() {
        assert_eq!(Position::describe(), "enum(top|bottom)");
        assert_eq!(Position::Bottom.encode(), "bottom");
        assert_eq!(Position::decode("top").unwrap(), Position::Top);
        assert_eq!(Ending::decode("crlf").unwrap(), Ending::Crlf);
    }

    #[test]
    fn test_enum_rejects_unknown_and_add() {
        assert_eq!(
            Position::decode("middle").unwrap_err().kind(),
            ErrorKind::InvalidValue
        );
        let mut pos = Position::Top;
        assert_eq!(
            pos.add("bottom").unwrap_err().kind(),
            ErrorKind::UnsupportedOperation
        );
    }

    #[test]
    fn test_enum_list() {
        let list = vec![Ending::Lf, Ending::Crlf, Ending::Lf];
        assert_eq!(list.encode(), "lf:crlf:lf");
        assert_eq!(Vec::<Ending>::decode("lf:crlf:lf").unwrap(), list);
        assert_eq!(Vec::<Ending>::describe(), "enum(lf|crlf)-list");
    }
}
