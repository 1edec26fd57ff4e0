use option_codec::{impl_option_enum, type_name, EnumDesc, ErrorKind, FlagDesc, FlagSet, OptionValue};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Autoreload {
    Yes,
    No,
    Ask,
}

impl EnumDesc for Autoreload {
    const DESC: &'static [(Self, &'static str)] = &[
        (Autoreload::Yes, "yes"),
        (Autoreload::No, "no"),
        (Autoreload::Ask, "ask"),
    ];
}

impl_option_enum!(Autoreload);

#[derive(Clone, Copy, Debug, PartialEq)]
enum DebugFlags {
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

#[test]
fn test_enum_describe() {
    assert_eq!(type_name::<Autoreload>(), "enum(yes|no|ask)");
    assert_eq!(
        type_name::<FlagSet<DebugFlags>>(),
        "flags(hooks|shell|profile|keys)"
    );
}

#[test]
fn test_enum_round_trip() {
    for value in [Autoreload::Yes, Autoreload::No, Autoreload::Ask] {
        assert_eq!(Autoreload::decode(&value.encode()).unwrap(), value);
    }
    let err = Autoreload::decode("maybe").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
    assert!(err.to_string().contains("enum(yes|no|ask)"));
}

#[test]
fn test_enum_as_map_key() {
    let map: HashMap<Autoreload, bool> = option_codec::from_str("ask=yes:no=no").unwrap();
    assert_eq!(map.get(&Autoreload::Ask), Some(&true));
    assert_eq!(map.get(&Autoreload::No), Some(&false));
    assert_eq!(
        type_name::<HashMap<Autoreload, bool>>(),
        "enum(yes|no|ask)-to-bool-map"
    );
}

#[test]
fn test_flags_round_trip_and_merge() {
    let mut flags = FlagSet::<DebugFlags>::decode("keys|shell").unwrap();
    assert_eq!(flags.encode(), "shell|keys");

    assert!(flags.add("hooks|keys").unwrap());
    assert_eq!(flags.encode(), "hooks|shell|keys");
    assert!(flags.contains(DebugFlags::Hooks));
    assert!(!flags.contains(DebugFlags::Profile));

    let all: FlagSet<DebugFlags> = DebugFlags::DESC.iter().map(|(flag, _)| *flag).collect();
    assert_eq!(FlagSet::<DebugFlags>::decode(&all.encode()).unwrap(), all);
}

#[test]
fn test_flags_inside_tuple() {
    // `|` is both the flag and the tuple separator; tuple escaping keeps them apart.
    let value = (FlagSet::from(DebugFlags::Hooks) | DebugFlags::Keys, 3);
    let encoded = value.encode();
    assert_eq!(encoded, "hooks\\|keys|3");
    assert_eq!(<(FlagSet<DebugFlags>, i32)>::decode(&encoded).unwrap(), value);
}
