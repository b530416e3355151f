use super::*;

#[test]
fn test_name_raw_roundtrip() {
    let name = Name::from_raw(42);
    assert_eq!(name.raw(), 42);
    assert_eq!(name.index(), 42);
}

#[test]
fn test_name_default_is_empty() {
    assert_eq!(Name::default(), Name::EMPTY);
    assert_eq!(Name::EMPTY.raw(), 0);
}

#[test]
fn test_name_debug() {
    assert_eq!(format!("{:?}", Name::from_raw(7)), "Name(7)");
}
