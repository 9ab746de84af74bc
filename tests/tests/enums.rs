use pretty_assertions::assert_eq;
use rowbind::value::{Primitive, Type, Value};
use rowbind::{EnumTextMatch, Runtime};
use tests::models::{LogLevel, Priority, User, UserSummary};
use tests::row;

#[test]
fn text_maps_to_member_by_name() {
    let rt = Runtime::default();
    let user: User = rt.map(&row!("Level": String = "Informational")).unwrap();

    assert_eq!(*user.level(), LogLevel::Informational);
}

#[test]
fn unknown_text_is_a_lookup_error() {
    let rt = Runtime::default();

    let err = rt.map::<User>(&row!("Level": String = "Verbose")).unwrap_err();
    assert!(err.is_enum_lookup());
}

#[test]
fn lookup_is_case_sensitive_by_default() {
    let rt = Runtime::default();

    let err = rt.map::<User>(&row!("Level": String = "warning")).unwrap_err();
    assert!(err.is_enum_lookup());
}

#[test]
fn case_insensitive_fallback_when_configured() {
    let rt = Runtime::builder()
        .enum_text_match(EnumTextMatch::CaseInsensitive)
        .build();

    let user: User = rt.map(&row!("Level": String = "warning")).unwrap();
    assert_eq!(*user.level(), LogLevel::Warning);
}

#[test]
fn integral_storage_is_cast_to_repr() {
    let rt = Runtime::default();

    let summary: UserSummary = rt
        .map(&row!("level": I16 = 1i16, "priority": I64 = 5i64))
        .unwrap();
    assert_eq!(summary.level, Some(LogLevel::Debug));
    assert_eq!(summary.priority, Priority::Normal);

    let exact: UserSummary = rt.map(&row!("priority": U8 = 10u8)).unwrap();
    assert_eq!(exact.priority, Priority::High);
}

#[test]
fn undeclared_discriminant_fails() {
    let rt = Runtime::default();

    let err = rt.map::<UserSummary>(&row!("priority": I32 = 2)).unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(
        err.to_string(),
        "failed to map column `priority` of `UserSummary`: cannot convert U8 to Enum(Priority)"
    );

    // Out of the repr's range entirely
    let err = rt.map::<UserSummary>(&row!("priority": I32 = 300)).unwrap_err();
    assert!(err.is_type_conversion());
}

#[test]
fn enum_type_describes_members() {
    let Type::Enum(def) = LogLevel::ty() else {
        panic!("expected an enum type");
    };

    assert_eq!(def.ident, "LogLevel");
    assert_eq!(def.repr, Type::I32);
    let names: Vec<_> = def.variants.iter().map(|v| v.name).collect();
    assert_eq!(names, ["Trace", "Debug", "Informational", "Warning", "Error"]);

    let Type::Enum(priority) = Priority::ty() else {
        panic!("expected an enum type");
    };
    assert_eq!(priority.repr, Type::U8);
    assert_eq!(priority.variants[2].discriminant, 10);
}

#[test]
fn enum_values_store_discriminant() {
    assert_eq!(LogLevel::Warning.to_value(), Value::I32(3));
    assert_eq!(Priority::Normal.to_value(), Value::U8(5));
    assert_eq!(LogLevel::load(Value::I64(4)).unwrap(), LogLevel::Error);
}
