use pretty_assertions::assert_eq;
use rowbind::value::Value;
use rowbind::{Runtime, RowReader, TrackedRecord};
use tests::models::{Garment, LogLevel, Priority, User, UserSummary};
use tests::row;

fn user_row() -> rowbind::Row {
    row!(
        "Id": I64 = 7i64,
        "Name": String = "Ada",
        "Status": String = "A",
        "Email": String = "ada@example.com",
        "Level": String = "Warning",
        "RowVersion": I64 = 3i64,
        "DisplayName": String = "Ada (7)",
    )
}

#[test]
fn maps_every_matched_column() {
    let rt = Runtime::default();
    let user: User = rt.map(&user_row()).unwrap();

    assert_eq!(*user.id(), 7);
    assert_eq!(user.name(), "Ada");
    assert_eq!(user.email().as_deref(), Some("ada@example.com"));
    assert_eq!(*user.level(), LogLevel::Warning);
    assert_eq!(user.display_name(), "Ada (7)");
    assert!(user.is_loaded());
    assert!(user.modified_columns().is_empty());
}

#[test]
fn null_leaves_default_on_new_instance() {
    let rt = Runtime::default();
    let row = row!("Id": I64 = 1i64, "Email": String = Value::Null);

    let user: User = rt.map(&row).unwrap();
    assert_eq!(*user.email(), None);
    assert_eq!(*user.level(), LogLevel::default());
}

#[test]
fn null_leaves_existing_value_untouched() {
    let rt = Runtime::default();

    let mut existing = User::default();
    existing.set_name("Grace").unwrap();
    existing.set_email("grace@example.com".to_string()).unwrap();

    let row = row!("Id": I64 = 2i64, "Name": String = Value::Null, "Email": String = Value::Null);
    let user = rt.map_into(&row, existing).unwrap();

    assert_eq!(*user.id(), 2);
    assert_eq!(user.name(), "Grace");
    assert_eq!(user.email().as_deref(), Some("grace@example.com"));
}

#[test]
fn unmapped_columns_are_ignored() {
    let rt = Runtime::default();
    let row = row!("Id": I64 = 1i64, "NotAField": I32 = 5, "Name": String = "x");

    let user: User = rt.map(&row).unwrap();
    assert_eq!(user.name(), "x");
}

#[test]
fn column_names_match_case_insensitively() {
    let rt = Runtime::default();
    let row = row!("ID": I64 = 9i64, "name": String = "lower");

    let user: User = rt.map(&row).unwrap();
    assert_eq!(*user.id(), 9);
    assert_eq!(user.name(), "lower");
}

#[test]
fn numeric_columns_widen_and_narrow() {
    let rt = Runtime::default();
    let row = row!("Id": I32 = 40, "RowVersion": U8 = 2u8);

    let user: User = rt.map(&row).unwrap();
    assert_eq!(*user.id(), 40);
    assert_eq!(*user.row_version(), 2);
}

#[test]
fn impossible_conversion_names_types() {
    let rt = Runtime::default();
    let row = row!("Id": String = "seven");

    let err = rt.map::<User>(&row).unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(
        err.to_string(),
        "failed to map column `Id` of `User`: cannot convert String to I64"
    );
}

#[test]
fn simple_records_are_mapped_without_tracking() {
    let rt = Runtime::default();
    let row = row!("Id": I64 = 1i64, "Name": String = "n", "level": I64 = 4i64, "priority": I32 = 10);

    let summary: UserSummary = rt.map(&row).unwrap();
    assert_eq!(
        summary,
        UserSummary {
            id: 1,
            name: "n".to_string(),
            level: Some(LogLevel::Error),
            priority: Priority::High,
        }
    );
    assert!(rt.get_metadata::<UserSummary>().unwrap().is_simple());
}

#[test]
fn repeated_mapping_gives_identical_records() {
    let rt = Runtime::default();
    let row = user_row();

    let first: User = rt.map(&row).unwrap();
    let second: User = rt.map(&row).unwrap();
    assert_eq!(first, second);
}

#[test]
fn mappers_are_cached_per_shape() {
    let rt = Runtime::default();

    rt.map::<User>(&user_row()).unwrap();
    rt.map::<User>(&user_row()).unwrap();
    assert_eq!(rt.mapper_count(), 1);

    // Same names, different native type
    rt.map::<User>(&row!("Id": I32 = 1)).unwrap();
    rt.map::<User>(&row!("Id": I64 = 1i64)).unwrap();
    assert_eq!(rt.mapper_count(), 3);

    // Populating an existing instance is its own entry
    rt.map_into(&row!("Id": I64 = 1i64), User::default()).unwrap();
    assert_eq!(rt.mapper_count(), 4);

    rt.reset_mapper_cache();
    assert_eq!(rt.mapper_count(), 0);
}

#[test]
fn cached_mapper_is_reused() {
    let rt = Runtime::default();
    let row = user_row();

    let a = rt.get_or_build_mapper::<User>(&row, false).unwrap();
    let b = rt.get_or_build_mapper::<User>(&row, false).unwrap();
    assert!(std::sync::Arc::ptr_eq(&a, &b));

    let user = b(&row, None).unwrap();
    assert_eq!(user.status(), "A");
}

#[test]
fn mapper_rejects_rows_of_another_shape() {
    let rt = Runtime::default();
    let mapper = rt.get_or_build_mapper::<User>(&user_row(), false).unwrap();

    let short = row!("Id": I64 = 1i64);
    assert_eq!(short.field_count(), 1);
    assert!(mapper(&short, None).is_err());
}

#[test]
fn map_all_maps_mixed_shapes() {
    let rt = Runtime::default();
    let rows = vec![
        row!("Id": I64 = 1i64, "Name": String = "a"),
        row!("Id": I64 = 2i64, "Name": String = "b"),
        row!("Id": I32 = 3),
    ];

    let users: Vec<User> = rt.map_all(&rows).unwrap();
    let ids: Vec<i64> = users.iter().map(|user| *user.id()).collect();
    assert_eq!(ids, [1, 2, 3]);
    assert_eq!(rt.mapper_count(), 2);
}

#[test]
fn skipped_fields_keep_their_default() {
    let rt = Runtime::default();
    let row = row!("Id": I64 = 1i64, "scratch": U32 = 9u32);

    let user: User = rt.map(&row).unwrap();
    assert_eq!(user.scratch, 0);
}

#[test]
fn column_names_with_separators_get_their_own_mapper() {
    let rt = Runtime::default();

    let odd = row!("Id:I64;Name": String = "x");
    let user: User = rt.map(&odd).unwrap();
    assert_eq!(*user.id(), 0);

    let row = row!("Id": I64 = 7i64, "Name": String = "Ada");
    let user: User = rt.map(&row).unwrap();
    assert_eq!(*user.id(), 7);
    assert_eq!(user.name(), "Ada");
    assert_eq!(rt.mapper_count(), 2);
}

#[test]
fn column_names_match_across_unicode_case() {
    let rt = Runtime::default();

    let garment: Garment = rt.map(&row!("GRÖßE": I32 = 4)).unwrap();
    assert_eq!(garment, Garment { size: 4 });
}
