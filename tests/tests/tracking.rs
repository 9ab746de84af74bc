use pretty_assertions::assert_eq;
use rowbind::{Runtime, TrackedRecord};
use tests::models::{AuditEntry, LogLevel, Reading, User};
use tests::row;

fn loaded_user(rt: &Runtime) -> User {
    let row = row!("Id": I64 = 1i64, "Name": String = "Ada", "Status": String = "A");
    rt.map(&row).unwrap()
}

fn modified(user: &impl TrackedRecord) -> Vec<&'static str> {
    user.modified_columns().iter().copied().collect()
}

#[test]
fn setter_records_column_once() {
    let rt = Runtime::default();
    let mut user = loaded_user(&rt);
    assert_eq!(user.status(), "A");

    user.set_status("B").unwrap();
    assert_eq!(modified(&user), ["Status"]);

    user.set_status("B").unwrap();
    assert_eq!(modified(&user), ["Status"]);
    assert!(user.is_modified("Status"));
}

#[test]
fn modified_columns_keep_first_write_order() {
    let rt = Runtime::default();
    let mut user = loaded_user(&rt);

    user.set_level(LogLevel::Error).unwrap();
    user.set_name("Grace").unwrap();
    user.set_level(LogLevel::Trace).unwrap();

    assert_eq!(modified(&user), ["Level", "Name"]);
}

#[test]
fn construction_is_not_tracked() {
    let mut user = User::default();
    user.set_name("draft").unwrap();

    assert!(!user.is_loaded());
    assert!(user.modified_columns().is_empty());
}

#[test]
fn accept_changes_clears_modifications() {
    let rt = Runtime::default();
    let mut user = loaded_user(&rt);

    user.set_status("C").unwrap();
    user.accept_changes();

    assert!(user.modified_columns().is_empty());
    assert!(user.is_loaded());
}

#[test]
fn immutable_record_rejects_writes_after_load() {
    let rt = Runtime::default();
    let row = row!("Id": I64 = 5i64, "Message": String = "created");

    let mut entry: AuditEntry = rt.map(&row).unwrap();
    assert!(rt.get_metadata::<AuditEntry>().unwrap().immutable);

    let err = entry.set_message("edited").unwrap_err();
    assert!(err.is_immutable_record_changed());
    assert_eq!(err.immutable_column(), Some("Message"));
    assert_eq!(entry.message(), "created");
    assert!(entry.modified_columns().is_empty());
}

#[test]
fn immutable_record_is_writable_before_load() {
    let mut entry = AuditEntry::default();
    entry.set_message("draft").unwrap();
    assert_eq!(entry.message(), "draft");
}

#[test]
fn clone_is_loaded_and_independent() {
    let rt = Runtime::default();
    let mut user = loaded_user(&rt);
    user.set_status("B").unwrap();

    let mut copy = user.clone_record().unwrap();
    assert_eq!(copy.status(), "B");
    assert_eq!(copy.name(), "Ada");
    assert!(copy.is_loaded());
    assert!(copy.modified_columns().is_empty());

    copy.set_name("Copy").unwrap();
    assert_eq!(user.name(), "Ada");
    assert_eq!(modified(&user), ["Status"]);
    assert_eq!(modified(&copy), ["Name"]);
}

#[test]
fn clone_of_immutable_record_stays_immutable() {
    let rt = Runtime::default();
    let row = row!("Id": I64 = 5i64, "Message": String = "created");
    let entry: AuditEntry = rt.map(&row).unwrap();

    let mut copy = entry.clone_record().unwrap();
    assert!(copy.set_message("x").is_err());
}

#[test]
fn merge_copies_only_differences() {
    let rt = Runtime::default();

    let mut target = User::default();
    target.set_name("Ada").unwrap();
    target.set_status("A").unwrap();

    let mut source = User::default();
    source.set_name("Ada").unwrap();
    source.set_status("B").unwrap();
    source.set_email("ada@example.com".to_string()).unwrap();

    let merged = target.merge_changes_from(&source).unwrap();

    // Status and Email differ
    assert_eq!(merged, 2);
    assert_eq!(target.status(), "B");
    assert_eq!(target.email().as_deref(), Some("ada@example.com"));
    assert!(target.is_loaded());
    assert!(target.modified_columns().is_empty());

    // Non-null → null is a difference too
    let cleared = User::default();
    let mut loaded = loaded_user(&rt);
    loaded.set_email("x@example.com".to_string()).unwrap();
    loaded.merge_changes_from(&cleared).unwrap();
    assert_eq!(*loaded.email(), None);
}

#[test]
fn merge_counts_identical_nan_as_unchanged() {
    let rt = Runtime::default();
    let row = row!("Id": I64 = 1i64, "Value": F64 = f64::NAN);

    let mut target: Reading = rt.map(&row).unwrap();
    let source: Reading = rt.map(&row).unwrap();
    assert_eq!(target.merge_changes_from(&source).unwrap(), 0);

    let changed: Reading = rt.map(&row!("Id": I64 = 1i64, "Value": F64 = 2.5f64)).unwrap();
    assert_eq!(target.merge_changes_from(&changed).unwrap(), 1);
    assert_eq!(*target.value(), 2.5);
}
