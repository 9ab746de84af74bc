use rowbind::Runtime;
use tests::models::User;
use tests::row;

use std::sync::Arc;
use std::thread;

#[test]
fn concurrent_first_use_keeps_one_descriptor() {
    let rt = Runtime::default();

    let descriptors: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| rt.get_metadata::<User>().unwrap()))
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(rt.registry().len(), 1);
    for descriptor in &descriptors {
        assert!(Arc::ptr_eq(descriptor, &descriptors[0]));
    }
}

#[test]
fn concurrent_mapping_shares_one_mapper() {
    let rt = Runtime::default();

    let users: Vec<User> = thread::scope(|s| {
        let handles: Vec<_> = (0..8i64)
            .map(|id| {
                let rt = rt.clone();
                s.spawn(move || {
                    let row = row!("Id": I64 = id, "Name": String = format!("user{id}"));
                    rt.map::<User>(&row).unwrap()
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(rt.mapper_count(), 1);
    for (id, user) in users.iter().enumerate() {
        assert_eq!(*user.id(), id as i64);
        assert_eq!(*user.name(), format!("user{id}"));
    }
}
