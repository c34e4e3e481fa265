use evently_api::usecase::user::{
    LoginUserUseCase, RegisterUserInput, RegisterUserUseCase, SyncUserInput, SyncUserUseCase,
};

use crate::helpers::Store;

#[tokio::test]
async fn sync_twice_with_identical_arguments_changes_nothing() {
    let store = Store::default();
    let sync = SyncUserUseCase {
        repo: store.users.clone(),
    };
    let input = || SyncUserInput {
        clerk_id: "clerk_42".into(),
        email: "sam@example.com".into(),
        name: "Sam".into(),
        image: Some("sam.png".into()),
    };

    let first = sync.execute(input()).await.unwrap();
    let second = sync.execute(input()).await.unwrap();

    assert_eq!(store.users.rows.lock().unwrap().len(), 1);
    assert_eq!(first.id, second.id);
    assert_eq!(first.clerk_id, second.clerk_id);
    assert_eq!(first.fullname, second.fullname);
    assert_eq!(first.email, second.email);
    assert_eq!(first.image, second.image);
}

#[tokio::test]
async fn legacy_registration_then_sync_backfills_the_identity_id() {
    let store = Store::default();

    let register = RegisterUserUseCase {
        repo: store.users.clone(),
    };
    let registered = register
        .execute(RegisterUserInput {
            fullname: "Pat".into(),
            email: "pat@example.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
    assert!(registered.clerk_id.is_none());

    // First identity-provider login matches the legacy record by email.
    let sync = SyncUserUseCase {
        repo: store.users.clone(),
    };
    let synced = sync
        .execute(SyncUserInput {
            clerk_id: "clerk_pat".into(),
            email: "pat@example.com".into(),
            name: String::new(),
            image: None,
        })
        .await
        .unwrap();

    assert_eq!(synced.id, registered.id);
    assert_eq!(synced.clerk_id.as_deref(), Some("clerk_pat"));
    assert_eq!(synced.fullname, "Pat");
    assert_eq!(store.users.rows.lock().unwrap().len(), 1);

    // The legacy password still works after the sync.
    let login = LoginUserUseCase {
        repo: store.users.clone(),
    };
    let logged_in = login.execute("pat@example.com", "secret").await.unwrap();
    assert_eq!(logged_in.map(|u| u.id), Some(registered.id));
}
