use adboard_core::AppError;

use crate::integration::common::setup_test_db;

#[tokio::test]
async fn create_and_find_admin() {
    let (db, _container) = setup_test_db().await;
    let repo = db.admin_repo();

    let created = repo
        .create("admin@example.com", "$2b$04$hash")
        .await
        .unwrap();
    assert_eq!(created.email, "admin@example.com");
    assert_eq!(created.password_hash, "$2b$04$hash");

    let found = repo.find_by_email("admin@example.com").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.password_hash, created.password_hash);
}

#[tokio::test]
async fn find_unknown_email_returns_none() {
    let (db, _container) = setup_test_db().await;

    let found = db.admin_repo().find_by_email("ghost@example.com").await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn duplicate_email_is_conflict() {
    let (db, _container) = setup_test_db().await;
    let repo = db.admin_repo();

    let first = repo.create("admin@example.com", "first").await.unwrap();
    let err = repo.create("admin@example.com", "second").await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    assert_eq!(repo.count().await.unwrap(), 1);
    let stored = repo.find_by_email("admin@example.com").await.unwrap().unwrap();
    assert_eq!(stored.id, first.id);
    assert_eq!(stored.password_hash, "first");
}

#[tokio::test]
async fn distinct_emails_coexist() {
    let (db, _container) = setup_test_db().await;
    let repo = db.admin_repo();

    repo.create("a@example.com", "h").await.unwrap();
    repo.create("b@example.com", "h").await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 2);
}
