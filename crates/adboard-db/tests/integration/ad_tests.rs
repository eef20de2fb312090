use adboard_core::NewAd;

use crate::integration::common::setup_test_db;

#[tokio::test]
async fn list_empty() {
    let (db, _container) = setup_test_db().await;

    let ads = db.ad_repo().list().await.unwrap();
    assert!(ads.is_empty());
}

#[tokio::test]
async fn create_then_list() {
    let (db, _container) = setup_test_db().await;
    let repo = db.ad_repo();

    let created = repo.create(&NewAd::new("T", "D")).await.unwrap();
    assert_eq!(created.title, "T");
    assert_eq!(created.description, "D");
    assert_eq!(created.created_at, created.updated_at);

    let ads = repo.list().await.unwrap();
    assert_eq!(ads, vec![created]);
}

#[tokio::test]
async fn list_is_in_insertion_order() {
    let (db, _container) = setup_test_db().await;
    let repo = db.ad_repo();

    let first = repo.create(&NewAd::new("first", "1")).await.unwrap();
    let second = repo.create(&NewAd::new("second", "2")).await.unwrap();

    let ads = repo.list().await.unwrap();
    assert_eq!(ads.len(), 2);
    assert_eq!(ads[0].id, first.id);
    assert_eq!(ads[1].id, second.id);
}

#[tokio::test]
async fn health_check_ok() {
    let (db, _container) = setup_test_db().await;
    db.ad_repo().health_check().await.unwrap();
}
