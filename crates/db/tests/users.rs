//! Integration tests for the users repository.

use assert_matches::assert_matches;
use sqlx::PgPool;
use showrunner_db::models::user::{CreateUser, UpdateUser};
use showrunner_db::repositories::UserRepo;

fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        password_hash: "$2b$10$notarealhashbutlongenoughtostore.............".to_string(),
        display_name: "Test User".to_string(),
        is_admin: false,
        language_preference: "en".to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_violates_unique(pool: PgPool) {
    UserRepo::create(&pool, &new_user("mei")).await.unwrap();
    let err = UserRepo::create(&pool, &new_user("mei")).await.unwrap_err();

    assert_matches!(err, sqlx::Error::Database(ref db) if db.constraint() == Some("uq_users_username"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_and_delete(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("jun")).await.unwrap();

    let update = UpdateUser {
        language_preference: Some("zh".to_string()),
        ..Default::default()
    };
    let updated = UserRepo::update(&pool, user.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.language_preference, "zh");
    assert_eq!(updated.display_name, "Test User");
    assert!(updated.is_active);

    assert!(UserRepo::delete(&pool, user.id).await.unwrap());
    assert!(UserRepo::find_by_id(&pool, user.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_exist(pool: PgPool) {
    let a = UserRepo::create(&pool, &new_user("aaa")).await.unwrap();
    let b = UserRepo::create(&pool, &new_user("bbb")).await.unwrap();

    assert!(UserRepo::all_exist(&pool, &[a.id, b.id]).await.unwrap());
    assert!(!UserRepo::all_exist(&pool, &[a.id, 987654]).await.unwrap());
    assert!(UserRepo::all_exist(&pool, &[]).await.unwrap());
}
