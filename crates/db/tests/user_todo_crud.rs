//! Integration tests for the user and todo repositories.
//!
//! Exercises the repository layer against a real database:
//! - Insert and lookup of users and todos
//! - Join projection of todo owners
//! - Unique, foreign key and check constraint violations
//! - Rename by email

use assert_matches::assert_matches;
use sqlx::PgPool;
use todo_db::models::todo::{CreateTodo, TodoOwner};
use todo_db::models::user::{CreateUser, UpdateUserName};
use todo_db::repositories::{TodoRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(email: &str, first: &str, last: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
    }
}

fn new_todo(user_id: i64, title: &str, description: &str) -> CreateTodo {
    CreateTodo {
        user_id,
        title: title.to_string(),
        description: description.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Test: bootstrap
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_check(pool: PgPool) {
    todo_db::health_check(&pool).await.unwrap();
}

// ---------------------------------------------------------------------------
// Test: users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_user_returns_projection(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("jack1@jack.com", "jack1", "ji"))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.first_name, "jack1");
    assert_eq!(created.last_name, "ji");

    let stored = UserRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(stored.email, "jack1@jack.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_rejected(pool: PgPool) {
    UserRepo::create(&pool, &new_user("dup@example.com", "A", "B"))
        .await
        .unwrap();
    let err = UserRepo::create(&pool, &new_user("dup@example.com", "C", "D"))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        sqlx::Error::Database(ref db_err)
            if db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some("uq_users_email")
    );

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_name_by_email(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("a@b.com", "A", "B"))
        .await
        .unwrap();

    let updated = UserRepo::update_name_by_email(
        &pool,
        "a@b.com",
        &UpdateUserName {
            first_name: "A2".to_string(),
            last_name: "B2".to_string(),
        },
    )
    .await
    .unwrap()
    .expect("user should be updated");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.email, "a@b.com");
    assert_eq!(updated.first_name, "A2");
    assert_eq!(updated.last_name, "B2");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_unknown_email_returns_none(pool: PgPool) {
    UserRepo::create(&pool, &new_user("known@example.com", "K", "N"))
        .await
        .unwrap();

    let result = UserRepo::update_name_by_email(
        &pool,
        "unknown@example.com",
        &UpdateUserName {
            first_name: "X".to_string(),
            last_name: "Y".to_string(),
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());

    let known = UserRepo::find_by_email(&pool, "known@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(known.first_name, "K");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_json_omits_password(pool: PgPool) {
    UserRepo::create(&pool, &new_user("hidden@example.com", "H", "P"))
        .await
        .unwrap();
    let user = UserRepo::find_by_email(&pool, "hidden@example.com")
        .await
        .unwrap()
        .unwrap();

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password").is_none());
    assert_eq!(json["email"], "hidden@example.com");
}

// ---------------------------------------------------------------------------
// Test: todos
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_user_empty(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("empty@example.com", "E", "M"))
        .await
        .unwrap();
    let todos = TodoRepo::list_by_user(&pool, user.id).await.unwrap();
    assert!(todos.is_empty());

    // An id that matches no user at all is also just empty.
    let todos = TodoRepo::list_by_user(&pool, 9_999).await.unwrap();
    assert!(todos.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_then_list_by_user(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("gym@example.com", "G", "Y"))
        .await
        .unwrap();
    let other = UserRepo::create(&pool, &new_user("other@example.com", "O", "T"))
        .await
        .unwrap();

    let first = TodoRepo::create(
        &pool,
        &new_todo(user.id, "go to gym", "go to gym and do 10 pushups"),
    )
    .await
    .unwrap();
    let second = TodoRepo::create(&pool, &new_todo(user.id, "stretch", ""))
        .await
        .unwrap();
    TodoRepo::create(&pool, &new_todo(other.id, "not mine", "x"))
        .await
        .unwrap();

    assert_eq!(first.user_id, user.id);

    let todos = TodoRepo::list_by_user(&pool, user.id).await.unwrap();
    assert_eq!(todos, vec![first, second]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_with_owner(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("owner@example.com", "Own", "Er"))
        .await
        .unwrap();
    TodoRepo::create(&pool, &new_todo(user.id, "one", "first"))
        .await
        .unwrap();
    TodoRepo::create(&pool, &new_todo(user.id, "two", "second"))
        .await
        .unwrap();

    let rows = TodoRepo::list_with_owner_by_user(&pool, user.id)
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].title, "one");
    assert_eq!(rows[1].description, "second");
    for row in &rows {
        assert_eq!(
            row.user,
            TodoOwner {
                first_name: "Own".to_string(),
                last_name: "Er".to_string(),
                email: "owner@example.com".to_string(),
            }
        );
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_todo_for_missing_user_rejected(pool: PgPool) {
    let err = TodoRepo::create(&pool, &new_todo(424_242, "orphan", ""))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        sqlx::Error::Database(ref db_err)
            if db_err.code().as_deref() == Some("23503")
                && db_err.constraint() == Some("fk_todos_user_id")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_title_rejected(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("blank@example.com", "B", "L"))
        .await
        .unwrap();
    let err = TodoRepo::create(&pool, &new_todo(user.id, "", "no title"))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        sqlx::Error::Database(ref db_err)
            if db_err.code().as_deref() == Some("23514")
                && db_err.constraint() == Some("ck_todos_title_not_empty")
    );

    assert!(TodoRepo::list_by_user(&pool, user.id)
        .await
        .unwrap()
        .is_empty());
}
