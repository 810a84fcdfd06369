mod common;

use common::{create_test_pool, insert_user_raw};

use al_db::UserRepository;

use googletest::prelude::*;

#[tokio::test]
async fn given_new_email_when_get_or_create_then_user_is_created() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    // When: Resolving a never-seen email
    let user = repo.get_or_create("a@x.com").await.unwrap();

    // Then: A user exists with that email and a fresh id
    assert_that!(user.id, gt(0));
    assert_that!(user.email.as_str(), eq("a@x.com"));
}

#[tokio::test]
async fn given_existing_user_when_get_or_create_then_same_id_both_times() {
    // Given: A database where the email was already resolved once
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);
    let first = repo.get_or_create("a@x.com").await.unwrap();

    // When: Resolving the same email again
    let second = repo.get_or_create("a@x.com").await.unwrap();

    // Then: The same user is returned, no duplicate created
    assert_that!(second.id, eq(first.id));
    assert_that!(second.created_at, eq(first.created_at));
}

#[tokio::test]
async fn given_row_inserted_by_concurrent_writer_when_get_or_create_then_existing_row_wins() {
    // Given: Another writer already inserted the email (lost-race shape:
    // our lookup missed, the conflict-tolerant insert is a no-op)
    let pool = create_test_pool().await;
    let existing_id = insert_user_raw(&pool, "raced@x.com").await;
    let repo = UserRepository::new(pool);

    // When: get_or_create runs against the pre-existing row
    let user = repo.get_or_create("raced@x.com").await.unwrap();

    // Then: The winner's row is returned, not a duplicate
    assert_that!(user.id, eq(existing_id));
}

#[tokio::test]
async fn given_two_emails_when_get_or_create_then_distinct_users() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    let a = repo.get_or_create("a@x.com").await.unwrap();
    let b = repo.get_or_create("b@x.com").await.unwrap();

    assert_that!(a.id, not(eq(b.id)));
}

#[tokio::test]
async fn given_case_variant_email_when_get_or_create_then_treated_as_distinct() {
    // Emails match case-sensitively as stored
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    let lower = repo.get_or_create("a@x.com").await.unwrap();
    let upper = repo.get_or_create("A@X.COM").await.unwrap();

    assert_that!(lower.id, not(eq(upper.id)));
}

#[tokio::test]
async fn given_unknown_email_when_find_by_email_then_none() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    let found = repo.find_by_email("nobody@x.com").await.unwrap();

    assert_that!(found, none());
}

#[tokio::test]
async fn given_created_user_when_find_by_id_then_row_matches() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);
    let user = repo.get_or_create("a@x.com").await.unwrap();

    let found = repo.find_by_id(user.id).await.unwrap().unwrap();

    assert_that!(found.email.as_str(), eq("a@x.com"));
    assert_that!(found.id, eq(user.id));
}
