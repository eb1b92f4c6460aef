//! Integration tests for the user repository using in-memory SurrealDB.

use rently_core::error::CoreError;
use rently_core::models::user::{CreateUser, UserRole, VerificationStatus};
use rently_core::repository::UserRepository;
use rently_db::repository::SurrealUserRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

/// Helper: spin up in-memory DB and run migrations.
async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    rently_db::run_migrations(&db).await.unwrap();
    db
}

fn create_input(name: &str, email: &str) -> CreateUser {
    CreateUser {
        name: name.into(),
        email: email.into(),
        password: "secret123".into(),
    }
}

#[tokio::test]
async fn create_populates_every_default() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    let user = repo
        .create(create_input("Ana Cruz", "ana@example.com"))
        .await
        .unwrap();

    assert_eq!(user.name, "Ana Cruz");
    assert_eq!(user.email, "ana@example.com");
    assert_eq!(user.role, UserRole::User);
    assert!(!user.verified);
    assert_eq!(user.verification_status, VerificationStatus::Unverified);
    assert_eq!(user.rating, 0.0);
    assert_eq!(user.total_ratings, 0);
    assert_eq!(user.profile_completion, 0);
    assert!(!user.is_online);
    assert!(user.last_seen.is_none());
    assert!(user.show_email);
    assert!(user.show_contact);
    assert!(user.show_social_link);

    // Password should be hashed, not stored in plaintext.
    assert_ne!(user.password_hash, "secret123");
    assert!(user.password_hash.starts_with("$argon2id$"));

    // Get by ID should return the same user.
    let fetched = repo.get_by_id(user.id).await.unwrap();
    assert_eq!(fetched.id, user.id);
    assert_eq!(fetched.email, "ana@example.com");
}

#[tokio::test]
async fn create_normalizes_name_and_email() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    let user = repo
        .create(create_input("  Ana Cruz  ", " Ana@Example.Com "))
        .await
        .unwrap();

    assert_eq!(user.name, "Ana Cruz");
    assert_eq!(user.email, "ana@example.com");
}

#[tokio::test]
async fn get_by_email_is_case_insensitive() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    let user = repo
        .create(create_input("Bob", "bob@example.com"))
        .await
        .unwrap();

    let fetched = repo.get_by_email("BOB@Example.COM").await.unwrap();
    assert_eq!(fetched.id, user.id);

    let missing = repo.get_by_email("nobody@example.com").await;
    assert!(matches!(missing, Err(CoreError::NotFound { .. })));
}

#[tokio::test]
async fn duplicate_email_rejected() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    repo.create(create_input("First", "same@example.com"))
        .await
        .unwrap();

    let result = repo.create(create_input("Second", "same@example.com")).await;
    assert!(matches!(result, Err(CoreError::AlreadyExists { .. })));
}

#[tokio::test]
async fn duplicate_email_differs_only_in_case() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    repo.create(create_input("First", "same@example.com"))
        .await
        .unwrap();

    // Normalization happens before the uniqueness check.
    let result = repo.create(create_input("Second", "Same@Example.com")).await;
    assert!(matches!(result, Err(CoreError::AlreadyExists { .. })));
}

#[tokio::test]
async fn concurrent_duplicate_registration_single_winner() {
    let db = setup().await;
    let repo_a = SurrealUserRepository::new(db.clone());
    let repo_b = SurrealUserRepository::new(db);

    let (a, b) = tokio::join!(
        repo_a.create(create_input("Racer A", "race@example.com")),
        repo_b.create(create_input("Racer B", "race@example.com")),
    );

    let successes = [&a, &b].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one registration must win the race");

    let loser = if a.is_err() { a } else { b };
    assert!(matches!(loser, Err(CoreError::AlreadyExists { .. })));
}

#[tokio::test]
async fn update_status_transitions_account() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    let user = repo
        .create(create_input("Carol", "carol@example.com"))
        .await
        .unwrap();

    repo.update_status(user.id, VerificationStatus::Inactive)
        .await
        .unwrap();

    let fetched = repo.get_by_id(user.id).await.unwrap();
    assert_eq!(fetched.verification_status, VerificationStatus::Inactive);

    repo.update_status(user.id, VerificationStatus::Active)
        .await
        .unwrap();

    let fetched = repo.get_by_id(user.id).await.unwrap();
    assert_eq!(fetched.verification_status, VerificationStatus::Active);
}

#[tokio::test]
async fn set_online_stamps_last_seen_in_both_directions() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    let user = repo
        .create(create_input("Dave", "dave@example.com"))
        .await
        .unwrap();

    repo.set_online(user.id, true).await.unwrap();
    let online = repo.get_by_id(user.id).await.unwrap();
    assert!(online.is_online);
    let seen_online = online.last_seen.expect("last_seen set when going online");

    repo.set_online(user.id, false).await.unwrap();
    let offline = repo.get_by_id(user.id).await.unwrap();
    assert!(!offline.is_online);
    let seen_offline = offline.last_seen.expect("last_seen set when going offline");

    // Going offline also advances the stamp.
    assert!(seen_offline >= seen_online);
}
