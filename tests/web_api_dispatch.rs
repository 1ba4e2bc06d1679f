//! Web API Dispatch Tests
//!
//! Integration tests for the due-letter dispatch endpoint.

mod common;

use axum::http::StatusCode;
use serde_json::Value;

use common::{
    create_test_server, create_test_server_with_batch_size, create_test_server_without_mailer,
    seed_letter, TEST_FROM,
};
use letterbox::db::{LetterRepository, LetterStatus};

#[tokio::test]
async fn test_dispatch_no_due_letters() {
    let (server, _db, transport) = create_test_server().await;

    let response = server.post("/api/letters/dispatch").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["processed"], 0);
    assert_eq!(body["sent"], 0);
    assert_eq!(body["failed"], 0);
    assert_eq!(body["message"], "No pending letters ready to send.");

    // The transport is never touched on the no-op path
    assert_eq!(transport.sent_count(), 0);
}

#[tokio::test]
async fn test_dispatch_mixed_outcome() {
    let (server, db, transport) = create_test_server().await;

    let first = seed_letter(&db, "first@example.com", 1000).await;
    let second = seed_letter(&db, "second@example.com", 2000).await;
    let third = seed_letter(&db, "third@example.com", 3000).await;

    // The transport fails on the second-due letter only
    transport.fail_for("second@example.com");

    let response = server.post("/api/letters/dispatch").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["processed"], 3);
    assert_eq!(body["sent"], 2);
    assert_eq!(body["failed"], 1);
    assert!(body.get("message").is_none());

    let repo = LetterRepository::new(db.pool());
    assert_eq!(
        repo.get_by_id(&first).await.unwrap().unwrap().status,
        LetterStatus::Sent
    );
    assert_eq!(
        repo.get_by_id(&second).await.unwrap().unwrap().status,
        LetterStatus::Failed
    );
    assert_eq!(
        repo.get_by_id(&third).await.unwrap().unwrap().status,
        LetterStatus::Sent
    );
}

#[tokio::test]
async fn test_dispatch_messages_carry_letter_fields() {
    let (server, db, transport) = create_test_server().await;

    seed_letter(&db, "you@example.com", 1000).await;

    server.post("/api/letters/dispatch").await.assert_status_ok();

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].from, TEST_FROM);
    assert_eq!(sent[0].to, "you@example.com");
    assert_eq!(sent[0].subject, "A letter from the past");
    assert_eq!(sent[0].text, "Dear future self,");
}

#[tokio::test]
async fn test_dispatch_is_idempotent_across_invocations() {
    let (server, db, transport) = create_test_server().await;

    seed_letter(&db, "once@example.com", 1000).await;

    let response = server.post("/api/letters/dispatch").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["processed"], 1);
    assert_eq!(body["sent"], 1);

    // The letter is no longer pending, so a re-run finds nothing
    let response = server.post("/api/letters/dispatch").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["processed"], 0);
    assert_eq!(transport.sent_count(), 1);
}

#[tokio::test]
async fn test_dispatch_failed_letter_stays_failed() {
    let (server, db, transport) = create_test_server().await;

    let id = seed_letter(&db, "broken@example.com", 1000).await;
    transport.fail_for("broken@example.com");

    let response = server.post("/api/letters/dispatch").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["failed"], 1);

    // No retry on the next invocation
    let response = server.post("/api/letters/dispatch").await;
    let body: Value = response.json();
    assert_eq!(body["processed"], 0);

    let letter = LetterRepository::new(db.pool())
        .get_by_id(&id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(letter.status, LetterStatus::Failed);
}

#[tokio::test]
async fn test_dispatch_skips_future_letters() {
    let (server, db, transport) = create_test_server().await;

    // 2100-01-01 is not due yet
    seed_letter(&db, "later@example.com", 4_102_444_800).await;

    let response = server.post("/api/letters/dispatch").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["processed"], 0);
    assert_eq!(transport.sent_count(), 0);
}

#[tokio::test]
async fn test_dispatch_respects_batch_size_oldest_first() {
    let (server, db, _transport) = create_test_server_with_batch_size(2).await;

    let oldest = seed_letter(&db, "oldest@example.com", 1000).await;
    let middle = seed_letter(&db, "middle@example.com", 2000).await;
    let newest = seed_letter(&db, "newest@example.com", 3000).await;

    let response = server.post("/api/letters/dispatch").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["processed"], 2);
    assert_eq!(body["sent"], 2);

    let repo = LetterRepository::new(db.pool());
    assert_eq!(
        repo.get_by_id(&oldest).await.unwrap().unwrap().status,
        LetterStatus::Sent
    );
    assert_eq!(
        repo.get_by_id(&middle).await.unwrap().unwrap().status,
        LetterStatus::Sent
    );
    // Deferred to the next invocation
    assert_eq!(
        repo.get_by_id(&newest).await.unwrap().unwrap().status,
        LetterStatus::Pending
    );

    // The next run picks up the remainder
    let response = server.post("/api/letters/dispatch").await;
    let body: Value = response.json();
    assert_eq!(body["processed"], 1);
}

#[tokio::test]
async fn test_dispatch_without_mailer_is_a_config_error() {
    let (server, db) = create_test_server_without_mailer().await;

    seed_letter(&db, "you@example.com", 1000).await;

    let response = server.post("/api/letters/dispatch").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    // The due letter is untouched
    let due = LetterRepository::new(db.pool())
        .list_due_pending(2_000_000_000, 50)
        .await
        .unwrap();
    assert_eq!(due.len(), 1);
}

#[tokio::test]
async fn test_intake_works_without_mailer() {
    let (server, _db) = create_test_server_without_mailer().await;

    let response = server
        .post("/api/letters")
        .json(&serde_json::json!({
            "recipient_email": "you@example.com",
            "subject": "Hello",
            "content": "Body",
            "delivery_date": 4_102_444_800i64
        }))
        .await;

    response.assert_status_ok();
}
