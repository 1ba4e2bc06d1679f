//! Test helpers for Web API tests.
//!
//! Provides a TestServer builder with an in-memory database and a
//! programmable mock mail transport.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;

use letterbox::db::{Database, LetterRepository, NewLetter};
use letterbox::mail::{MailTransport, OutboundMessage};
use letterbox::web::handlers::AppState;
use letterbox::web::router::{create_health_router, create_router};
use letterbox::{LetterboxError, Result};

/// From-address used by all test servers.
pub const TEST_FROM: &str = "letters@example.com";

/// Mail transport that records sends and fails on selected recipients.
#[derive(Default)]
pub struct MockTransport {
    sends: Mutex<Vec<OutboundMessage>>,
    fail_recipients: Mutex<HashSet<String>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make every send to this recipient fail.
    pub fn fail_for(&self, recipient: &str) {
        self.fail_recipients
            .lock()
            .unwrap()
            .insert(recipient.to_string());
    }

    /// Messages successfully handed to the transport.
    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sends.lock().unwrap().clone()
    }

    /// Number of successful sends.
    pub fn sent_count(&self) -> usize {
        self.sends.lock().unwrap().len()
    }
}

#[async_trait]
impl MailTransport for MockTransport {
    async fn send(&self, message: &OutboundMessage) -> Result<()> {
        if self.fail_recipients.lock().unwrap().contains(&message.to) {
            return Err(LetterboxError::Transport(
                "simulated provider outage".to_string(),
            ));
        }
        self.sends.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Create a test server with an in-memory database and mock transport.
pub async fn create_test_server() -> (TestServer, Database, Arc<MockTransport>) {
    create_test_server_with_batch_size(letterbox::DEFAULT_BATCH_SIZE).await
}

/// Create a test server with a specific dispatch batch size.
pub async fn create_test_server_with_batch_size(
    batch_size: u32,
) -> (TestServer, Database, Arc<MockTransport>) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let transport = MockTransport::new();

    let app_state = Arc::new(
        AppState::new(db.clone())
            .with_mailer(transport.clone(), TEST_FROM)
            .with_dispatch_batch_size(batch_size),
    );

    let router = create_router(app_state, &[]).merge(create_health_router());
    let server = TestServer::new(router).expect("Failed to create test server");

    (server, db, transport)
}

/// Create a test server with no mail transport configured.
pub async fn create_test_server_without_mailer() -> (TestServer, Database) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let app_state = Arc::new(AppState::new(db.clone()));

    let router = create_router(app_state, &[]).merge(create_health_router());
    let server = TestServer::new(router).expect("Failed to create test server");

    (server, db)
}

/// Insert a letter directly into the store, bypassing intake validation.
///
/// Needed to seed letters whose delivery date is already in the past.
pub async fn seed_letter(db: &Database, recipient: &str, delivery_date: i64) -> String {
    let new_letter = NewLetter::new(
        recipient,
        "A letter from the past",
        "Dear future self,",
        delivery_date,
        false,
        delivery_date - 3600,
    );
    LetterRepository::new(db.pool())
        .insert(&new_letter)
        .await
        .expect("Failed to seed letter")
        .id
}
