//! Database schema and migrations for Letterbox.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: letters table
    r#"
-- Letters awaiting future delivery
CREATE TABLE letters (
    id              TEXT PRIMARY KEY,               -- UUID v4
    recipient_email TEXT NOT NULL,
    subject         TEXT NOT NULL,
    content         TEXT NOT NULL,
    delivery_date   INTEGER NOT NULL,               -- unix seconds, UTC
    status          TEXT NOT NULL DEFAULT 'pending',-- 'pending', 'sent', 'failed'
    is_public       INTEGER NOT NULL DEFAULT 0,
    created_at      INTEGER NOT NULL                -- unix seconds, UTC
);

CREATE INDEX idx_letters_status_delivery_date ON letters(status, delivery_date);
"#,
];
