//! Letter repository for Letterbox.
//!
//! This module provides the storage operations for letters: insertion,
//! the due-letter scan, and the one-way status transition.

use super::letter::{Letter, LetterStatus, NewLetter};
use super::DbPool;
use crate::{LetterboxError, Result};

const SELECT_COLUMNS: &str = "id, recipient_email, subject, content, delivery_date, \
                              status, is_public, created_at";

/// Repository for letter storage operations.
pub struct LetterRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> LetterRepository<'a> {
    /// Create a new LetterRepository with the given pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a new letter with status 'pending'.
    ///
    /// Returns the stored letter.
    pub async fn insert(&self, new_letter: &NewLetter) -> Result<Letter> {
        sqlx::query(
            "INSERT INTO letters (id, recipient_email, subject, content, delivery_date, status, is_public, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(&new_letter.id)
        .bind(&new_letter.recipient_email)
        .bind(&new_letter.subject)
        .bind(&new_letter.content)
        .bind(new_letter.delivery_date)
        .bind(LetterStatus::Pending)
        .bind(new_letter.is_public)
        .bind(new_letter.created_at)
        .execute(self.pool)
        .await
        .map_err(|e| LetterboxError::Database(e.to_string()))?;

        self.get_by_id(&new_letter.id)
            .await?
            .ok_or_else(|| LetterboxError::NotFound("letter".to_string()))
    }

    /// Get a letter by ID.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Letter>> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM letters WHERE id = $1");
        let result = sqlx::query_as::<_, Letter>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| LetterboxError::Database(e.to_string()))?;

        Ok(result)
    }

    /// List pending letters whose delivery date has passed.
    ///
    /// Ordered by delivery date ascending so the oldest-due letters are
    /// processed first when the limit cuts the batch short.
    pub async fn list_due_pending(&self, now: i64, limit: i64) -> Result<Vec<Letter>> {
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM letters
             WHERE status = $1 AND delivery_date <= $2
             ORDER BY delivery_date ASC
             LIMIT $3"
        );
        let letters = sqlx::query_as::<_, Letter>(&sql)
            .bind(LetterStatus::Pending)
            .bind(now)
            .bind(limit)
            .fetch_all(self.pool)
            .await
            .map_err(|e| LetterboxError::Database(e.to_string()))?;

        Ok(letters)
    }

    /// Transition a letter out of 'pending'.
    ///
    /// The WHERE clause makes the transition single-winner: only a letter
    /// that is still pending can move, so overlapping dispatch runs cannot
    /// both record an outcome. Returns whether a row was updated.
    pub async fn update_status(&self, id: &str, status: LetterStatus) -> Result<bool> {
        let result = sqlx::query("UPDATE letters SET status = $1 WHERE id = $2 AND status = $3")
            .bind(status)
            .bind(id)
            .bind(LetterStatus::Pending)
            .execute(self.pool)
            .await
            .map_err(|e| LetterboxError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
