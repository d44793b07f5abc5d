//! PostgreSQL implementation of ScannerRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use gatescan_core::entities::Scanner;
use gatescan_core::error::DomainError;
use gatescan_core::traits::{RepoResult, ScannerRepository};

use crate::models::{AssignedScannerModel, ScannerModel};

use super::error::{map_db_error, map_unique_violation, scanner_not_found};

const SCANNER_COLUMNS: &str = "id, name, phone_number, email, is_active, created_at, updated_at";

/// PostgreSQL implementation of ScannerRepository
#[derive(Clone)]
pub struct PgScannerRepository {
    pool: PgPool,
}

impl PgScannerRepository {
    /// Create a new PgScannerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Map a contact uniqueness violation to the matching domain error
    fn contact_conflict(scanner: &Scanner) -> DomainError {
        if scanner.phone_number.is_some() {
            DomainError::PhoneNumberExists
        } else {
            DomainError::EmailExists
        }
    }
}

#[async_trait]
impl ScannerRepository for PgScannerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Scanner>> {
        let result = sqlx::query_as::<_, ScannerModel>(&format!(
            "SELECT {SCANNER_COLUMNS} FROM scanners WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Scanner::from))
    }

    #[instrument(skip(self))]
    async fn find_by_phone(&self, phone_number: &str) -> RepoResult<Option<Scanner>> {
        let result = sqlx::query_as::<_, ScannerModel>(&format!(
            "SELECT {SCANNER_COLUMNS} FROM scanners WHERE phone_number = $1"
        ))
        .bind(phone_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Scanner::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Scanner>> {
        let result = sqlx::query_as::<_, ScannerModel>(&format!(
            "SELECT {SCANNER_COLUMNS} FROM scanners WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Scanner::from))
    }

    #[instrument(skip(self))]
    async fn phone_exists(&self, phone_number: &str) -> RepoResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM scanners WHERE phone_number = $1)")
                .bind(phone_number)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM scanners WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Scanner>> {
        let results = sqlx::query_as::<_, ScannerModel>(&format!(
            "SELECT {SCANNER_COLUMNS} FROM scanners ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Scanner::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_event(&self, event_id: Uuid) -> RepoResult<Vec<(Scanner, DateTime<Utc>)>> {
        let results = sqlx::query_as::<_, AssignedScannerModel>(
            r#"
            SELECT s.id, s.name, s.phone_number, s.email, s.is_active, s.created_at, s.updated_at,
                   a.assigned_at
            FROM scanners s
            JOIN scanner_assignments a ON a.scanner_id = s.id
            WHERE a.event_id = $1
            ORDER BY a.assigned_at DESC
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self, scanner, pin_hash), fields(name = %scanner.name))]
    async fn create(&self, scanner: &Scanner, pin_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO scanners (id, name, phone_number, email, pin_hash, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(scanner.id)
        .bind(&scanner.name)
        .bind(&scanner.phone_number)
        .bind(&scanner.email)
        .bind(pin_hash)
        .bind(scanner.is_active)
        .bind(scanner.created_at)
        .bind(scanner.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || Self::contact_conflict(scanner)))?;

        Ok(())
    }

    #[instrument(skip(self, scanner), fields(id = %scanner.id))]
    async fn update(&self, scanner: &Scanner) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE scanners
            SET name = $2, phone_number = $3, email = $4, is_active = $5, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(scanner.id)
        .bind(&scanner.name)
        .bind(&scanner.phone_number)
        .bind(&scanner.email)
        .bind(scanner.is_active)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || Self::contact_conflict(scanner)))?;

        if result.rows_affected() == 0 {
            return Err(scanner_not_found(scanner.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_pin_hash(&self, id: Uuid) -> RepoResult<Option<String>> {
        let result: Option<String> = sqlx::query_scalar("SELECT pin_hash FROM scanners WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, pin_hash))]
    async fn update_pin(&self, id: Uuid, pin_hash: &str) -> RepoResult<()> {
        let result = sqlx::query("UPDATE scanners SET pin_hash = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(pin_hash)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(scanner_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_active(&self, id: Uuid, active: bool) -> RepoResult<()> {
        let result = sqlx::query("UPDATE scanners SET is_active = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(active)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(scanner_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM scanner_assignments WHERE scanner_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM scanners WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(scanner_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgScannerRepository>();
    }
}
