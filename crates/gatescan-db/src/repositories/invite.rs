//! PostgreSQL implementation of InviteRepository - the redemption ledger

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use gatescan_core::entities::Invite;
use gatescan_core::error::DomainError;
use gatescan_core::traits::{HourlyCount, InviteRepository, RepoResult};

use crate::models::{HourlyCountRow, InviteModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of InviteRepository
#[derive(Clone)]
pub struct PgInviteRepository {
    pool: PgPool,
}

impl PgInviteRepository {
    /// Create a new PgInviteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InviteRepository for PgInviteRepository {
    /// Check-then-insert-then-count inside one transaction.
    ///
    /// The UNIQUE (code, event_id) constraint is the serialization point:
    /// when two attempts for the same pair pass the existence check
    /// concurrently, the second insert fails with a unique violation and is
    /// reported as `AlreadyRedeemed`. An early return drops the transaction
    /// and rolls it back.
    #[instrument(skip(self))]
    async fn redeem(&self, code: &str, event_id: Uuid, scanner_id: Uuid) -> RepoResult<i64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let existing: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM invites WHERE code = $1 AND event_id = $2")
                .bind(code)
                .bind(event_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_db_error)?;

        if existing.is_some() {
            return Err(DomainError::AlreadyRedeemed(code.to_string()));
        }

        sqlx::query(
            r#"
            INSERT INTO invites (id, code, event_id, scanner_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(code)
        .bind(event_id)
        .bind(scanner_id)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyRedeemed(code.to_string())))?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM invites WHERE event_id = $1")
            .bind(event_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(total)
    }

    #[instrument(skip(self))]
    async fn exists(&self, code: &str, event_id: Uuid) -> RepoResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM invites WHERE code = $1 AND event_id = $2)",
        )
        .bind(code)
        .bind(event_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn count_by_event(&self, event_id: Uuid) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM invites WHERE event_id = $1")
            .bind(event_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn count_by_scanner(&self, scanner_id: Uuid) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM invites WHERE scanner_id = $1")
            .bind(scanner_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn recent_by_event(&self, event_id: Uuid, limit: i64) -> RepoResult<Vec<Invite>> {
        let results = sqlx::query_as::<_, InviteModel>(
            r#"
            SELECT id, code, event_id, scanner_id, created_at
            FROM invites
            WHERE event_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(event_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Invite::from).collect())
    }

    #[instrument(skip(self))]
    async fn counts_by_hour(
        &self,
        event_id: Uuid,
        since: DateTime<Utc>,
    ) -> RepoResult<Vec<HourlyCount>> {
        let results = sqlx::query_as::<_, HourlyCountRow>(
            r#"
            SELECT DATE_TRUNC('hour', created_at) AS hour, COUNT(*) AS count
            FROM invites
            WHERE event_id = $1 AND created_at >= $2
            GROUP BY DATE_TRUNC('hour', created_at)
            ORDER BY hour DESC
            "#,
        )
        .bind(event_id)
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(HourlyCount::from).collect())
    }
}
