//! PostgreSQL implementation of AssignmentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use gatescan_core::entities::ScannerAssignment;
use gatescan_core::error::DomainError;
use gatescan_core::traits::{AssignmentRepository, RepoResult};

use crate::models::AssignmentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of AssignmentRepository
#[derive(Clone)]
pub struct PgAssignmentRepository {
    pool: PgPool,
}

impl PgAssignmentRepository {
    /// Create a new PgAssignmentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentRepository for PgAssignmentRepository {
    #[instrument(skip(self))]
    async fn exists(&self, scanner_id: Uuid, event_id: Uuid) -> RepoResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM scanner_assignments WHERE scanner_id = $1 AND event_id = $2)",
        )
        .bind(scanner_id)
        .bind(event_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn assign(&self, scanner_id: Uuid, event_id: Uuid) -> RepoResult<()> {
        // Re-assigning is a no-op, not a conflict
        sqlx::query(
            r#"
            INSERT INTO scanner_assignments (scanner_id, event_id)
            VALUES ($1, $2)
            ON CONFLICT (scanner_id, event_id) DO NOTHING
            "#,
        )
        .bind(scanner_id)
        .bind(event_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn unassign(&self, scanner_id: Uuid, event_id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            "DELETE FROM scanner_assignments WHERE scanner_id = $1 AND event_id = $2",
        )
        .bind(scanner_id)
        .bind(event_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::AssignmentNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_scanner(&self, scanner_id: Uuid) -> RepoResult<Vec<ScannerAssignment>> {
        let results = sqlx::query_as::<_, AssignmentModel>(
            r#"
            SELECT scanner_id, event_id, assigned_at
            FROM scanner_assignments
            WHERE scanner_id = $1
            ORDER BY assigned_at DESC
            "#,
        )
        .bind(scanner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ScannerAssignment::from).collect())
    }
}
