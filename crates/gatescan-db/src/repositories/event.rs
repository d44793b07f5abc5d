//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use gatescan_core::entities::Event;
use gatescan_core::error::DomainError;
use gatescan_core::traits::{EventRepository, RepoResult};

use crate::models::EventModel;

use super::error::{event_not_found, map_db_error, map_unique_violation};

const EVENT_COLUMNS: &str = "id, name, slug, description, code_prefix, attendant_code_pattern, \
                             driver_code_pattern, is_active, start_date, end_date, created_at, updated_at";

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new PgEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Event>> {
        let result = sqlx::query_as::<_, EventModel>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Event::from))
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Event>> {
        let result = sqlx::query_as::<_, EventModel>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Event::from))
    }

    #[instrument(skip(self))]
    async fn slug_exists(&self, slug: &str) -> RepoResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM events WHERE slug = $1)")
                .bind(slug)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn list(&self, active_only: bool) -> RepoResult<Vec<Event>> {
        let query = if active_only {
            format!("SELECT {EVENT_COLUMNS} FROM events WHERE is_active ORDER BY created_at DESC")
        } else {
            format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY created_at DESC")
        };

        let results = sqlx::query_as::<_, EventModel>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self, event), fields(slug = %event.slug))]
    async fn create(&self, event: &Event) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO events (id, name, slug, description, code_prefix, attendant_code_pattern,
                                driver_code_pattern, is_active, start_date, end_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(event.id)
        .bind(&event.name)
        .bind(&event.slug)
        .bind(&event.description)
        .bind(&event.code_prefix)
        .bind(&event.attendant_code_pattern)
        .bind(&event.driver_code_pattern)
        .bind(event.is_active)
        .bind(event.start_date)
        .bind(event.end_date)
        .bind(event.created_at)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SlugExists(event.slug.clone())))?;

        Ok(())
    }

    #[instrument(skip(self, event), fields(slug = %event.slug))]
    async fn update(&self, event: &Event) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE events
            SET name = $2, description = $3, code_prefix = $4, attendant_code_pattern = $5,
                driver_code_pattern = $6, is_active = $7, start_date = $8, end_date = $9,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(event.id)
        .bind(&event.name)
        .bind(&event.description)
        .bind(&event.code_prefix)
        .bind(&event.attendant_code_pattern)
        .bind(&event.driver_code_pattern)
        .bind(event.is_active)
        .bind(event.start_date)
        .bind(event.end_date)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(event_not_found(&event.slug));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_active(&self, id: Uuid, active: bool) -> RepoResult<()> {
        let result = sqlx::query("UPDATE events SET is_active = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(active)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EventNotFound(id.to_string()));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM scanner_assignments WHERE event_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EventNotFound(id.to_string()));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
