//! Event service
//!
//! Handles event configuration: creation, updates, activation, deletion,
//! and statistics. Every write carrying a pattern goes through the
//! code-space validator first.

use chrono::{Duration, Utc};
use tracing::{info, instrument};

use gatescan_core::entities::Event;
use gatescan_core::{code_space, DomainError};

use crate::dto::mappers::EventWithCount;
use crate::dto::{
    CreateEventRequest, EventResponse, EventStatsResponse, HourlyCountResponse,
    RecentScanResponse, UpdateEventRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Number of recent redemptions reported in statistics
const RECENT_SCAN_LIMIT: i64 = 10;

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new event.
    ///
    /// Patterns may be given explicitly or derived from expected counts;
    /// either way they must compile before anything is persisted.
    #[instrument(skip(self, request), fields(slug = %request.slug))]
    pub async fn create_event(&self, request: CreateEventRequest) -> ServiceResult<EventResponse> {
        if self.ctx.event_repo().slug_exists(&request.slug).await? {
            return Err(DomainError::SlugExists(request.slug).into());
        }

        let attendant_pattern = request
            .attendant_code_pattern
            .or_else(|| {
                request
                    .expected_attendants
                    .and_then(|count| code_space::generate_code_space(&request.code_prefix, count))
            })
            .ok_or_else(|| {
                ServiceError::validation(
                    "Either attendant_code_pattern or expected_attendants is required",
                )
            })?;

        let driver_pattern = request.driver_code_pattern.or_else(|| {
            request
                .expected_drivers
                .and_then(|count| code_space::generate_code_space(&request.code_prefix, count))
        });

        let mut event = Event::new(
            request.name,
            request.slug,
            request.code_prefix,
            attendant_pattern,
        )
        .with_schedule(request.start_date, request.end_date);
        event.description = request.description;
        event.driver_code_pattern = driver_pattern;

        // Gate the write on compilable patterns
        event.validate_patterns()?;

        self.ctx.event_repo().create(&event).await?;

        info!(event_id = %event.id, slug = %event.slug, "Event created");

        Ok(EventResponse::from(EventWithCount {
            event,
            total_scanned: 0,
        }))
    }

    /// List events, each with its redemption count
    #[instrument(skip(self))]
    pub async fn list_events(&self, active_only: bool) -> ServiceResult<Vec<EventResponse>> {
        let events = self.ctx.event_repo().list(active_only).await?;

        let mut responses = Vec::with_capacity(events.len());
        for event in events {
            let total_scanned = self.ctx.invite_repo().count_by_event(event.id).await?;
            responses.push(EventResponse::from(EventWithCount {
                event,
                total_scanned,
            }));
        }

        Ok(responses)
    }

    /// Get a single event by slug
    #[instrument(skip(self))]
    pub async fn get_event(&self, slug: &str) -> ServiceResult<EventResponse> {
        let event = self.require_event(slug).await?;
        let total_scanned = self.ctx.invite_repo().count_by_event(event.id).await?;

        Ok(EventResponse::from(EventWithCount {
            event,
            total_scanned,
        }))
    }

    /// Update an event (the slug is immutable).
    ///
    /// Pattern changes are validated before the write, both fields at once
    /// so a broken driver pattern can't ride in next to a good attendant
    /// one.
    #[instrument(skip(self, request))]
    pub async fn update_event(
        &self,
        slug: &str,
        request: UpdateEventRequest,
    ) -> ServiceResult<EventResponse> {
        let mut event = self.require_event(slug).await?;

        if let Some(name) = request.name {
            event.name = name;
        }
        if let Some(description) = request.description {
            event.description = Some(description);
        }
        if let Some(code_prefix) = request.code_prefix {
            event.code_prefix = code_prefix;
        }
        if let Some(pattern) = request.attendant_code_pattern {
            event.attendant_code_pattern = pattern;
        }
        if let Some(pattern) = request.driver_code_pattern {
            event.driver_code_pattern = Some(pattern);
        }
        if let Some(is_active) = request.is_active {
            event.is_active = is_active;
        }
        if let Some(start_date) = request.start_date {
            event.start_date = Some(start_date);
        }
        if let Some(end_date) = request.end_date {
            event.end_date = Some(end_date);
        }

        event.validate_patterns()?;

        self.ctx.event_repo().update(&event).await?;

        info!(event_id = %event.id, slug = %event.slug, "Event updated");

        let total_scanned = self.ctx.invite_repo().count_by_event(event.id).await?;
        Ok(EventResponse::from(EventWithCount {
            event,
            total_scanned,
        }))
    }

    /// Deactivate an event (soft delete)
    #[instrument(skip(self))]
    pub async fn deactivate_event(&self, slug: &str) -> ServiceResult<()> {
        let event = self.require_event(slug).await?;
        self.ctx.event_repo().set_active(event.id, false).await?;

        info!(event_id = %event.id, slug = %slug, "Event deactivated");

        Ok(())
    }

    /// Delete an event.
    ///
    /// A hard delete is refused while any redemptions are on record;
    /// otherwise the event goes away together with its assignment rows.
    /// Without `permanent` the event is only deactivated.
    #[instrument(skip(self))]
    pub async fn delete_event(&self, slug: &str, permanent: bool) -> ServiceResult<()> {
        if !permanent {
            return self.deactivate_event(slug).await;
        }

        let event = self.require_event(slug).await?;

        let total_scanned = self.ctx.invite_repo().count_by_event(event.id).await?;
        if total_scanned > 0 {
            return Err(DomainError::EventHasRedemptions(total_scanned).into());
        }

        self.ctx.event_repo().delete(event.id).await?;

        info!(event_id = %event.id, slug = %slug, "Event permanently deleted");

        Ok(())
    }

    /// Event statistics: total, recent redemptions, and hourly buckets for
    /// the trailing 24 hours
    #[instrument(skip(self))]
    pub async fn event_stats(&self, slug: &str) -> ServiceResult<EventStatsResponse> {
        let event = self.require_event(slug).await?;

        let total_scanned = self.ctx.invite_repo().count_by_event(event.id).await?;
        let recent = self
            .ctx
            .invite_repo()
            .recent_by_event(event.id, RECENT_SCAN_LIMIT)
            .await?;
        let since = Utc::now() - Duration::hours(24);
        let hourly = self.ctx.invite_repo().counts_by_hour(event.id, since).await?;

        Ok(EventStatsResponse {
            total_scanned,
            recent_scans: recent.iter().map(RecentScanResponse::from).collect(),
            scans_by_hour: hourly.into_iter().map(HourlyCountResponse::from).collect(),
        })
    }

    async fn require_event(&self, slug: &str) -> ServiceResult<Event> {
        self.ctx
            .event_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::EventNotFound(slug.to_string()).into())
    }
}
