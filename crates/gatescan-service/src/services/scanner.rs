//! Scanner service
//!
//! Handles scanner administration: creation with PIN provisioning, updates,
//! activation, deletion, and event assignment management.

use tracing::{info, instrument};
use uuid::Uuid;

use gatescan_common::auth::{generate_pin, hash_pin, validate_pin_format};
use gatescan_core::entities::Scanner;
use gatescan_core::DomainError;

use crate::dto::{
    AssignScannerRequest, AssignedScannerResponse, CreateScannerRequest, CreatedScannerResponse,
    EventSummaryResponse, ScannerResponse, UpdateScannerRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Scanner service
pub struct ScannerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ScannerService<'a> {
    /// Create a new ScannerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new scanner.
    ///
    /// When no PIN is supplied one is generated and returned exactly once;
    /// only the hash is stored either way. Initial event assignments are
    /// applied for every slug that resolves.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_scanner(
        &self,
        request: CreateScannerRequest,
    ) -> ServiceResult<CreatedScannerResponse> {
        let mut scanner = Scanner::new(request.name);
        scanner.phone_number = request.phone_number;
        scanner.email = request.email;
        scanner.validate_contact()?;

        if let Some(phone) = &scanner.phone_number {
            if self.ctx.scanner_repo().phone_exists(phone).await? {
                return Err(DomainError::PhoneNumberExists.into());
            }
        }
        if let Some(email) = &scanner.email {
            if self.ctx.scanner_repo().email_exists(email).await? {
                return Err(DomainError::EmailExists.into());
            }
        }

        let (pin, generated) = match request.pin {
            Some(pin) => (pin, false),
            None => (generate_pin(), true),
        };
        validate_pin_format(&pin)?;
        let pin_hash = hash_pin(&pin).map_err(|e| ServiceError::internal(e.to_string()))?;

        self.ctx.scanner_repo().create(&scanner, &pin_hash).await?;

        for slug in &request.event_slugs {
            if let Some(event) = self.ctx.event_repo().find_by_slug(slug).await? {
                self.ctx
                    .assignment_repo()
                    .assign(scanner.id, event.id)
                    .await?;
            }
        }

        info!(scanner_id = %scanner.id, "Scanner created");

        Ok(CreatedScannerResponse {
            scanner: ScannerResponse::from(&scanner),
            pin: generated.then_some(pin),
        })
    }

    /// List all scanners
    #[instrument(skip(self))]
    pub async fn list_scanners(&self) -> ServiceResult<Vec<ScannerResponse>> {
        let scanners = self.ctx.scanner_repo().list().await?;
        Ok(scanners.iter().map(ScannerResponse::from).collect())
    }

    /// List the scanners assigned to one event
    #[instrument(skip(self))]
    pub async fn list_scanners_for_event(
        &self,
        event_slug: &str,
    ) -> ServiceResult<Vec<AssignedScannerResponse>> {
        let event = self
            .ctx
            .event_repo()
            .find_by_slug(event_slug)
            .await?
            .ok_or_else(|| DomainError::EventNotFound(event_slug.to_string()))?;

        let scanners = self.ctx.scanner_repo().list_by_event(event.id).await?;
        Ok(scanners
            .into_iter()
            .map(AssignedScannerResponse::from)
            .collect())
    }

    /// Get a scanner by ID
    #[instrument(skip(self))]
    pub async fn get_scanner(&self, id: Uuid) -> ServiceResult<ScannerResponse> {
        let scanner = self.require_scanner(id).await?;
        Ok(ScannerResponse::from(&scanner))
    }

    /// Update a scanner; a new PIN is re-hashed before it is stored
    #[instrument(skip(self, request))]
    pub async fn update_scanner(
        &self,
        id: Uuid,
        request: UpdateScannerRequest,
    ) -> ServiceResult<ScannerResponse> {
        let mut scanner = self.require_scanner(id).await?;

        if let Some(name) = request.name {
            scanner.name = name;
        }
        if let Some(phone_number) = request.phone_number {
            scanner.phone_number = Some(phone_number);
        }
        if let Some(email) = request.email {
            scanner.email = Some(email);
        }
        if let Some(is_active) = request.is_active {
            scanner.is_active = is_active;
        }
        scanner.validate_contact()?;

        self.ctx.scanner_repo().update(&scanner).await?;

        if let Some(pin) = request.pin {
            validate_pin_format(&pin)?;
            let pin_hash = hash_pin(&pin).map_err(|e| ServiceError::internal(e.to_string()))?;
            self.ctx.scanner_repo().update_pin(scanner.id, &pin_hash).await?;
        }

        info!(scanner_id = %scanner.id, "Scanner updated");

        Ok(ScannerResponse::from(&scanner))
    }

    /// Delete a scanner.
    ///
    /// A hard delete is refused while the scanner has redemptions on
    /// record; without `permanent` the scanner is only deactivated.
    #[instrument(skip(self))]
    pub async fn delete_scanner(&self, id: Uuid, permanent: bool) -> ServiceResult<()> {
        let scanner = self.require_scanner(id).await?;

        if !permanent {
            self.ctx.scanner_repo().set_active(scanner.id, false).await?;
            info!(scanner_id = %scanner.id, "Scanner deactivated");
            return Ok(());
        }

        let scan_count = self.ctx.invite_repo().count_by_scanner(scanner.id).await?;
        if scan_count > 0 {
            return Err(DomainError::ScannerHasRedemptions(scan_count).into());
        }

        self.ctx.scanner_repo().delete(scanner.id).await?;

        info!(scanner_id = %scanner.id, "Scanner permanently deleted");

        Ok(())
    }

    /// Assign a scanner to events by slug.
    ///
    /// Unknown slugs are an error; re-assignment is a no-op. Returns the
    /// events now covered by the request.
    #[instrument(skip(self, request))]
    pub async fn assign_to_events(
        &self,
        id: Uuid,
        request: AssignScannerRequest,
    ) -> ServiceResult<Vec<EventSummaryResponse>> {
        let scanner = self.require_scanner(id).await?;

        let mut assigned = Vec::with_capacity(request.event_slugs.len());
        for slug in &request.event_slugs {
            let event = self
                .ctx
                .event_repo()
                .find_by_slug(slug)
                .await?
                .ok_or_else(|| DomainError::EventNotFound(slug.clone()))?;

            self.ctx.assignment_repo().assign(scanner.id, event.id).await?;
            assigned.push(EventSummaryResponse::from(&event));
        }

        info!(scanner_id = %scanner.id, count = assigned.len(), "Scanner assigned to events");

        Ok(assigned)
    }

    /// Remove a scanner's assignment to events by slug
    #[instrument(skip(self, request))]
    pub async fn unassign_from_events(
        &self,
        id: Uuid,
        request: AssignScannerRequest,
    ) -> ServiceResult<()> {
        let scanner = self.require_scanner(id).await?;

        for slug in &request.event_slugs {
            let event = self
                .ctx
                .event_repo()
                .find_by_slug(slug)
                .await?
                .ok_or_else(|| DomainError::EventNotFound(slug.clone()))?;

            self.ctx
                .assignment_repo()
                .unassign(scanner.id, event.id)
                .await?;
        }

        info!(scanner_id = %scanner.id, "Scanner unassigned from events");

        Ok(())
    }

    async fn require_scanner(&self, id: Uuid) -> ServiceResult<Scanner> {
        self.ctx
            .scanner_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::ScannerNotFound(id).into())
    }
}
