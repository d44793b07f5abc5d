//! Service context - dependency container for services
//!
//! Holds all repositories and other dependencies needed by services.

use std::sync::Arc;

use gatescan_common::auth::JwtService;
use gatescan_core::traits::{
    AssignmentRepository, EventRepository, InviteRepository, ScannerRepository,
};
use gatescan_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for scanner session tokens
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    event_repo: Arc<dyn EventRepository>,
    scanner_repo: Arc<dyn ScannerRepository>,
    assignment_repo: Arc<dyn AssignmentRepository>,
    invite_repo: Arc<dyn InviteRepository>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        event_repo: Arc<dyn EventRepository>,
        scanner_repo: Arc<dyn ScannerRepository>,
        assignment_repo: Arc<dyn AssignmentRepository>,
        invite_repo: Arc<dyn InviteRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            event_repo,
            scanner_repo,
            assignment_repo,
            invite_repo,
            jwt_service,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the event repository
    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    /// Get the scanner repository
    pub fn scanner_repo(&self) -> &dyn ScannerRepository {
        self.scanner_repo.as_ref()
    }

    /// Get the assignment repository
    pub fn assignment_repo(&self) -> &dyn AssignmentRepository {
        self.assignment_repo.as_ref()
    }

    /// Get the invite repository (redemption ledger)
    pub fn invite_repo(&self) -> &dyn InviteRepository {
        self.invite_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    event_repo: Option<Arc<dyn EventRepository>>,
    scanner_repo: Option<Arc<dyn ScannerRepository>>,
    assignment_repo: Option<Arc<dyn AssignmentRepository>>,
    invite_repo: Option<Arc<dyn InviteRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            event_repo: None,
            scanner_repo: None,
            assignment_repo: None,
            invite_repo: None,
            jwt_service: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn scanner_repo(mut self, repo: Arc<dyn ScannerRepository>) -> Self {
        self.scanner_repo = Some(repo);
        self
    }

    pub fn assignment_repo(mut self, repo: Arc<dyn AssignmentRepository>) -> Self {
        self.assignment_repo = Some(repo);
        self
    }

    pub fn invite_repo(mut self, repo: Arc<dyn InviteRepository>) -> Self {
        self.invite_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.event_repo
                .ok_or_else(|| super::error::ServiceError::validation("event_repo is required"))?,
            self.scanner_repo
                .ok_or_else(|| super::error::ServiceError::validation("scanner_repo is required"))?,
            self.assignment_repo
                .ok_or_else(|| super::error::ServiceError::validation("assignment_repo is required"))?,
            self.invite_repo
                .ok_or_else(|| super::error::ServiceError::validation("invite_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| super::error::ServiceError::validation("jwt_service is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
