//! Authentication service
//!
//! Handles scanner login against an event and session token refresh.

use tracing::{info, instrument, warn};

use gatescan_common::auth::verify_pin;
use gatescan_common::AppError;
use gatescan_core::DomainError;

use crate::dto::{
    RefreshTokenRequest, ScannerAuthResponse, ScannerLoginRequest, TokenRefreshResponse,
};
use crate::dto::{EventSummaryResponse, ScannerResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Log a scanner in against one event.
    ///
    /// Runs the same gate as a redemption attempt (event active, scanner
    /// active, assignment present) plus the PIN check, then issues a
    /// session token pair.
    #[instrument(skip(self, request), fields(event_slug = %request.event_slug))]
    pub async fn login(&self, request: ScannerLoginRequest) -> ServiceResult<ScannerAuthResponse> {
        let event = self
            .ctx
            .event_repo()
            .find_by_slug(&request.event_slug)
            .await?
            .ok_or_else(|| DomainError::EventNotFound(request.event_slug.clone()))?;

        if !event.is_active {
            return Err(DomainError::EventInactive(request.event_slug.clone()).into());
        }

        // Look the scanner up by whichever contact was presented
        let scanner = match (&request.phone_number, &request.email) {
            (Some(phone), _) => self.ctx.scanner_repo().find_by_phone(phone).await?,
            (None, Some(email)) => self.ctx.scanner_repo().find_by_email(email).await?,
            (None, None) => {
                return Err(ServiceError::validation(
                    "Either phone number or email is required",
                ))
            }
        }
        .ok_or_else(|| {
            warn!("Login failed: scanner not found");
            ServiceError::App(AppError::InvalidCredentials)
        })?;

        if !scanner.is_active {
            warn!(scanner_id = %scanner.id, "Login failed: scanner deactivated");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        if !self
            .ctx
            .assignment_repo()
            .exists(scanner.id, event.id)
            .await?
        {
            return Err(DomainError::NotAuthorizedForEvent.into());
        }

        let pin_hash = self
            .ctx
            .scanner_repo()
            .get_pin_hash(scanner.id)
            .await?
            .ok_or_else(|| {
                warn!(scanner_id = %scanner.id, "Login failed: no PIN hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid =
            verify_pin(&request.pin, &pin_hash).map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(scanner_id = %scanner.id, "Login failed: invalid PIN");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(scanner.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!(scanner_id = %scanner.id, event_id = %event.id, "Scanner logged in");

        Ok(ScannerAuthResponse {
            access_token: token_pair.access_token,
            refresh_token: token_pair.refresh_token,
            token_type: token_pair.token_type,
            expires_in: token_pair.expires_in,
            scanner: ScannerResponse::from(&scanner),
            event: EventSummaryResponse::from(&event),
        })
    }

    /// Exchange a valid refresh token for a new token pair.
    ///
    /// The scanner must still exist and be active; deactivation cuts a
    /// session off at the next refresh.
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(
        &self,
        request: RefreshTokenRequest,
    ) -> ServiceResult<TokenRefreshResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)?;
        let scanner_id = claims.scanner_id()?;

        let scanner = self
            .ctx
            .scanner_repo()
            .find_by_id(scanner_id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        if !scanner.is_active {
            return Err(ServiceError::App(AppError::InvalidToken));
        }

        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(scanner.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(TokenRefreshResponse {
            access_token: token_pair.access_token,
            refresh_token: token_pair.refresh_token,
            token_type: token_pair.token_type,
            expires_in: token_pair.expires_in,
        })
    }
}
