//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AssignScannerRequest, CreateEventRequest, CreateScannerRequest, GenerateCodeSpaceRequest,
    RedeemCodeRequest, RefreshTokenRequest, ScannerLoginRequest, UpdateEventRequest,
    UpdateScannerRequest, ValidatePatternRequest,
};

// Re-export commonly used response types
pub use responses::{
    AssignedScannerResponse, CodeSpaceResponse, CreatedScannerResponse, EventResponse,
    EventStatsResponse, EventSummaryResponse, HealthResponse, HourlyCountResponse,
    PatternValidResponse, ReadinessResponse, RecentScanResponse, RedemptionResponse,
    ScannerAuthResponse, ScannerResponse, TokenRefreshResponse,
};

// Re-export mapper helper structs
pub use mappers::EventWithCount;
