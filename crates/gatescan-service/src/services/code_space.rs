//! Code-space service
//!
//! Thin application wrapper over the core generator and validator, used by
//! the pattern preview and validation endpoints.

use tracing::instrument;

use gatescan_core::code_space;

use crate::dto::{CodeSpaceResponse, GenerateCodeSpaceRequest, PatternValidResponse};

use super::error::{ServiceError, ServiceResult};

/// Code-space service
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeSpaceService;

impl CodeSpaceService {
    /// Create a new CodeSpaceService
    pub fn new() -> Self {
        Self
    }

    /// Generate a pattern for a prefix and participant count
    #[instrument(skip(self))]
    pub fn generate(&self, request: &GenerateCodeSpaceRequest) -> ServiceResult<CodeSpaceResponse> {
        let pattern = code_space::generate_code_space(&request.prefix, request.count)
            .ok_or_else(|| {
                ServiceError::validation("A non-empty prefix and a positive count are required")
            })?;

        Ok(CodeSpaceResponse {
            pattern,
            first_code: code_space::first_code(&request.prefix),
            last_code: code_space::last_code(&request.prefix, request.count),
        })
    }

    /// Validate a candidate pattern string
    #[instrument(skip(self))]
    pub fn validate(&self, pattern: &str) -> ServiceResult<PatternValidResponse> {
        code_space::validate_pattern(pattern)?;

        Ok(PatternValidResponse {
            pattern: pattern.to_string(),
            valid: true,
        })
    }
}
