//! PIN hashing and verification utilities
//!
//! Uses Argon2id for secure PIN hashing (OWASP recommended). PINs are the
//! only credential a scanner device carries.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;

use crate::error::AppError;

/// Number of digits in a generated PIN
const GENERATED_PIN_LEN: usize = 6;

/// Hash a PIN using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_pin(pin: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(pin.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PIN hashing failed: {e}")))
}

/// Verify a PIN against a hash
///
/// # Errors
/// Returns an error if the hash is invalid
pub fn verify_pin(pin: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid PIN hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(pin.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Generate a random numeric PIN
pub fn generate_pin() -> String {
    let mut rng = rand::thread_rng();
    (0..GENERATED_PIN_LEN)
        .map(|_| char::from(b'0' + rng.gen_range(0..10)))
        .collect()
}

/// Validate PIN format
///
/// A PIN must be 4-8 ASCII digits.
///
/// # Errors
/// Returns a validation error if the PIN doesn't meet the format
pub fn validate_pin_format(pin: &str) -> Result<(), AppError> {
    if pin.len() < 4 || pin.len() > 8 {
        return Err(AppError::Validation(
            "PIN must be 4-8 digits long".to_string(),
        ));
    }

    if !pin.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "PIN must contain only digits".to_string(),
        ));
    }

    Ok(())
}

/// PIN service for dependency injection
#[derive(Debug, Clone, Default)]
pub struct PinService;

impl PinService {
    /// Create a new PIN service
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Hash a PIN
    ///
    /// # Errors
    /// Returns an error if hashing fails
    pub fn hash(&self, pin: &str) -> Result<String, AppError> {
        hash_pin(pin)
    }

    /// Verify a PIN against a hash
    ///
    /// # Errors
    /// Returns an error if verification fails
    pub fn verify(&self, pin: &str, hash: &str) -> Result<bool, AppError> {
        verify_pin(pin, hash)
    }

    /// Verify a PIN and return an error if invalid
    ///
    /// # Errors
    /// Returns `AppError::InvalidCredentials` if the PIN doesn't match
    pub fn verify_or_error(&self, pin: &str, hash: &str) -> Result<(), AppError> {
        if self.verify(pin, hash)? {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_pin() {
        let pin = "123456";
        let hash = hash_pin(pin).unwrap();

        // Hash should start with argon2 identifier
        assert!(hash.starts_with("$argon2"));
        // Hash should be different each time (different salt)
        let hash2 = hash_pin(pin).unwrap();
        assert_ne!(hash, hash2);
    }

    #[test]
    fn test_verify_pin_success() {
        let pin = "123456";
        let hash = hash_pin(pin).unwrap();

        assert!(verify_pin(pin, &hash).unwrap());
    }

    #[test]
    fn test_verify_pin_failure() {
        let hash = hash_pin("123456").unwrap();
        assert!(!verify_pin("654321", &hash).unwrap());
    }

    #[test]
    fn test_generate_pin() {
        let pin = generate_pin();
        assert_eq!(pin.len(), GENERATED_PIN_LEN);
        assert!(pin.chars().all(|c| c.is_ascii_digit()));
        assert!(validate_pin_format(&pin).is_ok());
    }

    #[test]
    fn test_pin_service() {
        let service = PinService::new();
        let pin = "4321";

        let hash = service.hash(pin).unwrap();
        assert!(service.verify(pin, &hash).unwrap());
        assert!(!service.verify("1234", &hash).unwrap());
    }

    #[test]
    fn test_verify_or_error_failure() {
        let service = PinService::new();
        let hash = service.hash("4321").unwrap();

        let result = service.verify_or_error("1111", &hash);
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[test]
    fn test_validate_pin_format_valid() {
        assert!(validate_pin_format("1234").is_ok());
        assert!(validate_pin_format("12345678").is_ok());
    }

    #[test]
    fn test_validate_pin_format_too_short() {
        let result = validate_pin_format("123");
        assert!(result.is_err());
        if let Err(AppError::Validation(msg)) = result {
            assert!(msg.contains("4-8 digits"));
        }
    }

    #[test]
    fn test_validate_pin_format_non_digits() {
        let result = validate_pin_format("12a4");
        assert!(result.is_err());
        if let Err(AppError::Validation(msg)) = result {
            assert!(msg.contains("only digits"));
        }
    }
}
