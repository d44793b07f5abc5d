//! Authentication utilities

mod jwt;
mod pin;

pub use jwt::{Claims, JwtService, TokenPair, TokenType};
pub use pin::{generate_pin, hash_pin, validate_pin_format, verify_pin, PinService};
