//! # gatescan-core
//!
//! Domain layer containing entities, the code-space module, repository traits,
//! and domain errors. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod code_space;
pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use code_space::{generate_code_space, validate_pattern, RANGE_FLOOR};
pub use entities::{Event, Invite, Scanner, ScannerAssignment};
pub use error::DomainError;
pub use traits::{
    AssignmentRepository, EventRepository, HourlyCount, InviteRepository, RepoResult,
    ScannerRepository,
};
