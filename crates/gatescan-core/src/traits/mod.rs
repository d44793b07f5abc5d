//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AssignmentRepository, EventRepository, HourlyCount, InviteRepository, RepoResult,
    ScannerRepository,
};
