//! Assignment entity <-> model mapper

use gatescan_core::entities::ScannerAssignment;

use crate::models::AssignmentModel;

impl From<AssignmentModel> for ScannerAssignment {
    fn from(model: AssignmentModel) -> Self {
        ScannerAssignment {
            scanner_id: model.scanner_id,
            event_id: model.event_id,
            assigned_at: model.assigned_at,
        }
    }
}
