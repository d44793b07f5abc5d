//! Scanner entity <-> model mapper

use chrono::{DateTime, Utc};
use gatescan_core::entities::Scanner;

use crate::models::{AssignedScannerModel, ScannerModel};

impl From<ScannerModel> for Scanner {
    fn from(model: ScannerModel) -> Self {
        Scanner {
            id: model.id,
            name: model.name,
            phone_number: model.phone_number,
            email: model.email,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<AssignedScannerModel> for (Scanner, DateTime<Utc>) {
    fn from(model: AssignedScannerModel) -> Self {
        (
            Scanner {
                id: model.id,
                name: model.name,
                phone_number: model.phone_number,
                email: model.email,
                is_active: model.is_active,
                created_at: model.created_at,
                updated_at: model.updated_at,
            },
            model.assigned_at,
        )
    }
}
