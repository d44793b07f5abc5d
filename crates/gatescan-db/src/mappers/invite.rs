//! Invite entity <-> model mapper

use gatescan_core::entities::Invite;
use gatescan_core::traits::HourlyCount;

use crate::models::{HourlyCountRow, InviteModel};

impl From<InviteModel> for Invite {
    fn from(model: InviteModel) -> Self {
        Invite {
            id: model.id,
            code: model.code,
            event_id: model.event_id,
            scanner_id: model.scanner_id,
            created_at: model.created_at,
        }
    }
}

impl From<HourlyCountRow> for HourlyCount {
    fn from(row: HourlyCountRow) -> Self {
        HourlyCount {
            hour: row.hour,
            count: row.count,
        }
    }
}
