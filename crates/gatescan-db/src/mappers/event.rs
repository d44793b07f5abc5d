//! Event entity <-> model mapper

use gatescan_core::entities::Event;

use crate::models::EventModel;

impl From<EventModel> for Event {
    fn from(model: EventModel) -> Self {
        Event {
            id: model.id,
            name: model.name,
            slug: model.slug,
            description: model.description,
            code_prefix: model.code_prefix,
            attendant_code_pattern: model.attendant_code_pattern,
            driver_code_pattern: model.driver_code_pattern,
            is_active: model.is_active,
            start_date: model.start_date,
            end_date: model.end_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
