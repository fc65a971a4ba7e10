use serde::Serialize;
use sqlx::prelude::FromRow;
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Eq, FromRow, Serialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub event_id: String,
    pub user_email: String,
    pub timestamp: i64,
}

#[derive(Validate, Clone, Debug)]
pub struct AttendInput {
    #[validate(length(min = 1))]
    pub event_id: String,
    #[validate(email)]
    pub user_email: String,
}

/// Event ids in first-seen order; repeated confirmations of the same event
/// collapse to one entry.
pub fn attended_event_ids(records: &[AttendanceRecord]) -> Vec<String> {
    let mut ids: Vec<String> = Vec::with_capacity(records.len());

    for record in records {
        if !ids.contains(&record.event_id) {
            ids.push(record.event_id.to_owned());
        }
    }

    ids
}
