mod event_attendance_create_table;
mod event_feedback_create_table;
mod events_create_table;

use sqlx_migrator::vec_box;

pub struct M0001;

sqlx_migrator::sqlite_migration!(
    M0001,
    "udb",
    "m0001_events",
    vec_box![],
    vec_box![
        events_create_table::Operation,
        event_attendance_create_table::Operation,
        event_feedback_create_table::Operation
    ]
);
