mod password_reset_create_table;
mod user_create_table;
mod user_identity_create_table;
mod user_session_create_table;

use sqlx_migrator::vec_box;

pub struct M0002;

sqlx_migrator::sqlite_migration!(
    M0002,
    "udb",
    "m0002_users",
    vec_box![],
    vec_box![
        user_create_table::Operation,
        user_identity_create_table::Operation,
        user_session_create_table::Operation,
        password_reset_create_table::Operation
    ]
);
