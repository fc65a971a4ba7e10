use serde::{Deserialize, Serialize};

/// Authenticated user context handed to every screen that needs it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub access_id: String,
    pub token: String,
}
