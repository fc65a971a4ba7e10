mod auth;
mod identity;
mod mailer;
pub(crate) mod repository;
mod root;
pub mod token;

pub use auth::*;
pub use identity::*;
pub use mailer::*;
pub use root::*;
