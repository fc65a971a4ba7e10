mod attendance;
mod classify;
mod event;
mod feedback;
pub(crate) mod repository;
mod store;

pub use attendance::*;
pub use classify::*;
pub use event::*;
pub use feedback::*;
pub use store::*;
