pub mod cli;
pub mod config;
pub mod db;
pub mod email;
pub mod observability;
pub mod router;
pub mod screens;
pub mod session;

pub use cli::{App, Cli, Commands};
pub use router::{Route, RouteName, RouteParams, build_route, resolve_route};
