//! Static route table plus path building and resolution.

use std::{fmt, str::FromStr};

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};
use udb_shared::{Error, Result};

#[derive(Display, EnumString, AsRefStr, EnumIter, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[strum(serialize_all = "kebab-case")]
pub enum RouteName {
    Login,
    Register,
    Main,
    Home,
    CreateEvent,
    History,
    Profile,
    EventDetail,
}

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteParam {
    #[strum(serialize = "eventId")]
    EventId,
}

impl RouteName {
    pub fn required_params(&self) -> &'static [RouteParam] {
        match self {
            Self::EventDetail => &[RouteParam::EventId],
            _ => &[],
        }
    }

    pub fn all() -> impl Iterator<Item = RouteName> {
        Self::iter()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams {
    pub event_id: Option<String>,
}

impl RouteParams {
    pub fn event(id: impl Into<String>) -> Self {
        Self {
            event_id: Some(id.into()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Main,
    Home,
    CreateEvent,
    History,
    Profile,
    EventDetail { event_id: String },
}

impl Route {
    pub fn name(&self) -> RouteName {
        match self {
            Self::Login => RouteName::Login,
            Self::Register => RouteName::Register,
            Self::Main => RouteName::Main,
            Self::Home => RouteName::Home,
            Self::CreateEvent => RouteName::CreateEvent,
            Self::History => RouteName::History,
            Self::Profile => RouteName::Profile,
            Self::EventDetail { .. } => RouteName::EventDetail,
        }
    }

    pub fn event_detail(event_id: impl Into<String>) -> Self {
        Self::EventDetail {
            event_id: event_id.into(),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::EventDetail { event_id } => {
                format!("{}/{}", RouteName::EventDetail, urlencoding::encode(event_id))
            }
            route => route.name().to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        resolve_route(s)
    }
}

fn malformed(msg: impl Into<String>) -> Error {
    Error::MalformedRoute(msg.into())
}

/// Builds the path for a named route, checking its required parameters.
pub fn build_route(name: &str, params: &RouteParams) -> Result<String> {
    let name = RouteName::from_str(name).map_err(|_| malformed(format!("unknown route {name}")))?;

    let route = match name {
        RouteName::Login => Route::Login,
        RouteName::Register => Route::Register,
        RouteName::Main => Route::Main,
        RouteName::Home => Route::Home,
        RouteName::CreateEvent => Route::CreateEvent,
        RouteName::History => Route::History,
        RouteName::Profile => Route::Profile,
        RouteName::EventDetail => match params.event_id.as_deref() {
            Some(id) if !id.is_empty() => Route::event_detail(id),
            _ => return Err(malformed(format!("{name} requires {}", RouteParam::EventId))),
        },
    };

    Ok(route.path())
}

/// Maps a path back to its route, decoding the event id.
pub fn resolve_route(path: &str) -> Result<Route> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let (head, rest) = match path.split_once('/') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    };

    let name = RouteName::from_str(head).map_err(|_| malformed(format!("unknown route {head}")))?;

    match (name, rest) {
        (RouteName::EventDetail, Some(raw_id)) => {
            if raw_id.is_empty() || raw_id.contains('/') {
                return Err(malformed(path));
            }

            let event_id = urlencoding::decode(raw_id).map_err(|_| malformed(path))?;

            if event_id.is_empty() {
                return Err(malformed(path));
            }

            Ok(Route::event_detail(event_id.into_owned()))
        }
        (RouteName::EventDetail, None) => Err(malformed(format!(
            "{name} requires {}",
            RouteParam::EventId
        ))),
        (_, Some(_)) => Err(malformed(path)),
        (RouteName::Login, None) => Ok(Route::Login),
        (RouteName::Register, None) => Ok(Route::Register),
        (RouteName::Main, None) => Ok(Route::Main),
        (RouteName::Home, None) => Ok(Route::Home),
        (RouteName::CreateEvent, None) => Ok(Route::CreateEvent),
        (RouteName::History, None) => Ok(Route::History),
        (RouteName::Profile, None) => Ok(Route::Profile),
    }
}
