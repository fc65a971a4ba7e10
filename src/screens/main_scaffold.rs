use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use crate::router::Route;

#[derive(Display, AsRefStr, EnumIter, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Home,
    CreateEvent,
    History,
    Profile,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Events",
            Self::CreateEvent => "Create",
            Self::History => "History",
            Self::Profile => "Profile",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Self::Home => Route::Home,
            Self::CreateEvent => Route::CreateEvent,
            Self::History => Route::History,
            Self::Profile => Route::Profile,
        }
    }

    pub fn from_route(route: &Route) -> Option<Self> {
        Self::iter().find(|tab| &tab.route() == route)
    }

    pub fn all() -> impl Iterator<Item = Tab> {
        Self::iter()
    }
}

/// Bottom navigation hosting the four main tabs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MainScaffold {
    pub selected: Tab,
    pub navigate: Option<Route>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MainAction {
    Select(Tab),
}

impl MainScaffold {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(mut self, action: MainAction) -> Self {
        match action {
            MainAction::Select(tab) if tab == self.selected => {}
            MainAction::Select(tab) => {
                self.selected = tab;
                self.navigate = Some(tab.route());
            }
        }

        self
    }
}
