use time::{Date, Duration};
use udb_event::{CreateInput, Event, EventStore};

use super::Message;
use crate::router::Route;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateEventView {
    pub title: String,
    pub date: Option<Date>,
    pub location: String,
    /// Earliest date the picker offers
    pub min_date: Date,
    pub saving: bool,
    pub message: Option<Message>,
    pub navigate: Option<Route>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CreateEventAction {
    TitleChanged(String),
    DatePicked(Date),
    DateEntered(String),
    LocationChanged(String),
    Submit,
    Saved(Event),
    SaveFailed(String),
}

impl CreateEventView {
    pub fn new(today: Date) -> Self {
        Self {
            title: String::new(),
            date: None,
            location: String::new(),
            min_date: today.saturating_add(Duration::days(1)),
            saving: false,
            message: None,
            navigate: None,
        }
    }

    pub fn reduce(mut self, action: CreateEventAction) -> Self {
        match action {
            CreateEventAction::TitleChanged(title) => self.title = title,
            CreateEventAction::LocationChanged(location) => self.location = location,
            CreateEventAction::DatePicked(date) => {
                if date < self.min_date {
                    self.message = Some(Message::error(format!(
                        "Pick a date from {} onwards.",
                        udb_shared::format_date(self.min_date)
                    )));
                } else {
                    self.date = Some(date);
                    self.message = None;
                }
            }
            CreateEventAction::DateEntered(text) => match udb_shared::parse_date(text.trim()) {
                Some(date) => return self.reduce(CreateEventAction::DatePicked(date)),
                None => {
                    self.message = Some(Message::error("Enter the date as YYYY-MM-DD."));
                }
            },
            CreateEventAction::Submit => {
                if self.input().is_none() {
                    self.message = Some(Message::error("Please fill in all fields."));
                } else {
                    self.saving = true;
                    self.message = None;
                }
            }
            CreateEventAction::Saved(_) => {
                self.saving = false;
                self.title.clear();
                self.date = None;
                self.location.clear();
                self.message = Some(Message::info("Event created."));
                self.navigate = Some(Route::Home);
            }
            CreateEventAction::SaveFailed(_) => {
                self.saving = false;
                self.message = Some(Message::error("Could not save the event."));
            }
        }

        self
    }

    /// Store input for a complete form.
    pub fn input(&self) -> Option<CreateInput> {
        let date = self.date?;
        if self.title.trim().is_empty() || self.location.trim().is_empty() {
            return None;
        }

        Some(CreateInput {
            title: self.title.trim().to_owned(),
            date: udb_shared::format_date(date),
            location: self.location.trim().to_owned(),
        })
    }

    pub async fn save(store: &dyn EventStore, input: CreateInput) -> CreateEventAction {
        match store.create_event(input).await {
            Ok(event) => CreateEventAction::Saved(event),
            Err(err) => CreateEventAction::SaveFailed(err.to_string()),
        }
    }

    pub async fn submit(self, store: &dyn EventStore) -> Self {
        let view = self.reduce(CreateEventAction::Submit);
        let Some(input) = view.input().filter(|_| view.saving) else {
            return view;
        };

        let action = Self::save(store, input).await;

        view.reduce(action)
    }
}
