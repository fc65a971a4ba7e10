use time::Date;
use udb_event::{Event, EventStore, classify};

use super::Message;
use crate::router::Route;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventListView {
    pub today: Date,
    pub loading: bool,
    pub future: Vec<Event>,
    pub past: Vec<Event>,
    pub share_text: Option<String>,
    pub message: Option<Message>,
    pub navigate: Option<Route>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventListAction {
    Loaded(Vec<Event>),
    LoadFailed(String),
    Open(String),
    Share(Event),
    NotFound(String),
}

impl EventListView {
    pub fn new(today: Date) -> Self {
        Self {
            today,
            loading: true,
            future: Vec::new(),
            past: Vec::new(),
            share_text: None,
            message: None,
            navigate: None,
        }
    }

    pub fn reduce(mut self, action: EventListAction) -> Self {
        match action {
            EventListAction::Loaded(events) => {
                let partition = classify(events, self.today);
                self.future = partition.future;
                self.past = partition.past;
                self.loading = false;
            }
            EventListAction::LoadFailed(reason) => {
                self.loading = false;
                self.message = Some(Message::error(format!("Could not load events: {reason}")));
            }
            EventListAction::Open(id) => {
                self.navigate = Some(Route::event_detail(id));
            }
            EventListAction::Share(event) => {
                self.share_text = Some(event.share_text());
            }
            EventListAction::NotFound(_) => {
                self.share_text = None;
                self.message = Some(Message::error("Event not found."));
            }
        }

        self
    }

    pub async fn fetch(store: &dyn EventStore) -> EventListAction {
        match store.list_events().await {
            Ok(events) => EventListAction::Loaded(events),
            Err(err) => EventListAction::LoadFailed(err.to_string()),
        }
    }

    pub async fn load(self, store: &dyn EventStore) -> Self {
        let action = Self::fetch(store).await;

        self.reduce(action)
    }

    pub fn find(&self, id: &str) -> Option<&Event> {
        self.future
            .iter()
            .chain(self.past.iter())
            .find(|event| event.id == id)
    }
}
