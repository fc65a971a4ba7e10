use time::Date;
use udb_event::{Event, EventStore, FeedbackSummary, Timing, aggregate, attended_event_ids};
use udb_shared::Session;

use super::Message;

/// A past event the user attended, with its reviews.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub event: Event,
    pub summary: FeedbackSummary,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EventHistoryView {
    pub session: Option<Session>,
    pub today: Date,
    pub loading: bool,
    pub entries: Vec<HistoryEntry>,
    pub message: Option<Message>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum EventHistoryAction {
    Loaded(Vec<HistoryEntry>),
    LoadFailed(String),
}

impl EventHistoryView {
    pub fn new(session: Option<Session>, today: Date) -> Self {
        let message = session
            .is_none()
            .then(|| Message::error("No authenticated user."));

        Self {
            loading: session.is_some(),
            session,
            today,
            entries: Vec::new(),
            message,
        }
    }

    pub fn reduce(mut self, action: EventHistoryAction) -> Self {
        match action {
            EventHistoryAction::Loaded(entries) => {
                self.loading = false;
                self.message = entries
                    .is_empty()
                    .then(|| Message::info("No events in history."));
                self.entries = entries;
            }
            EventHistoryAction::LoadFailed(reason) => {
                self.loading = false;
                self.message = Some(Message::error(format!(
                    "Could not load history: {reason}"
                )));
            }
        }

        self
    }

    /// Attendance by email, then each distinct event in first-seen order,
    /// keeping the past ones, then their reviews.
    pub async fn fetch(store: &dyn EventStore, email: &str, today: Date) -> EventHistoryAction {
        match history(store, email, today).await {
            Ok(entries) => EventHistoryAction::Loaded(entries),
            Err(err) => EventHistoryAction::LoadFailed(err.to_string()),
        }
    }

    pub async fn load(self, store: &dyn EventStore) -> Self {
        let Some(email) = self.session.as_ref().map(|s| s.email.to_owned()) else {
            return self;
        };

        let action = Self::fetch(store, &email, self.today).await;

        self.reduce(action)
    }
}

async fn history(
    store: &dyn EventStore,
    email: &str,
    today: Date,
) -> udb_shared::Result<Vec<HistoryEntry>> {
    let attendance = store.attendance_by_email(email).await?;
    let mut entries = Vec::new();

    for event_id in attended_event_ids(&attendance) {
        let Some(event) = store.find_event(&event_id).await? else {
            continue;
        };

        if Timing::of(&event, today) != Timing::Past {
            continue;
        }

        let feedback = store.feedback_by_event(&event.id).await?;

        entries.push(HistoryEntry {
            summary: aggregate(&feedback),
            event,
        });
    }

    Ok(entries)
}
