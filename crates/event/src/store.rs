use std::ops::Deref;

use async_trait::async_trait;
use ulid::Ulid;
use validator::Validate;

use crate::{
    AttendInput, AttendanceRecord, CreateInput, Event, FeedbackInput, FeedbackRecord, repository,
};

/// Document store collaborator: the three event collections and the access
/// patterns the screens rely on.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn create_event(&self, input: CreateInput) -> udb_shared::Result<Event>;

    async fn list_events(&self) -> udb_shared::Result<Vec<Event>>;

    async fn find_event(&self, id: &str) -> udb_shared::Result<Option<Event>>;

    async fn attend(&self, input: AttendInput) -> udb_shared::Result<AttendanceRecord>;

    async fn attendance_by_email(&self, email: &str)
    -> udb_shared::Result<Vec<AttendanceRecord>>;

    async fn submit_feedback(&self, input: FeedbackInput) -> udb_shared::Result<FeedbackRecord>;

    async fn feedback_by_event(&self, event_id: &str) -> udb_shared::Result<Vec<FeedbackRecord>>;
}

/// SQLite backed [`EventStore`].
#[derive(Clone)]
pub struct Store {
    state: udb_shared::State,
}

impl Deref for Store {
    type Target = udb_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Store {
    pub fn new(state: udb_shared::State) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EventStore for Store {
    #[tracing::instrument(skip(self, input), fields(title = %input.title, date = %input.date))]
    async fn create_event(&self, input: CreateInput) -> udb_shared::Result<Event> {
        input.validate()?;

        let event = Event {
            id: Ulid::new().to_string(),
            title: input.title.trim().to_owned(),
            date: input.date,
            location: input.location.trim().to_owned(),
        };

        repository::insert_event(&self.write_db, &event, udb_shared::now_timestamp()).await?;

        tracing::info!(event_id = %event.id, "event created");

        Ok(event)
    }

    async fn list_events(&self) -> udb_shared::Result<Vec<Event>> {
        repository::all_events(&self.read_db).await
    }

    async fn find_event(&self, id: &str) -> udb_shared::Result<Option<Event>> {
        repository::find_event(&self.read_db, id).await
    }

    #[tracing::instrument(skip(self, input), fields(event_id = %input.event_id))]
    async fn attend(&self, input: AttendInput) -> udb_shared::Result<AttendanceRecord> {
        input.validate()?;

        let record = AttendanceRecord {
            id: Ulid::new().to_string(),
            event_id: input.event_id,
            user_email: input.user_email,
            timestamp: udb_shared::now_timestamp(),
        };

        repository::insert_attendance(&self.write_db, &record).await?;

        tracing::info!(attendance_id = %record.id, "attendance recorded");

        Ok(record)
    }

    async fn attendance_by_email(
        &self,
        email: &str,
    ) -> udb_shared::Result<Vec<AttendanceRecord>> {
        repository::attendance_by_email(&self.read_db, email).await
    }

    #[tracing::instrument(skip(self, input), fields(event_id = %input.event_id, rating = input.rating))]
    async fn submit_feedback(&self, input: FeedbackInput) -> udb_shared::Result<FeedbackRecord> {
        input.validate()?;

        let record = FeedbackRecord {
            id: Ulid::new().to_string(),
            event_id: input.event_id,
            user_email: input.user_email,
            rating: input.rating,
            comment: input.comment,
            timestamp: udb_shared::now_timestamp(),
        };

        repository::insert_feedback(&self.write_db, &record).await?;

        tracing::info!(feedback_id = %record.id, "feedback recorded");

        Ok(record)
    }

    async fn feedback_by_event(&self, event_id: &str) -> udb_shared::Result<Vec<FeedbackRecord>> {
        repository::feedback_by_event(&self.read_db, event_id).await
    }
}
