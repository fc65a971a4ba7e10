use time::Date;
use udb_event::{
    AttendInput, Event, EventStore, FeedbackInput, FeedbackRecord, FeedbackSummary, MAX_RATING,
    Timing, aggregate,
};
use udb_shared::{ErrorKind, Session};

use super::Message;
use crate::router::Route;

#[derive(Clone, Debug, PartialEq)]
pub struct EventDetailView {
    pub event_id: String,
    pub session: Option<Session>,
    pub today: Date,
    pub loading: bool,
    pub event: Option<Event>,
    pub not_found: bool,
    /// Slider value in whole steps between 0 and 5
    pub rating: f64,
    pub comment: String,
    pub feedback: Vec<FeedbackRecord>,
    pub busy: bool,
    pub message: Option<Message>,
    pub navigate: Option<Route>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum EventDetailAction {
    Loaded(Option<Event>),
    LoadFailed(String),
    FeedbackLoaded(Vec<FeedbackRecord>),
    FeedbackFailed(String),
    Attend,
    Attended,
    AttendFailed(String),
    RatingChanged(f64),
    CommentChanged(String),
    SubmitReview,
    ReviewSent(FeedbackRecord),
    ReviewFailed(String),
    MoreEvents,
}

impl EventDetailView {
    pub fn new(event_id: impl Into<String>, session: Option<Session>, today: Date) -> Self {
        Self {
            event_id: event_id.into(),
            session,
            today,
            loading: true,
            event: None,
            not_found: false,
            rating: 0.0,
            comment: String::new(),
            feedback: Vec::new(),
            busy: false,
            message: None,
            navigate: None,
        }
    }

    pub fn timing(&self) -> Option<Timing> {
        self.event
            .as_ref()
            .map(|event| Timing::of(event, self.today))
    }

    /// Reviews are only offered once the event has taken place.
    pub fn can_review(&self) -> bool {
        self.timing() == Some(Timing::Past)
    }

    pub fn summary(&self) -> Option<FeedbackSummary> {
        self.can_review().then(|| aggregate(&self.feedback))
    }

    pub fn reduce(mut self, action: EventDetailAction) -> Self {
        match action {
            EventDetailAction::Loaded(Some(event)) => {
                self.loading = false;
                self.event = Some(event);
            }
            EventDetailAction::Loaded(None) => {
                self.loading = false;
                self.not_found = true;
                self.message = Some(Message::error("Event not found."));
            }
            EventDetailAction::LoadFailed(_) => {
                self.loading = false;
                self.message = Some(Message::error("Could not load the event."));
            }
            EventDetailAction::FeedbackLoaded(feedback) => self.feedback = feedback,
            EventDetailAction::FeedbackFailed(reason) => {
                self.message = Some(Message::error(format!("Could not load reviews: {reason}")));
            }
            EventDetailAction::Attend => {
                if self.session.is_none() {
                    self.message = Some(Message::error(
                        "You must sign in to confirm attendance.",
                    ));
                } else {
                    self.busy = true;
                    self.message = None;
                }
            }
            EventDetailAction::Attended => {
                self.busy = false;
                self.message = Some(Message::info("Your attendance has been recorded!"));
            }
            EventDetailAction::AttendFailed(_) => {
                self.busy = false;
                self.message = Some(Message::error("Could not record attendance."));
            }
            EventDetailAction::RatingChanged(value) => {
                self.rating = if value.is_finite() {
                    value.clamp(0.0, MAX_RATING).round()
                } else {
                    0.0
                };
            }
            EventDetailAction::CommentChanged(comment) => self.comment = comment,
            EventDetailAction::SubmitReview => {
                if !self.can_review() {
                    self.message = Some(Message::error("Only past events can be reviewed."));
                } else if self.session.is_none() || self.rating <= 0.0 {
                    self.message = Some(Message::error("Enter a valid rating."));
                } else {
                    self.busy = true;
                    self.message = None;
                }
            }
            EventDetailAction::ReviewSent(record) => {
                self.busy = false;
                self.feedback.push(record);
                self.rating = 0.0;
                self.comment.clear();
                self.message = Some(Message::info("Review sent!"));
            }
            EventDetailAction::ReviewFailed(_) => {
                self.busy = false;
                self.message = Some(Message::error("Could not send the review."));
            }
            EventDetailAction::MoreEvents => self.navigate = Some(Route::Home),
        }

        self
    }

    /// Email to record against when an accepted action is pending.
    fn pending_email(&self) -> Option<String> {
        if !self.busy {
            return None;
        }

        self.session.as_ref().map(|session| session.email.to_owned())
    }

    pub async fn fetch(store: &dyn EventStore, event_id: &str) -> EventDetailAction {
        match store.find_event(event_id).await {
            Ok(event) => EventDetailAction::Loaded(event),
            Err(err) if err.kind() == ErrorKind::NotFound => EventDetailAction::Loaded(None),
            Err(err) => EventDetailAction::LoadFailed(err.to_string()),
        }
    }

    pub async fn fetch_feedback(store: &dyn EventStore, event_id: &str) -> EventDetailAction {
        match store.feedback_by_event(event_id).await {
            Ok(feedback) => EventDetailAction::FeedbackLoaded(feedback),
            Err(err) => EventDetailAction::FeedbackFailed(err.to_string()),
        }
    }

    /// Loads the event, then its reviews when it is already past.
    pub async fn load(self, store: &dyn EventStore) -> Self {
        let action = Self::fetch(store, &self.event_id).await;
        let view = self.reduce(action);

        if !view.can_review() {
            return view;
        }

        let action = Self::fetch_feedback(store, &view.event_id).await;
        view.reduce(action)
    }

    pub async fn attend(self, store: &dyn EventStore) -> Self {
        let view = self.reduce(EventDetailAction::Attend);
        let Some(user_email) = view.pending_email() else {
            return view;
        };

        let input = AttendInput {
            event_id: view.event_id.to_owned(),
            user_email,
        };

        let action = match store.attend(input).await {
            Ok(_) => EventDetailAction::Attended,
            Err(err) => EventDetailAction::AttendFailed(err.to_string()),
        };

        view.reduce(action)
    }

    pub async fn submit_review(self, store: &dyn EventStore) -> Self {
        let view = self.reduce(EventDetailAction::SubmitReview);
        let Some(user_email) = view.pending_email() else {
            return view;
        };

        let input = FeedbackInput {
            event_id: view.event_id.to_owned(),
            user_email,
            rating: view.rating,
            comment: view.comment.to_owned(),
        };

        let action = match store.submit_feedback(input).await {
            Ok(record) => EventDetailAction::ReviewSent(record),
            Err(err) => EventDetailAction::ReviewFailed(err.to_string()),
        };

        view.reduce(action)
    }
}
