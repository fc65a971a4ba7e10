use serde::Serialize;
use sqlx::prelude::FromRow;
use time::Date;
use validator::{Validate, ValidationError};

/// A scheduled event as stored in the `events` collection.
///
/// `id` is assigned by the store and stays empty until the record is persisted.
/// `date` is kept as the raw `YYYY-MM-DD` text so records written by other
/// clients with a malformed date still load.
#[derive(Clone, Debug, Default, PartialEq, Eq, FromRow, Serialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: String,
    pub location: String,
}

impl Event {
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }

    pub fn parsed_date(&self) -> Option<Date> {
        udb_shared::parse_date(&self.date)
    }

    /// Plain-text blurb handed to the platform share sheet.
    pub fn share_text(&self) -> String {
        format!(
            "Check out this event! 📌 {}\n📅 {}\n📍 {}",
            self.title, self.date, self.location
        )
    }
}

#[derive(Validate, Clone, Debug)]
pub struct CreateInput {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "calendar_date"))]
    pub date: String,
    #[validate(custom(function = "not_blank"))]
    pub location: String,
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }

    Ok(())
}

fn calendar_date(value: &str) -> Result<(), ValidationError> {
    if udb_shared::parse_date(value).is_none() {
        return Err(ValidationError::new("date").with_message("expected YYYY-MM-DD".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn input(title: &str, date: &str, location: &str) -> CreateInput {
        CreateInput {
            title: title.to_owned(),
            date: date.to_owned(),
            location: location.to_owned(),
        }
    }

    #[test]
    fn test_create_input_validation() {
        assert!(input("Meetup", "2030-01-01", "Hall A").validate().is_ok());
        assert!(input("  ", "2030-01-01", "Hall A").validate().is_err());
        assert!(input("Meetup", "", "Hall A").validate().is_err());
        assert!(input("Meetup", "01-01-2030", "Hall A").validate().is_err());
        assert!(input("Meetup", "2030-01-01", "").validate().is_err());
    }

    #[test]
    fn test_event_helpers() {
        let event = Event {
            id: String::new(),
            title: "Meetup".to_owned(),
            date: "2030-01-01".to_owned(),
            location: "Hall A".to_owned(),
        };

        assert!(!event.is_persisted());
        assert_eq!(event.parsed_date(), Some(date!(2030 - 01 - 01)));
        assert_eq!(
            event.share_text(),
            "Check out this event! 📌 Meetup\n📅 2030-01-01\n📍 Hall A"
        );
    }
}
