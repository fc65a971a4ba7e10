use strum::{AsRefStr, Display};
use time::Date;

use crate::Event;

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timing {
    Future,
    Past,
}

impl Timing {
    /// Only a well-formed date strictly after `today` counts as upcoming; a
    /// date that fails to parse lands in the past bucket instead of being
    /// dropped.
    pub fn of(event: &Event, today: Date) -> Self {
        match event.parsed_date() {
            Some(date) if date > today => Self::Future,
            _ => Self::Past,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    pub future: Vec<Event>,
    pub past: Vec<Event>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.future.len() + self.past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.future.is_empty() && self.past.is_empty()
    }
}

pub fn classify(events: impl IntoIterator<Item = Event>, today: Date) -> Partition {
    let mut partition = Partition::default();

    for event in events {
        match Timing::of(&event, today) {
            Timing::Future => partition.future.push(event),
            Timing::Past => partition.past.push(event),
        }
    }

    partition
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn event(id: &str, date: &str) -> Event {
        Event {
            id: id.to_owned(),
            title: format!("event {id}"),
            date: date.to_owned(),
            location: "Hall A".to_owned(),
        }
    }

    fn ids(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_classify_future_and_past() {
        let today = date!(2025 - 06 - 15);
        let partition = classify(
            vec![
                event("tomorrow", "2025-06-16"),
                event("today", "2025-06-15"),
                event("yesterday", "2025-06-14"),
                event("next_year", "2026-01-01"),
            ],
            today,
        );

        assert_eq!(ids(&partition.future), vec!["tomorrow", "next_year"]);
        assert_eq!(ids(&partition.past), vec!["today", "yesterday"]);
    }

    #[test]
    fn test_classify_unparseable_dates_are_past() {
        let today = date!(2025 - 06 - 15);
        let partition = classify(
            vec![
                event("slashes", "16/06/2025"),
                event("empty", ""),
                event("impossible", "2025-02-30"),
                event("short", "2025-6-16"),
            ],
            today,
        );

        assert!(partition.future.is_empty());
        assert_eq!(
            ids(&partition.past),
            vec!["slashes", "empty", "impossible", "short"]
        );
    }

    #[test]
    fn test_classify_is_total_disjoint_and_stable() {
        let today = date!(2025 - 06 - 15);
        let input = vec![
            event("a", "2025-07-01"),
            event("b", "2024-07-01"),
            event("c", "bad"),
            event("d", "2025-06-20"),
            event("e", "2025-06-15"),
            event("f", "2030-12-31"),
        ];

        let partition = classify(input.clone(), today);

        assert_eq!(partition.len(), input.len());
        assert_eq!(ids(&partition.future), vec!["a", "d", "f"]);
        assert_eq!(ids(&partition.past), vec!["b", "c", "e"]);
        for event in &partition.future {
            assert!(!partition.past.contains(event));
        }
        for event in &input {
            assert!(partition.future.contains(event) || partition.past.contains(event));
        }
    }

    #[test]
    fn test_classify_empty() {
        let partition = classify(Vec::new(), date!(2025 - 06 - 15));
        assert!(partition.is_empty());
    }

    #[test]
    fn test_timing_uses_the_local_calendar_day() {
        // Evening of 2026-10-16 in San Salvador, already the 17th in UTC.
        let now = time::macros::datetime!(2026-10-17 01:00 UTC);
        let event = event("x", "2026-10-17");

        let local = udb_shared::local_date(now, "America/El_Salvador");
        assert_eq!(Timing::of(&event, local), Timing::Future);

        let utc = udb_shared::local_date(now, "UTC");
        assert_eq!(Timing::of(&event, utc), Timing::Past);
    }

    #[test]
    fn test_timing_of() {
        let today = date!(2025 - 06 - 15);
        assert_eq!(Timing::of(&event("x", "2025-06-16"), today), Timing::Future);
        assert_eq!(Timing::of(&event("x", "2025-06-15"), today), Timing::Past);
        assert_eq!(Timing::of(&event("x", "soon"), today), Timing::Past);
    }
}
