//! Plain text rendering of the screens.

use askama::Template;
use udb_event::{Event, FeedbackSummary, MAX_RATING};

use crate::router::Route;
use crate::screens::{
    CreateEventView, EventDetailView, EventHistoryView, EventListView, LoginView, MainScaffold,
    Avatar, Message, ProfileView, RegisterView, Tab,
};

struct EventLine<'a> {
    event: &'a Event,
    route: Route,
}

impl<'a> EventLine<'a> {
    fn new(event: &'a Event) -> Self {
        Self {
            event,
            route: Route::event_detail(&event.id),
        }
    }
}

struct Section<'a> {
    title: &'static str,
    underline: String,
    lines: Vec<EventLine<'a>>,
}

impl<'a> Section<'a> {
    fn new(title: &'static str, events: &'a [Event]) -> Self {
        Self {
            title,
            underline: "=".repeat(title.chars().count()),
            lines: events.iter().map(EventLine::new).collect(),
        }
    }
}

struct ReviewLine<'a> {
    author: &'a str,
    text: &'a str,
    rating: String,
}

struct Reviews<'a> {
    rating: Option<String>,
    stars: String,
    comments: Vec<ReviewLine<'a>>,
}

impl<'a> Reviews<'a> {
    fn new(summary: &'a FeedbackSummary) -> Self {
        let full = summary.stars();
        let empty = (MAX_RATING as usize).saturating_sub(full);

        Self {
            rating: summary.average_rating.map(|avg| format!("{avg:.1}")),
            stars: format!("{}{}", "★".repeat(full), "☆".repeat(empty)),
            comments: summary
                .comments
                .iter()
                .map(|comment| ReviewLine {
                    author: &comment.author,
                    text: &comment.text,
                    rating: format!("{:.0}", comment.rating),
                })
                .collect(),
        }
    }
}

struct TabLabel {
    label: &'static str,
    selected: bool,
}

#[derive(Template)]
#[template(path = "cli/login.txt")]
struct LoginPage<'a> {
    view: &'a LoginView,
    password: String,
    message: Option<&'a Message>,
    navigate: Option<&'a Route>,
}

#[derive(Template)]
#[template(path = "cli/register.txt")]
struct RegisterPage<'a> {
    view: &'a RegisterView,
    email_state: &'static str,
    password_state: &'static str,
    confirm_state: &'static str,
    message: Option<&'a Message>,
    navigate: Option<&'a Route>,
}

#[derive(Template)]
#[template(path = "cli/message.txt")]
struct MessageLine<'a> {
    message: &'a Message,
}

#[derive(Template)]
#[template(path = "cli/main-tabs.txt")]
struct MainTabs {
    tabs: Vec<TabLabel>,
}

#[derive(Template)]
#[template(path = "cli/event-list.txt")]
struct EventListPage<'a> {
    view: &'a EventListView,
    sections: [Section<'a>; 2],
    message: Option<&'a Message>,
    navigate: Option<&'a Route>,
}

#[derive(Template)]
#[template(path = "cli/create-event.txt")]
struct CreateEventPage<'a> {
    view: &'a CreateEventView,
    date: String,
    min_date: String,
    message: Option<&'a Message>,
    navigate: Option<&'a Route>,
}

#[derive(Template)]
#[template(path = "cli/event-detail.txt")]
struct EventDetailPage<'a> {
    view: &'a EventDetailView,
    reviews: Option<Reviews<'a>>,
    message: Option<&'a Message>,
    navigate: Option<&'a Route>,
}

#[derive(Template)]
#[template(path = "cli/event-history.txt")]
struct EventHistoryPage<'a> {
    entries: Vec<(EventLine<'a>, Reviews<'a>)>,
    message: Option<&'a Message>,
    navigate: Option<&'a Route>,
}

#[derive(Template)]
#[template(path = "cli/profile.txt")]
struct ProfilePage<'a> {
    view: &'a ProfileView,
    avatar: Avatar,
    message: Option<&'a Message>,
    navigate: Option<&'a Route>,
}

fn valid(flag: bool) -> &'static str {
    if flag { "ok" } else { "invalid" }
}

pub fn message(message: &Message) -> askama::Result<String> {
    MessageLine { message }.render()
}

pub fn login(view: &LoginView) -> askama::Result<String> {
    let password = if view.password_visible {
        view.password.to_owned()
    } else {
        "*".repeat(view.password.chars().count())
    };

    LoginPage {
        view,
        password,
        message: view.message.as_ref(),
        navigate: view.navigate.as_ref(),
    }
    .render()
}

pub fn register(view: &RegisterView) -> askama::Result<String> {
    RegisterPage {
        view,
        email_state: valid(view.email_valid),
        password_state: valid(view.password_valid),
        confirm_state: valid(view.confirm_matches),
        message: view.message.as_ref(),
        navigate: view.navigate.as_ref(),
    }
    .render()
}

pub fn main_tabs(main: &MainScaffold) -> askama::Result<String> {
    MainTabs {
        tabs: Tab::all()
            .map(|tab| TabLabel {
                label: tab.label(),
                selected: tab == main.selected,
            })
            .collect(),
    }
    .render()
}

pub fn event_list(view: &EventListView) -> askama::Result<String> {
    EventListPage {
        view,
        sections: [
            Section::new("Upcoming events", &view.future),
            Section::new("Past events", &view.past),
        ],
        message: view.message.as_ref(),
        navigate: view.navigate.as_ref(),
    }
    .render()
}

pub fn create_event(view: &CreateEventView) -> askama::Result<String> {
    CreateEventPage {
        view,
        date: view.date.map(udb_shared::format_date).unwrap_or_default(),
        min_date: udb_shared::format_date(view.min_date),
        message: view.message.as_ref(),
        navigate: view.navigate.as_ref(),
    }
    .render()
}

pub fn event_detail(view: &EventDetailView) -> askama::Result<String> {
    let summary = view.summary();

    EventDetailPage {
        view,
        reviews: summary.as_ref().map(Reviews::new),
        message: view.message.as_ref(),
        navigate: view.navigate.as_ref(),
    }
    .render()
}

pub fn event_history(view: &EventHistoryView) -> askama::Result<String> {
    EventHistoryPage {
        entries: view
            .entries
            .iter()
            .map(|entry| (EventLine::new(&entry.event), Reviews::new(&entry.summary)))
            .collect(),
        message: view.message.as_ref(),
        navigate: None,
    }
    .render()
}

pub fn profile(view: &ProfileView) -> askama::Result<String> {
    ProfilePage {
        view,
        avatar: view.avatar(),
        message: view.message.as_ref(),
        navigate: view.navigate.as_ref(),
    }
    .render()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use udb_event::Comment;

    use super::*;
    use crate::screens::{EventListAction, HistoryEntry};

    #[test]
    fn test_event_list_sections() {
        let view = EventListView::new(date!(2025 - 06 - 15)).reduce(EventListAction::Loaded(vec![
            Event {
                id: "a".to_string(),
                title: "Meetup".to_string(),
                date: "2025-07-01".to_string(),
                location: "Hall A".to_string(),
            },
        ]));

        let out = event_list(&view).unwrap();
        let upcoming = out.find("Upcoming events").unwrap();
        let meetup = out.find("Meetup").unwrap();
        let past = out.find("Past events").unwrap();
        assert!(upcoming < meetup && meetup < past);
        assert!(out.contains("event-detail/a"));
    }

    #[test]
    fn test_message_and_navigation_footer() {
        let view = ProfileView {
            session: None,
            busy: false,
            message: Some(Message::error("Email not available")),
            navigate: Some(Route::Login),
        };

        let out = profile(&view).unwrap();
        assert!(out.contains("(?) gray"));
        assert!(out.contains("[error] Email not available"));
        assert!(out.ends_with("-> login"));
    }

    #[test]
    fn test_main_tabs() {
        assert_eq!(
            main_tabs(&MainScaffold::new()).unwrap(),
            "[Events]  Create  History  Profile"
        );
    }

    #[test]
    fn test_info_and_error_tags() {
        let view = CreateEventView::new(date!(2025 - 06 - 15));

        let out = create_event(&CreateEventView {
            message: Some(Message::info("Event created.")),
            ..view.clone()
        })
        .unwrap();
        assert!(out.contains("Date:  (from 2025-06-16)"));
        assert!(out.contains("[info] Event created."));

        let out = create_event(&CreateEventView {
            message: Some(Message::error("Please fill in all fields.")),
            ..view
        })
        .unwrap();
        assert!(out.contains("[error] Please fill in all fields."));
        assert!(!out.contains("[info]"));
    }

    #[test]
    fn test_message_line() {
        assert_eq!(
            message(&Message::info("Password updated, sign in again.")).unwrap(),
            "[info] Password updated, sign in again."
        );
        assert_eq!(
            message(&Message::error("Could not send email: offline")).unwrap(),
            "[error] Could not send email: offline"
        );
    }

    #[test]
    fn test_empty_sections_and_share_text() {
        let view = EventListView::new(date!(2025 - 06 - 15)).reduce(EventListAction::Loaded(vec![]));
        let out = event_list(&view).unwrap();
        assert!(out.starts_with("Upcoming events\n===============\n  (none)\n\nPast events"));

        let event = Event {
            id: "a".to_string(),
            title: "Meetup".to_string(),
            date: "2025-07-01".to_string(),
            location: "Hall A".to_string(),
        };
        let out = event_list(&view.reduce(EventListAction::Share(event))).unwrap();
        assert!(out.contains("Check out this event! 📌 Meetup"));
    }

    #[test]
    fn test_event_history_reviews() {
        let view = EventHistoryView {
            session: None,
            today: date!(2025 - 06 - 15),
            loading: false,
            entries: vec![HistoryEntry {
                event: Event {
                    id: "a".to_string(),
                    title: "Workshop".to_string(),
                    date: "2025-06-01".to_string(),
                    location: "Lab 2".to_string(),
                },
                summary: FeedbackSummary {
                    average_rating: Some(4.5),
                    comments: vec![Comment {
                        author: "a@b.com".to_string(),
                        text: "Great".to_string(),
                        rating: 4.0,
                    }],
                },
            }],
            message: None,
        };

        let out = event_history(&view).unwrap();
        assert!(out.contains("  Workshop"));
        assert!(out.contains("⭐ Rating: 4.5 ★★★★☆"));
        assert!(out.contains("- a@b.com: Great (4/5)"));
    }
}
