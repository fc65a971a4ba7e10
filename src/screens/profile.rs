use strum::{AsRefStr, Display};
use udb_shared::Session;
use udb_user::Auth;

use super::Message;
use crate::router::Route;

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum AvatarColor {
    Red,
    Purple,
    Blue,
    Green,
    Gray,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Avatar {
    pub initial: char,
    pub color: AvatarColor,
}

impl Avatar {
    pub fn for_email(email: &str) -> Self {
        let initial = email
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('?');

        let color = match initial {
            'A'..='F' => AvatarColor::Red,
            'G'..='L' => AvatarColor::Purple,
            'M'..='R' => AvatarColor::Blue,
            'S'..='Z' => AvatarColor::Green,
            _ => AvatarColor::Gray,
        };

        Self { initial, color }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileView {
    pub session: Option<Session>,
    pub busy: bool,
    pub message: Option<Message>,
    pub navigate: Option<Route>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileAction {
    ChangePassword,
    ResetEmailSent,
    ResetEmailFailed(String),
    SignedOut,
    SignOutFailed(String),
}

impl ProfileView {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            session,
            busy: false,
            message: None,
            navigate: None,
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.session
            .as_ref()
            .map(|session| session.email.as_str())
            .filter(|email| !email.is_empty())
    }

    pub fn email_label(&self) -> &str {
        self.email().unwrap_or("Email not available")
    }

    pub fn avatar(&self) -> Avatar {
        Avatar::for_email(self.email().unwrap_or_default())
    }

    pub fn reduce(mut self, action: ProfileAction) -> Self {
        match action {
            ProfileAction::ChangePassword => {
                if self.email().is_some() {
                    self.busy = true;
                    self.message = None;
                } else {
                    self.message = Some(Message::error("Email not available"));
                }
            }
            ProfileAction::ResetEmailSent => {
                self.busy = false;
                self.message = Some(Message::info(format!(
                    "Password reset email sent to {}",
                    self.email_label()
                )));
            }
            ProfileAction::ResetEmailFailed(reason) => {
                self.busy = false;
                self.message = Some(Message::error(format!("Could not send email: {reason}")));
            }
            ProfileAction::SignedOut => {
                self.session = None;
                self.navigate = Some(Route::Login);
            }
            ProfileAction::SignOutFailed(reason) => {
                self.message = Some(Message::error(format!("Could not sign out: {reason}")));
            }
        }

        self
    }

    pub async fn send_reset(auth: &dyn Auth, email: &str) -> ProfileAction {
        match auth.send_password_reset_email(email).await {
            Ok(()) => ProfileAction::ResetEmailSent,
            Err(err) => ProfileAction::ResetEmailFailed(err.to_string()),
        }
    }

    pub async fn change_password(self, auth: &dyn Auth) -> Self {
        let view = self.reduce(ProfileAction::ChangePassword);
        if !view.busy {
            return view;
        }

        let email = view.email_label().to_owned();
        let action = Self::send_reset(auth, &email).await;

        view.reduce(action)
    }

    pub async fn sign_out(self, auth: &dyn Auth) -> Self {
        let action = match &self.session {
            Some(session) => match auth.sign_out(session).await {
                Ok(()) => ProfileAction::SignedOut,
                Err(err) => ProfileAction::SignOutFailed(err.to_string()),
            },
            None => ProfileAction::SignedOut,
        };

        self.reduce(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(email: &str) -> Session {
        Session {
            user_id: "u1".to_owned(),
            email: email.to_owned(),
            access_id: "x".to_owned(),
            token: "t".to_owned(),
        }
    }

    #[test]
    fn test_avatar_buckets() {
        let cases = [
            ("alice@udb.localhost", 'A', AvatarColor::Red),
            ("frank@udb.localhost", 'F', AvatarColor::Red),
            ("gina@udb.localhost", 'G', AvatarColor::Purple),
            ("luis@udb.localhost", 'L', AvatarColor::Purple),
            ("maria@udb.localhost", 'M', AvatarColor::Blue),
            ("rosa@udb.localhost", 'R', AvatarColor::Blue),
            ("sam@udb.localhost", 'S', AvatarColor::Green),
            ("zoe@udb.localhost", 'Z', AvatarColor::Green),
            ("7eleven@udb.localhost", '7', AvatarColor::Gray),
            ("", '?', AvatarColor::Gray),
        ];

        for (email, initial, color) in cases {
            assert_eq!(Avatar::for_email(email), Avatar { initial, color }, "{email}");
        }
    }

    #[test]
    fn test_email_label() {
        assert_eq!(ProfileView::new(None).email_label(), "Email not available");
        assert_eq!(
            ProfileView::new(Some(session("a@b.com"))).email_label(),
            "a@b.com"
        );
        assert_eq!(ProfileView::new(None).avatar().initial, '?');
    }

    #[test]
    fn test_change_password_flow() {
        let view = ProfileView::new(Some(session("a@b.com"))).reduce(ProfileAction::ChangePassword);
        assert!(view.busy);

        let sent = view.clone().reduce(ProfileAction::ResetEmailSent);
        assert!(!sent.busy);
        assert_eq!(
            sent.message,
            Some(Message::info("Password reset email sent to a@b.com"))
        );

        let failed = view.reduce(ProfileAction::ResetEmailFailed("smtp down".to_owned()));
        assert!(!failed.busy);
        assert_eq!(
            failed.message,
            Some(Message::error("Could not send email: smtp down"))
        );

        let view = ProfileView::new(None).reduce(ProfileAction::ChangePassword);
        assert!(!view.busy);
        assert_eq!(view.message, Some(Message::error("Email not available")));
    }

    #[test]
    fn test_signed_out_goes_to_login() {
        let view = ProfileView::new(Some(session("a@b.com"))).reduce(ProfileAction::SignedOut);
        assert_eq!(view.session, None);
        assert_eq!(view.navigate, Some(Route::Login));
    }
}
