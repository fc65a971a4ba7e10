use udb_shared::Session;
use udb_user::{Auth, Credentials, is_valid_email, is_valid_password};

use super::Message;
use crate::router::Route;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterView {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub password_visible: bool,
    pub confirm_visible: bool,
    pub email_valid: bool,
    pub password_valid: bool,
    pub confirm_matches: bool,
    pub loading: bool,
    pub session: Option<Session>,
    pub message: Option<Message>,
    pub navigate: Option<Route>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterAction {
    EmailChanged(String),
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    TogglePasswordVisibility,
    ToggleConfirmVisibility,
    Submit,
    Registered(Session),
    RegisterFailed(String),
    OpenLogin,
}

impl RegisterView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(mut self, action: RegisterAction) -> Self {
        match action {
            RegisterAction::EmailChanged(email) => {
                self.email_valid = is_valid_email(&email);
                self.email = email;
            }
            RegisterAction::PasswordChanged(password) => {
                self.password_valid = is_valid_password(&password);
                self.confirm_matches = self.confirm_password == password;
                self.password = password;
            }
            RegisterAction::ConfirmPasswordChanged(confirm) => {
                self.confirm_matches = confirm == self.password;
                self.confirm_password = confirm;
            }
            RegisterAction::TogglePasswordVisibility => {
                self.password_visible = !self.password_visible;
            }
            RegisterAction::ToggleConfirmVisibility => {
                self.confirm_visible = !self.confirm_visible;
            }
            RegisterAction::Submit => {
                if !self.email_valid || !self.password_valid || !self.confirm_matches {
                    self.message = Some(Message::error("Please check the entered fields."));
                } else {
                    self.loading = true;
                    self.message = None;
                }
            }
            RegisterAction::Registered(session) => {
                self.loading = false;
                self.session = Some(session);
                self.message = None;
                self.navigate = Some(Route::Main);
            }
            RegisterAction::RegisterFailed(reason) => {
                self.loading = false;
                self.message = Some(Message::error(format!("Registration failed: {reason}")));
            }
            RegisterAction::OpenLogin => {
                self.navigate = Some(Route::Login);
            }
        }

        self
    }

    pub async fn create_account(auth: &dyn Auth, credentials: Credentials) -> RegisterAction {
        match auth.create_account(credentials).await {
            Ok(session) => RegisterAction::Registered(session),
            Err(err) => RegisterAction::RegisterFailed(err.to_string()),
        }
    }

    pub async fn submit(self, auth: &dyn Auth) -> Self {
        let view = self.reduce(RegisterAction::Submit);
        if !view.loading {
            return view;
        }

        let credentials = Credentials::new(view.email.to_owned(), view.password.to_owned());
        let action = Self::create_account(auth, credentials).await;

        view.reduce(action)
    }
}
