use udb_shared::Session;
use udb_user::{Auth, Credentials, FederatedCredential, Provider, is_valid_email, is_valid_password};

use super::Message;
use crate::router::Route;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginView {
    pub email: String,
    pub password: String,
    pub password_visible: bool,
    pub email_valid: bool,
    pub password_valid: bool,
    pub show_error: bool,
    pub loading: bool,
    pub session: Option<Session>,
    pub message: Option<Message>,
    pub navigate: Option<Route>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginAction {
    EmailChanged(String),
    PasswordChanged(String),
    TogglePasswordVisibility,
    Submit,
    SignedIn(Session),
    SignInFailed(String),
    FederatedStarted(Provider),
    FederatedFailed(Provider, String),
    OpenRegister,
}

impl LoginView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(mut self, action: LoginAction) -> Self {
        match action {
            LoginAction::EmailChanged(email) => {
                self.email_valid = is_valid_email(&email);
                self.email = email;
            }
            LoginAction::PasswordChanged(password) => {
                self.password_valid = is_valid_password(&password);
                self.password = password;
            }
            LoginAction::TogglePasswordVisibility => {
                self.password_visible = !self.password_visible;
            }
            LoginAction::Submit => {
                if self.email.is_empty()
                    || self.password.is_empty()
                    || !self.email_valid
                    || !self.password_valid
                {
                    self.show_error = true;
                    self.message = Some(Message::error("Invalid email or password."));
                } else {
                    self.show_error = false;
                    self.loading = true;
                    self.message = None;
                }
            }
            LoginAction::SignedIn(session) => {
                self.loading = false;
                self.session = Some(session);
                self.message = None;
                self.navigate = Some(Route::Main);
            }
            LoginAction::SignInFailed(_) => {
                self.loading = false;
                self.message = Some(Message::error("User not registered or wrong password."));
            }
            LoginAction::FederatedStarted(_) => {
                self.loading = true;
                self.message = None;
            }
            LoginAction::FederatedFailed(provider, reason) => {
                self.loading = false;
                self.message = Some(Message::error(format!(
                    "{} sign-in failed: {reason}",
                    provider.label()
                )));
            }
            LoginAction::OpenRegister => {
                self.navigate = Some(Route::Register);
            }
        }

        self
    }

    pub async fn sign_in(auth: &dyn Auth, credentials: Credentials) -> LoginAction {
        match auth.sign_in(credentials).await {
            Ok(session) => LoginAction::SignedIn(session),
            Err(err) => LoginAction::SignInFailed(err.to_string()),
        }
    }

    pub async fn sign_in_with_credential(
        auth: &dyn Auth,
        credential: FederatedCredential,
    ) -> LoginAction {
        let provider = credential.provider;

        match auth.sign_in_with_credential(credential).await {
            Ok(session) => LoginAction::SignedIn(session),
            Err(err) => LoginAction::FederatedFailed(provider, err.to_string()),
        }
    }

    /// Validates the form and, when it passes, signs in.
    pub async fn submit(self, auth: &dyn Auth) -> Self {
        let view = self.reduce(LoginAction::Submit);
        if !view.loading {
            return view;
        }

        let credentials = Credentials::new(view.email.to_owned(), view.password.to_owned());
        let action = Self::sign_in(auth, credentials).await;

        view.reduce(action)
    }

    pub async fn submit_federated(self, auth: &dyn Auth, credential: FederatedCredential) -> Self {
        let view = self.reduce(LoginAction::FederatedStarted(credential.provider));
        let action = Self::sign_in_with_credential(auth, credential).await;

        view.reduce(action)
    }
}
