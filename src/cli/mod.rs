//! Terminal front end: each command mounts a screen, dispatches its actions
//! and prints the rendered view.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use udb_shared::Session;
use udb_user::{Auth, FederatedCredential, Provider, ResetInput};

use crate::config::Config;
use crate::router::{Route, resolve_route};
use crate::screens::{
    CreateEventAction, CreateEventView, EventDetailAction, EventDetailView, EventHistoryView,
    EventListAction, EventListView, LoginAction, LoginView, MainAction, MainScaffold, Message,
    ProfileView, RegisterAction, RegisterView, Tab,
};
use crate::session::SessionFile;

mod render;

/// udb-events - sign in, browse, attend and review events
#[derive(Parser)]
#[command(name = "udb-events")]
#[command(about = "Event client: create, browse, attend and review events", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Create an account and sign in
    Register {
        email: String,
        password: String,
        /// Password confirmation (defaults to the password)
        #[arg(long)]
        confirm: Option<String>,
    },
    /// Sign in with email and password
    Login { email: String, password: String },
    /// Sign in with a federated identity token
    LoginWith {
        #[arg(value_parser = parse_provider)]
        provider: Provider,
        id_token: String,
    },
    /// Sign out of the current session
    Logout,
    /// List upcoming and past events
    Events {
        /// Print the share text of an event
        #[arg(long)]
        share: Option<String>,
        /// Switch to another main tab
        #[arg(long, value_parser = parse_tab)]
        tab: Option<Tab>,
    },
    /// Create an event
    CreateEvent {
        #[arg(long)]
        title: String,
        /// Date as YYYY-MM-DD, after today
        #[arg(long)]
        date: String,
        #[arg(long)]
        location: String,
    },
    /// Open a route such as `home` or `event-detail/<id>`
    Open { route: String },
    /// Confirm attendance to an event
    Attend { event_id: String },
    /// Rate and review a past event
    Review {
        event_id: String,
        #[arg(long)]
        rating: f64,
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Past events you attended with their reviews
    History,
    /// Show the profile of the signed-in user
    Profile {
        /// Email a password reset link
        #[arg(long)]
        change_password: bool,
    },
    /// Email a password reset link
    ForgotPassword { email: String },
    /// Choose a new password with a reset token
    ResetPassword { token: String, password: String },
}

fn parse_provider(value: &str) -> Result<Provider, String> {
    value
        .parse()
        .map_err(|_| format!("unknown provider {value}, expected google or github"))
}

fn parse_tab(value: &str) -> Result<Tab, String> {
    let route = resolve_route(value).map_err(|e| e.to_string())?;
    Tab::from_route(&route).ok_or_else(|| format!("{value} is not a main tab"))
}

/// Collaborators shared by the commands that mount screens.
pub struct App {
    pub auth: Arc<dyn Auth>,
    pub store: Arc<dyn udb_event::EventStore>,
    pub session_file: SessionFile,
    /// IANA timezone deciding which calendar day is "today"
    pub timezone: String,
}

impl App {
    pub async fn connect(config: &Config) -> Result<Self> {
        let state =
            crate::db::connect(&config.database.url, config.database.max_connections).await?;
        let mailer = crate::email::mailer_from_config(&config.email)?;

        let mut auth = udb_user::Command::new(state.clone(), config.jwt.secret.to_owned())
            .with_expiration_days(config.jwt.expiration_days)
            .with_mailer(mailer)
            .with_reset_base_url(config.email.base_url.to_owned());

        for (provider, key) in config.providers.keys() {
            auth = auth.with_provider(provider, key);
        }

        Ok(Self {
            auth: Arc::new(auth),
            store: Arc::new(udb_event::Store::new(state)),
            session_file: SessionFile::new(&config.session.path),
            timezone: config.app.timezone.to_owned(),
        })
    }

    pub fn today(&self) -> time::Date {
        udb_shared::today(&self.timezone)
    }

    pub async fn session(&self) -> Result<Option<Session>> {
        self.session_file.load(self.auth.as_ref()).await
    }

    pub async fn execute(&self, command: Commands) -> Result<String> {
        let today = self.today();

        let output = match command {
            Commands::Migrate | Commands::Reset => String::new(),
            Commands::Register {
                email,
                password,
                confirm,
            } => {
                let confirm = confirm.unwrap_or_else(|| password.to_owned());
                let view = RegisterView::new()
                    .reduce(RegisterAction::EmailChanged(email))
                    .reduce(RegisterAction::PasswordChanged(password))
                    .reduce(RegisterAction::ConfirmPasswordChanged(confirm))
                    .submit(self.auth.as_ref())
                    .await;

                if let Some(session) = &view.session {
                    self.session_file.save(session)?;
                }

                render::register(&view)?
            }
            Commands::Login { email, password } => {
                let view = LoginView::new()
                    .reduce(LoginAction::EmailChanged(email))
                    .reduce(LoginAction::PasswordChanged(password))
                    .submit(self.auth.as_ref())
                    .await;

                if let Some(session) = &view.session {
                    self.session_file.save(session)?;
                }

                render::login(&view)?
            }
            Commands::LoginWith { provider, id_token } => {
                let view = LoginView::new()
                    .submit_federated(
                        self.auth.as_ref(),
                        FederatedCredential { provider, id_token },
                    )
                    .await;

                if let Some(session) = &view.session {
                    self.session_file.save(session)?;
                }

                render::login(&view)?
            }
            Commands::Logout => {
                let view = ProfileView::new(self.session().await?)
                    .sign_out(self.auth.as_ref())
                    .await;

                if view.session.is_none() {
                    self.session_file.clear()?;
                }

                render::profile(&view)?
            }
            Commands::Events { share, tab } => {
                let main = match tab {
                    Some(tab) => MainScaffold::new().reduce(MainAction::Select(tab)),
                    None => MainScaffold::new(),
                };

                if let Some(route) = main.navigate.as_ref() {
                    return self.open(route, today).await;
                }

                let mut view = EventListView::new(today).load(self.store.as_ref()).await;

                if let Some(id) = share {
                    let event = view.find(&id).cloned();
                    view = match event {
                        Some(event) => view.reduce(EventListAction::Share(event)),
                        None => view.reduce(EventListAction::NotFound(id)),
                    };
                }

                format!(
                    "{}\n\n{}",
                    render::main_tabs(&main)?,
                    render::event_list(&view)?
                )
            }
            Commands::CreateEvent {
                title,
                date,
                location,
            } => {
                let view = CreateEventView::new(today)
                    .reduce(CreateEventAction::TitleChanged(title))
                    .reduce(CreateEventAction::DateEntered(date))
                    .reduce(CreateEventAction::LocationChanged(location));

                let view = if view.message.is_some() {
                    view
                } else {
                    view.submit(self.store.as_ref()).await
                };

                render::create_event(&view)?
            }
            Commands::Open { route } => match resolve_route(&route) {
                Ok(route) => return self.open(&route, today).await,
                Err(err) => render::message(&Message::error(err.to_string()))?,
            },
            Commands::Attend { event_id } => {
                let view = EventDetailView::new(event_id, self.session().await?, today)
                    .load(self.store.as_ref())
                    .await;

                let view = if view.event.is_some() {
                    view.attend(self.store.as_ref()).await
                } else {
                    view
                };

                render::event_detail(&view)?
            }
            Commands::Review {
                event_id,
                rating,
                comment,
            } => {
                let view = EventDetailView::new(event_id, self.session().await?, today)
                    .load(self.store.as_ref())
                    .await;

                let view = if view.event.is_some() {
                    view.reduce(EventDetailAction::RatingChanged(rating))
                        .reduce(EventDetailAction::CommentChanged(comment))
                        .submit_review(self.store.as_ref())
                        .await
                } else {
                    view
                };

                render::event_detail(&view)?
            }
            Commands::History => return self.open(&Route::History, today).await,
            Commands::Profile { change_password } => {
                let view = ProfileView::new(self.session().await?);
                let view = if change_password {
                    view.change_password(self.auth.as_ref()).await
                } else {
                    view
                };

                render::profile(&view)?
            }
            Commands::ForgotPassword { email } => {
                match self.auth.send_password_reset_email(&email).await {
                    Ok(()) => render::message(&Message::info(format!(
                        "Password reset email sent to {email}"
                    )))?,
                    Err(err) => {
                        render::message(&Message::error(format!("Could not send email: {err}")))?
                    }
                }
            }
            Commands::ResetPassword { token, password } => {
                match self
                    .auth
                    .reset_password(ResetInput { token, password })
                    .await
                {
                    Ok(()) => {
                        self.session_file.clear()?;
                        render::message(&Message::info("Password updated, sign in again."))?
                    }
                    Err(err) => render::message(&Message::error(format!(
                        "Could not reset password: {err}"
                    )))?,
                }
            }
        };

        Ok(output)
    }

    /// Mounts the screen a route points at and renders its initial state.
    pub async fn open(&self, route: &Route, today: time::Date) -> Result<String> {
        let output = match route {
            Route::Login => render::login(&LoginView::new())?,
            Route::Register => render::register(&RegisterView::new())?,
            Route::Main | Route::Home => {
                let view = EventListView::new(today).load(self.store.as_ref()).await;
                let main = MainScaffold::new();
                format!(
                    "{}\n\n{}",
                    render::main_tabs(&main)?,
                    render::event_list(&view)?
                )
            }
            Route::CreateEvent => render::create_event(&CreateEventView::new(today))?,
            Route::History => {
                let view = EventHistoryView::new(self.session().await?, today)
                    .load(self.store.as_ref())
                    .await;
                render::event_history(&view)?
            }
            Route::Profile => render::profile(&ProfileView::new(self.session().await?))?,
            Route::EventDetail { event_id } => {
                let view = EventDetailView::new(event_id.to_owned(), self.session().await?, today)
                    .load(self.store.as_ref())
                    .await;
                render::event_detail(&view)?
            }
        };

        Ok(match Tab::from_route(route) {
            Some(tab) if *route != Route::Home => {
                let main = MainScaffold {
                    selected: tab,
                    navigate: None,
                };
                format!("{}\n\n{output}", render::main_tabs(&main)?)
            }
            _ => output,
        })
    }
}

pub async fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Migrate => crate::db::migrate(&config.database.url).await,
        Commands::Reset => crate::db::reset(&config.database.url).await,
        command => {
            let app = App::connect(&config).await?;
            let output = app.execute(command).await?;
            println!("{output}");

            Ok(())
        }
    }
}
