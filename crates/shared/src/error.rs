use strum::{AsRefStr, Display};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("{0}")]
    Invalid(String),

    #[error("{0}")]
    Remote(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("malformed route: {0}")]
    MalformedRoute(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

/// Coarse classification surfaced to screens.
#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    ValidationError,
    RemoteCallFailure,
    NotFound,
    MalformedRoute,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validate(_) | Self::Invalid(_) => ErrorKind::ValidationError,
            Self::Remote(_) | Self::Unknown(_) => ErrorKind::RemoteCallFailure,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::MalformedRoute(_) => ErrorKind::MalformedRoute,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(value: argon2::password_hash::Error) -> Self {
        Self::Unknown(anyhow::anyhow!("{value}"))
    }
}

impl From<jsonwebtoken::errors::Error> for Error {
    fn from(value: jsonwebtoken::errors::Error) -> Self {
        Self::Unknown(value.into())
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Remote(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Remote(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Remote(format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! invalid {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Invalid(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Invalid(format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! not_found {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::NotFound(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::NotFound(format!($fmt, $($arg)*)))
    };
}
