use crate::notification::Notification;
use snafu::prelude::*;

#[derive(Snafu, Debug)]
pub enum Error {
    #[snafu(display("{message}"))]
    Client {
        message: String,
    },
    #[snafu(display("Unable to broadcast notification"))]
    Notification,
    #[snafu(display("Unable to migrate database to latest version"))]
    DatabaseMigrationError,
    #[snafu(display("Unable to find database location"))]
    DatabaseLocationError,
    #[snafu(display("Database error: {source}"))]
    DatabaseError {
        #[snafu(source)]
        source: sqlx::Error,
    },
    #[snafu(display("Serialization error: {source}"))]
    SerializationError {
        #[snafu(source)]
        source: serde_json::Error,
    },
}

impl From<sqlx::migrate::MigrateError> for Error {
    fn from(_value: sqlx::migrate::MigrateError) -> Self {
        Self::DatabaseMigrationError
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::SerializationError { source }
    }
}

impl From<sqlx::Error> for Error {
    fn from(source: sqlx::Error) -> Self {
        Self::DatabaseError { source }
    }
}

impl From<jamendo_player_client::Error> for Error {
    fn from(value: jamendo_player_client::Error) -> Self {
        Error::Client {
            message: value.to_string(),
        }
    }
}

impl From<tokio::sync::broadcast::error::SendError<Notification>> for Error {
    fn from(_value: tokio::sync::broadcast::error::SendError<Notification>) -> Self {
        Self::Notification
    }
}
