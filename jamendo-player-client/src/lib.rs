#[macro_use]
extern crate tracing;

use snafu::prelude::*;

pub mod client;
pub mod jamendo_models;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("{message}"))]
    Api { message: String },
    #[snafu(display("failed to deserialize json: {message}"))]
    DeserializeJSON { message: String },
    #[snafu(display("invalid base url: {message}"))]
    BaseUrl { message: String },
    #[snafu(display("{source}"))]
    Request { source: reqwest::Error },
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Request { source }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
