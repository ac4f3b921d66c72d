//! Error types for the ESPN Fantasy Football client

use thiserror::Error;

use crate::{cli::types::Season, espn::era::Era};


pub type Result<T> = std::result::Result<T, EspnError>;

fn alternate_hint(alternate: &Option<String>) -> String {
    match alternate {
        Some(op) => format!("; use {op} instead"),
        None => String::new(),
    }
}

#[derive(Error, Debug)]
pub enum EspnError {
    /// An operation was called with a season served by the other API generation.
    #[error(
        "Cannot call {operation} with season {season}: it requires a {required} season{}",
        alternate_hint(.alternate)
    )]
    UnsupportedEra {
        operation: String,
        season: Season,
        required: Era,
        alternate: Option<String>,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse league ID: {0}")]
    InvalidLeagueId(#[from] std::num::ParseIntError),

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },
}
