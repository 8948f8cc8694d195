use thiserror::Error;

use crate::form::validation::ValidationFailure;

#[derive(Error, Debug)]
pub enum HelpdeskError {
    #[error("unknown form field '{0}'")]
    UnknownField(String),

    #[error("invalid problem type '{0}'")]
    InvalidProblemType(String),

    #[error("unknown view '{0}'")]
    UnknownView(String),

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("not logged in")]
    NotAuthenticated,

    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("unknown command '{0}' (type 'help' for a list)")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("no ticket at position {0}")]
    TicketNotFound(usize),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("time error: {0}")]
    Time(#[from] jiff::Error),
}

pub type Result<T> = std::result::Result<T, HelpdeskError>;
