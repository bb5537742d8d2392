// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteGuardError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Rule document {path} is not valid: {message}")]
    RulesSyntax { path: PathBuf, message: String },

    #[error("Malformed rule {section}[{index}]: {detail}")]
    MalformedRule {
        section: &'static str,
        index: usize,
        detail: String,
    },

    #[error("Graph document {path} is not valid: {message}")]
    GraphSyntax { path: PathBuf, message: String },

    #[error("Config error: {0}")]
    Config(String),
}

impl RouteGuardError {
    /// True when the error describes bad input data rather than an
    /// environment failure.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }

    pub(crate) fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RouteGuardError>;
