// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Almost nothing in the player is fallible: the only failures that reach
//! this type are configuration I/O and the host refusing a fullscreen
//! request. Neither is ever surfaced to the user.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The host window refused or could not honour a fullscreen change.
    #[error("Fullscreen Error: {0}")]
    Fullscreen(String),

    /// The media element could not be created or reached.
    #[error("Media Error: {0}")]
    Media(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
