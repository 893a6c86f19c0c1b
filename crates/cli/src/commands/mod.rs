//! Command implementations for the `elegance` binary.
//!
//! Each command renders through the storefront view models and writes to the
//! given output, so tests can capture what a shopper would see.

pub mod account;
pub mod cart;
pub mod shop;

use elegance_storefront::config::ConfigError;
use elegance_storefront::error::AppError;
use elegance_storefront::storage::StorageError;
use thiserror::Error;

/// Anything a command can fail with.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl CommandError {
    /// Line shown to the shopper when the command fails.
    pub fn user_message(&self) -> String {
        match self {
            Self::App(e) => e.user_message(),
            Self::Io(_) => "Could not write output".to_string(),
        }
    }
}

impl From<StorageError> for CommandError {
    fn from(e: StorageError) -> Self {
        Self::App(e.into())
    }
}

impl From<ConfigError> for CommandError {
    fn from(e: ConfigError) -> Self {
        Self::App(e.into())
    }
}
