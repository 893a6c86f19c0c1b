//! Integration tests for the Elegance storefront.
//!
//! Tests run the storefront against file-backed snapshots in a temporary
//! directory, reopening the state between steps the way separate CLI
//! invocations do.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p elegance-integration-tests
//! ```

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use elegance_storefront::config::StorefrontConfig;
use elegance_storefront::state::AppState;
use elegance_storefront::storage::{FileStorage, KeyValueStorage, StorageError};
use secrecy::SecretString;
use tempfile::TempDir;

/// A scratch storage directory that is removed on drop.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    /// Create a fresh, empty storage directory.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the temporary directory cannot be created.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Directory holding the snapshots.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Configuration pointing at the scratch directory, with no auth delay.
    #[must_use]
    pub fn config(&self) -> StorefrontConfig {
        StorefrontConfig::default()
            .with_storage_dir(self.path())
            .with_auth_latency(Duration::ZERO)
    }

    /// Open state as a new process would, rehydrating from disk.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if a snapshot cannot be read.
    pub fn open(&self) -> Result<AppState, StorageError> {
        AppState::open(self.config())
    }

    /// Raw key-value access to the same directory.
    #[must_use]
    pub fn storage(&self) -> Arc<dyn KeyValueStorage> {
        Arc::new(FileStorage::new(self.path()))
    }
}

/// Wrap a test password.
#[must_use]
pub fn secret(s: &str) -> SecretString {
    SecretString::from(s.to_owned())
}
