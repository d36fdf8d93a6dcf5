//! Shared test utilities for the CLI end-to-end tests.
//!
//! Provides a temp working directory plus the environment a backup run
//! expects, so each test only states what it changes.

use assert_cmd::cargo::cargo_bin_cmd;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    pub use super::TestEnv;
}

/// A temp working directory with a fully-populated backup environment.
///
/// The base URL points at a local port nothing listens on, so any run that
/// reaches the inventory query fails fast with a connection error — after
/// the local stages (filter validation, destination setup) have executed.
pub struct TestEnv {
    temp_dir: assert_fs::TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("failed to create temp directory"),
        }
    }

    /// Path of the temp working directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Command running in the temp directory with a valid (but
    /// unreachable) inventory environment.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = cargo_bin_cmd!("config-backup");
        cmd.current_dir(self.path())
            .env("INVENTORY_URL", "http://127.0.0.1:9")
            .env("INVENTORY_TOKEN", "test-token")
            .env("INVENTORY_FILTER", "{}")
            .env_remove("INVENTORY_SNAPSHOT")
            .env_remove("INVENTORY_VERIFY_TLS");
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
