//! Remote sync configuration

use crate::error::{RemoteError, RemoteResult};

/// Default API endpoint
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Configuration for the remote contents API
///
/// `token`, `owner` and `repo` must all be present before any network
/// call is made; `prefix` is an optional directory prefix for the
/// uploaded files.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Bearer-style access token
    pub token: String,
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Path prefix inside the repository (may be empty)
    pub prefix: String,
    /// API base URL
    pub api_base: String,
    /// Committer name recorded on each write
    pub committer_name: String,
    /// Committer email recorded on each write
    pub committer_email: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            owner: String::new(),
            repo: String::new(),
            prefix: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            committer_name: "web-app".to_string(),
            committer_email: "noreply@example.com".to_string(),
        }
    }
}

impl RemoteConfig {
    /// Check that the fields required for any remote call are present
    ///
    /// Fails naming the first missing field, before any network I/O.
    pub fn validate(&self) -> RemoteResult<()> {
        if self.token.trim().is_empty() {
            return Err(RemoteError::MissingConfig("token"));
        }
        if self.owner.trim().is_empty() {
            return Err(RemoteError::MissingConfig("owner"));
        }
        if self.repo.trim().is_empty() {
            return Err(RemoteError::MissingConfig("repo"));
        }
        Ok(())
    }
}
