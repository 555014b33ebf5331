//! Remote contents-API client

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use gridbook_core::{Sheet, Workbook};
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::{Deserialize, Serialize};

use crate::config::RemoteConfig;
use crate::error::{RemoteError, RemoteResult};
use crate::path::remote_path;

const ACCEPT_JSON: &str = "application/vnd.github.v3+json";

/// Response shape for the existence check
#[derive(Debug, Deserialize)]
struct ContentInfo {
    sha: String,
}

/// Error body shape used by the contents API
#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

/// PUT body for creating or updating a file
#[derive(Debug, Serialize)]
pub struct PutRequest {
    message: String,
    /// Base64-encoded file content
    content: String,
    committer: Committer,
    /// Version token; present for updates, absent for creates
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<String>,
}

#[derive(Debug, Serialize)]
struct Committer {
    name: String,
    email: String,
}

impl PutRequest {
    /// Build a PUT body from raw (not yet encoded) file content
    pub fn new(config: &RemoteConfig, message: String, content: &str, sha: Option<String>) -> Self {
        Self {
            message,
            content: encode_content(content),
            committer: Committer {
                name: config.committer_name.clone(),
                email: config.committer_email.clone(),
            },
            sha,
        }
    }
}

/// Base64-encode file content for transport
///
/// Encodes the UTF-8 bytes of the text, so non-ASCII characters survive
/// the trip.
pub fn encode_content(text: &str) -> String {
    BASE64.encode(text.as_bytes())
}

/// Per-sheet outcome of a batch save
#[derive(Debug)]
pub struct FileOutcome {
    /// Sheet name
    pub sheet: String,
    /// Remote path the save targeted
    pub path: String,
    /// Result for this file
    pub result: RemoteResult<()>,
}

/// Aggregate result of a best-effort batch save
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Per-file outcomes, in sheet order
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    /// Number of files saved successfully
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// Number of files that failed
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Whether every file saved
    pub fn is_all_ok(&self) -> bool {
        self.failed() == 0
    }
}

/// Client for pushing sheets to the remote contents API
///
/// Each save is a sequential two-step exchange (existence check, then
/// conditional write) with no retries. Callers must not start a second
/// save for the same sheet while one is outstanding; overlapping saves
/// would race on the version token.
pub struct RemoteClient {
    config: RemoteConfig,
    http: Client,
}

impl RemoteClient {
    /// Create a client, validating the configuration first
    pub fn new(config: RemoteConfig) -> RemoteResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            http: Client::new(),
        })
    }

    /// Save one sheet as a remote JSON file
    ///
    /// Returns the remote path written.
    pub fn save_sheet(&self, sheet: &Sheet) -> RemoteResult<String> {
        let path = remote_path(&self.config.prefix, sheet.name());
        let sha = self.fetch_sha(&path)?;
        let content = serde_json::to_string_pretty(sheet)?;
        let message = format!("Save sheet {}", sheet.name());

        tracing::debug!(
            path = %path,
            update = sha.is_some(),
            "Pushing sheet to remote"
        );
        self.put_file(&path, PutRequest::new(&self.config, message, &content, sha))?;
        Ok(path)
    }

    /// Save every sheet in the workbook, best-effort
    ///
    /// Sheets are pushed one at a time; a failure is recorded in the
    /// report and logged, but does not halt the remaining sheets.
    pub fn save_all(&self, workbook: &Workbook) -> BatchReport {
        let mut report = BatchReport::default();
        for sheet in workbook.sheets() {
            let path = remote_path(&self.config.prefix, sheet.name());
            let result = self.save_sheet(sheet).map(|_| ());
            if let Err(e) = &result {
                tracing::warn!(sheet = %sheet.name(), path = %path, "Save failed: {}", e);
            }
            report.outcomes.push(FileOutcome {
                sheet: sheet.name().to_string(),
                path,
                result,
            });
        }
        report
    }

    /// Existence check: fetch the current version token for `path`
    ///
    /// 200 yields the token, 404 means the file does not exist, and any
    /// other status aborts the save as a protocol error.
    fn fetch_sha(&self, path: &str) -> RemoteResult<Option<String>> {
        let response = self.request(self.http.get(self.contents_url(path)))?;
        match response.status().as_u16() {
            200 => {
                let info: ContentInfo = response.json()?;
                Ok(Some(info.sha))
            }
            404 => Ok(None),
            status => Err(RemoteError::Protocol(status)),
        }
    }

    /// Conditional write of `body` to `path`
    fn put_file(&self, path: &str, body: PutRequest) -> RemoteResult<()> {
        let response = self.request(self.http.put(self.contents_url(path)).json(&body))?;
        match response.status().as_u16() {
            200 | 201 => Ok(()),
            status => {
                let message = response
                    .json::<ApiError>()
                    .ok()
                    .filter(|e| !e.message.is_empty())
                    .map(|e| e.message)
                    .unwrap_or_else(|| format!("HTTP {}", status));
                Err(RemoteError::Remote(message))
            }
        }
    }

    fn request(&self, builder: reqwest::blocking::RequestBuilder) -> RemoteResult<Response> {
        Ok(builder
            .header(ACCEPT, ACCEPT_JSON)
            .header(AUTHORIZATION, format!("token {}", self.config.token))
            .send()?)
    }

    fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.config.api_base,
            self.config.owner,
            self.config.repo,
            urlencoding::encode(path)
        )
    }
}
