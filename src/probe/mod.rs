// src/probe/mod.rs
// HTTP probe client: runs the check table against a target base URL.

use anyhow::Result;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::checks::{Check, CHECKS};
use crate::config::ProbeConfig;
use crate::report::CheckReport;

/// Why a single check failed. Connectivity problems and content
/// mismatches are recorded the same way in the tally.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("GET {path}: {source}")]
    Connect {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {path}: expected status 200, got {status}")]
    Status { path: String, status: StatusCode },

    #[error("GET {path}: body is missing {needle:?}")]
    MissingContent { path: String, needle: String },
}

pub struct ProbeClient {
    http: reqwest::Client,
    config: ProbeConfig,
}

impl ProbeClient {
    /// Build a probe client with one shared connection-reusing HTTP
    /// client and an explicit per-request timeout.
    pub fn new(config: ProbeConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    /// Run every step of one check. Fails on the first step that cannot
    /// connect, returns a non-200 status, or is missing a required
    /// substring (byte-level containment, no HTML parsing).
    pub async fn run_check(&self, check: &Check) -> Result<(), CheckError> {
        for step in check.steps {
            let url = self.config.route(step.path);
            debug!(%url, check = check.name, "probing");

            let response = self.http.get(&url).send().await.map_err(|source| {
                CheckError::Connect {
                    path: step.path.to_string(),
                    source,
                }
            })?;

            let status = response.status();
            if status != StatusCode::OK {
                return Err(CheckError::Status {
                    path: step.path.to_string(),
                    status,
                });
            }

            let body = response.bytes().await.map_err(|source| {
                CheckError::Connect {
                    path: step.path.to_string(),
                    source,
                }
            })?;

            for needle in step.requires {
                if !contains(&body, needle.as_bytes()) {
                    return Err(CheckError::MissingContent {
                        path: step.path.to_string(),
                        needle: needle.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Run the full check table in order, printing one result line per
/// check. A failing check records its error and the run continues, so
/// one dead route never hides the state of the others.
pub async fn run_all_checks(client: &ProbeClient) -> CheckReport {
    let mut report = CheckReport::new();
    for check in CHECKS {
        match client.run_check(check).await {
            Ok(()) => {
                println!("✅ {}", check.label);
                report.record_pass();
            }
            Err(err) => {
                println!("❌ {} failed: {err}", check.name);
                report.record_fail(format!("{}: {err}", check.name));
            }
        }
    }
    report
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.windows(needle.len()).any(|window| window == needle)
}
