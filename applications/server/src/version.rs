//! Version reporting
//!
//! Resolves the build and deployment identity reported by `/` and
//! `/api/version`. Each value comes from the first source that has it:
//! configuration (file or `ROSTER_*` env), then a plain environment variable
//! set by CI, then build metadata or a fixed default.

use crate::config::ServerConfig;
use serde::Serialize;

pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const UNKNOWN: &str = "unknown";

/// Resolved version and deployment metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub version: String,
    pub environment: String,
    pub git_commit: String,
    pub git_branch: String,
    pub build_timestamp: String,
}

impl VersionInfo {
    /// Resolve against the configuration and the process environment
    pub fn resolve(config: &ServerConfig) -> Self {
        Self::resolve_with(config, |key| std::env::var(key).ok())
    }

    /// Resolve with an injected environment lookup
    pub fn resolve_with<F>(config: &ServerConfig, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let version = first_present([
            config.app.version.clone(),
            option_env!("CARGO_PKG_VERSION").map(str::to_string),
        ])
        .unwrap_or_else(|| DEFAULT_VERSION.to_string());

        let environment = first_present([config.app.profile.clone()])
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        let git_commit = first_present([config.git.commit.clone(), env("GIT_COMMIT")])
            .unwrap_or_else(|| UNKNOWN.to_string());

        let git_branch = first_present([config.git.branch.clone(), env("GIT_BRANCH")])
            .unwrap_or_else(|| UNKNOWN.to_string());

        let build_timestamp = first_present([config.build.timestamp.clone(), env("BUILD_TIMESTAMP")])
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis().to_string());

        Self {
            version,
            environment,
            git_commit,
            git_branch,
            build_timestamp,
        }
    }
}

// Blank values count as unset
fn first_present<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}
