//! The transcript document and its session metadata.

use crate::entry::SessionEntry;
use crate::error::{Result, SchemaError};
use serde::{Deserialize, Serialize};

/// Current transcript schema major version.
pub const SCHEMA_VERSION: &str = "1";

/// The agent that produced a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Where the session ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_branch: Option<String>,
}

/// Session-level metadata.
///
/// Timestamps are kept as opaque strings: they arrive from arbitrary agents
/// and must round-trip byte-for-byte through every transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMeta {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentInfo>,
}

impl SessionMeta {
    /// Minimal metadata with just a session id.
    pub fn new(id: impl Into<String>) -> Self {
        SessionMeta {
            id: id.into(),
            title: None,
            started_at: None,
            models: None,
            environment: None,
        }
    }
}

/// A full session transcript document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    pub schema_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<AgentInfo>,
    pub meta: SessionMeta,
    pub entries: Vec<SessionEntry>,
}

impl Transcript {
    /// An empty transcript at the current schema version.
    pub fn new(meta: SessionMeta) -> Self {
        Transcript {
            schema_version: SCHEMA_VERSION.to_string(),
            agent: None,
            meta,
            entries: Vec::new(),
        }
    }

    /// Parse a transcript from its JSON wire form.
    ///
    /// This is the schema-conformance boundary: consumers of the returned
    /// value may assume a well-formed document at a supported version.
    pub fn from_json(raw: &str) -> Result<Transcript> {
        let transcript: Transcript = serde_json::from_str(raw)?;
        let major = transcript
            .schema_version
            .split('.')
            .next()
            .unwrap_or(transcript.schema_version.as_str());
        if major != SCHEMA_VERSION {
            return Err(SchemaError::UnsupportedVersion(transcript.schema_version));
        }
        Ok(transcript)
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
