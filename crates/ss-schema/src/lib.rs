//! Session transcript schema for session-share.
//!
//! This crate defines the wire types for a shared agent session transcript:
//! - The `Transcript` document and its session metadata
//! - The closed set of entry variants (`SessionEntry`)
//! - Tool output payloads and the recursive `JsonValue` tree they carry
//!
//! Transcripts are produced by an ingestion/conversion layer from an
//! external agent's raw log format and consumed by the sanitizer and the
//! serving layer. Schema conformance is checked here, at the boundary:
//! downstream consumers may assume a well-formed document.

pub mod entry;
pub mod error;
pub mod session;
pub mod value;

pub use entry::{
    EditFileEntry, MessageEntry, MessageImage, MessageMeta, MessageRole, PlanEntry, PlanStatus,
    QuestionAnswer, QuestionnaireEntry, SessionEntry, SummaryEntry, TaskEntry, ThinkingEntry,
    TodoItem, TodoListEntry, TodoStatus, ToolCallEntry, ToolIssuer, ToolOutput, WriteFileEntry,
};
pub use error::{Result, SchemaError};
pub use session::{AgentInfo, EnvironmentInfo, SessionMeta, Transcript, SCHEMA_VERSION};
pub use value::JsonValue;
