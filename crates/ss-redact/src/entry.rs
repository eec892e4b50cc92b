//! Transcript entry and session sanitization.
//!
//! One arm per entry variant: each sanitizes exactly the free-text fields of
//! that variant and passes every structural/metadata field through unchanged
//! (paths, names, roles, statuses, ids, timestamps, images, diff metadata).
//! The match is exhaustive, so adding an entry variant forces an update here.

use crate::engine::Sanitizer;
use ss_schema::{
    EditFileEntry, MessageEntry, PlanEntry, QuestionAnswer, QuestionnaireEntry, SessionEntry,
    SummaryEntry, TaskEntry, ThinkingEntry, TodoItem, TodoListEntry, ToolCallEntry, ToolOutput,
    Transcript, WriteFileEntry,
};

impl Sanitizer {
    /// Sanitize every entry of a transcript.
    ///
    /// Returns a new document; schema version, agent, session metadata,
    /// entry count, entry order, and variant tags are all preserved. Only
    /// free-text content is ever narrowed.
    pub fn sanitize_session(&self, transcript: &Transcript) -> Transcript {
        let entries = transcript
            .entries
            .iter()
            .map(|entry| self.sanitize_entry(entry))
            .collect();

        tracing::debug!(
            session = %transcript.meta.id,
            entries = transcript.entries.len(),
            "sanitized session transcript"
        );

        Transcript {
            schema_version: transcript.schema_version.clone(),
            agent: transcript.agent.clone(),
            meta: transcript.meta.clone(),
            entries,
        }
    }

    /// Sanitize a single entry according to its variant.
    pub fn sanitize_entry(&self, entry: &SessionEntry) -> SessionEntry {
        match entry {
            SessionEntry::Message(e) => SessionEntry::Message(self.sanitize_message(e)),
            SessionEntry::Thinking(e) => SessionEntry::Thinking(self.sanitize_thinking(e)),
            SessionEntry::ToolCall(e) => SessionEntry::ToolCall(self.sanitize_tool_call(e)),
            SessionEntry::Summary(e) => SessionEntry::Summary(self.sanitize_summary(e)),
            SessionEntry::WriteFile(e) => SessionEntry::WriteFile(self.sanitize_write_file(e)),
            SessionEntry::EditFile(e) => SessionEntry::EditFile(self.sanitize_edit_file(e)),
            SessionEntry::TodoList(e) => SessionEntry::TodoList(self.sanitize_todo_list(e)),
            SessionEntry::Task(e) => SessionEntry::Task(self.sanitize_task(e)),
            SessionEntry::Plan(e) => SessionEntry::Plan(self.sanitize_plan(e)),
            SessionEntry::Questionnaire(e) => {
                SessionEntry::Questionnaire(self.sanitize_questionnaire(e))
            }
        }
    }

    fn sanitize_string_list(&self, content: &[String]) -> Vec<String> {
        content.iter().map(|part| self.sanitize_text(part)).collect()
    }

    fn sanitize_opt(&self, text: &Option<String>) -> Option<String> {
        text.as_ref().map(|t| self.sanitize_text(t))
    }

    fn sanitize_message(&self, entry: &MessageEntry) -> MessageEntry {
        MessageEntry {
            content: self.sanitize_string_list(&entry.content),
            ..entry.clone()
        }
    }

    fn sanitize_thinking(&self, entry: &ThinkingEntry) -> ThinkingEntry {
        ThinkingEntry {
            content: self.sanitize_string_list(&entry.content),
            description: self.sanitize_opt(&entry.description),
            ..entry.clone()
        }
    }

    fn sanitize_tool_call(&self, entry: &ToolCallEntry) -> ToolCallEntry {
        ToolCallEntry {
            input: self.sanitize_value(&entry.input),
            result: entry.result.as_ref().map(|r| self.sanitize_tool_output(r)),
            description: self.sanitize_opt(&entry.description),
            ..entry.clone()
        }
    }

    fn sanitize_tool_output(&self, output: &ToolOutput) -> ToolOutput {
        match output {
            ToolOutput::Text { text } => ToolOutput::Text {
                text: self.sanitize_text(text),
            },
            ToolOutput::Json { data } => ToolOutput::Json {
                data: self.sanitize_value(data),
            },
            ToolOutput::Error { message, data } => ToolOutput::Error {
                message: self.sanitize_text(message),
                data: data.as_ref().map(|d| self.sanitize_value(d)),
            },
        }
    }

    fn sanitize_summary(&self, entry: &SummaryEntry) -> SummaryEntry {
        SummaryEntry {
            content: self.sanitize_text(&entry.content),
            ..entry.clone()
        }
    }

    fn sanitize_write_file(&self, entry: &WriteFileEntry) -> WriteFileEntry {
        WriteFileEntry {
            content: self.sanitize_text(&entry.content),
            ..entry.clone()
        }
    }

    fn sanitize_edit_file(&self, entry: &EditFileEntry) -> EditFileEntry {
        EditFileEntry {
            old_content: self.sanitize_text(&entry.old_content),
            new_content: self.sanitize_text(&entry.new_content),
            ..entry.clone()
        }
    }

    fn sanitize_todo_list(&self, entry: &TodoListEntry) -> TodoListEntry {
        TodoListEntry {
            todos: entry
                .todos
                .iter()
                .map(|todo| TodoItem {
                    content: self.sanitize_text(&todo.content),
                    status: todo.status,
                })
                .collect(),
            ..entry.clone()
        }
    }

    fn sanitize_task(&self, entry: &TaskEntry) -> TaskEntry {
        TaskEntry {
            content: self.sanitize_string_list(&entry.content),
            // Nested tool calls go through the same path as top-level ones.
            tool_calls: entry.tool_calls.as_ref().map(|calls| {
                calls
                    .iter()
                    .map(|call| self.sanitize_tool_call(call))
                    .collect()
            }),
            ..entry.clone()
        }
    }

    fn sanitize_plan(&self, entry: &PlanEntry) -> PlanEntry {
        PlanEntry {
            content: self.sanitize_text(&entry.content),
            feedback: self.sanitize_opt(&entry.feedback),
            ..entry.clone()
        }
    }

    fn sanitize_questionnaire(&self, entry: &QuestionnaireEntry) -> QuestionnaireEntry {
        QuestionnaireEntry {
            questions: entry
                .questions
                .iter()
                .map(|qa| QuestionAnswer {
                    question: self.sanitize_text(&qa.question),
                    answer: self.sanitize_opt(&qa.answer),
                })
                .collect(),
            ..entry.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redact::REDACTION_PLACEHOLDER;

    fn entry_from_json(raw: &str) -> SessionEntry {
        serde_json::from_str(raw).unwrap()
    }

    fn sanitize(raw: &str) -> SessionEntry {
        Sanitizer::shared().sanitize_entry(&entry_from_json(raw))
    }

    #[test]
    fn test_message_content_sanitized() {
        let out = sanitize(
            r#"{"type":"message","role":"user","content":["Here is my API key: sk-test123456789012345678901234"]}"#,
        );
        match out {
            SessionEntry::Message(e) => {
                assert_eq!(
                    e.content[0],
                    format!("Here is my API key: {}", REDACTION_PLACEHOLDER)
                );
            }
            other => panic!("wrong variant: {}", other.kind()),
        }
    }

    #[test]
    fn test_thinking_description_sanitized() {
        let out = sanitize(
            r#"{"type":"thinking","description":"checking API_KEY=secretvalue12345678","content":["The user provided API_KEY=secretvalue12345678"]}"#,
        );
        match out {
            SessionEntry::Thinking(e) => {
                assert!(e.description.unwrap().contains(REDACTION_PLACEHOLDER));
                assert!(e.content[0].contains(REDACTION_PLACEHOLDER));
            }
            other => panic!("wrong variant: {}", other.kind()),
        }
    }

    #[test]
    fn test_tool_call_input_and_result_sanitized() {
        let out = sanitize(
            r#"{"type":"tool_call","name":"Bash","input":{"command":"export API_KEY=mysecretkey1234567890"},"result":{"type":"text","text":"Key set to sk-abcdef123456789012345678"}}"#,
        );
        match out {
            SessionEntry::ToolCall(e) => {
                assert_eq!(e.name, "Bash");
                let command = e.input.as_object().unwrap()["command"].as_str().unwrap();
                assert!(command.contains(REDACTION_PLACEHOLDER));
                match e.result.unwrap() {
                    ToolOutput::Text { text } => {
                        assert!(text.contains(REDACTION_PLACEHOLDER))
                    }
                    other => panic!("wrong output variant: {:?}", other),
                }
            }
            other => panic!("wrong variant: {}", other.kind()),
        }
    }

    #[test]
    fn test_tool_error_output_sanitized() {
        let out = sanitize(
            r#"{"type":"tool_call","name":"Fetch","input":null,"result":{"type":"error","message":"auth failed for Bearer abc123def456ghi789jkl012mno345","data":{"url":"postgres://user:pass@db/x"}}}"#,
        );
        match out {
            SessionEntry::ToolCall(e) => match e.result.unwrap() {
                ToolOutput::Error { message, data } => {
                    assert!(message.contains(REDACTION_PLACEHOLDER));
                    let url = data.unwrap().as_object().unwrap()["url"]
                        .as_str()
                        .unwrap()
                        .to_string();
                    assert_eq!(url, REDACTION_PLACEHOLDER);
                }
                other => panic!("wrong output variant: {:?}", other),
            },
            other => panic!("wrong variant: {}", other.kind()),
        }
    }

    #[test]
    fn test_edit_file_sides_independent() {
        let out = sanitize(
            r#"{"type":"edit_file","path":"config.js","oldContent":"const key = \"placeholder\";","newContent":"const key = \"sk-realkey1234567890123456789012\";"}"#,
        );
        match out {
            SessionEntry::EditFile(e) => {
                assert_eq!(e.path, "config.js");
                assert!(!e.old_content.contains(REDACTION_PLACEHOLDER));
                assert!(e.new_content.contains(REDACTION_PLACEHOLDER));
                assert!(!e.new_content.contains("sk-realkey"));
            }
            other => panic!("wrong variant: {}", other.kind()),
        }
    }

    #[test]
    fn test_todo_list_selective() {
        let out = sanitize(
            r#"{"type":"todo_list","todos":[{"content":"Add API_KEY=secret1234567890123456 to env","status":"pending"},{"content":"Test the feature","status":"completed"}]}"#,
        );
        match out {
            SessionEntry::TodoList(e) => {
                assert!(e.todos[0].content.contains(REDACTION_PLACEHOLDER));
                assert_eq!(e.todos[1].content, "Test the feature");
            }
            other => panic!("wrong variant: {}", other.kind()),
        }
    }

    #[test]
    fn test_task_nested_tool_calls_sanitized() {
        let out = sanitize(
            r#"{"type":"task","name":"explore","content":["Found config with API_KEY=secretvalue12345678901"],"toolCalls":[{"type":"tool_call","name":"Read","input":{"path":"/etc/app"},"result":{"type":"text","text":"password=hunter2hunter2"}}]}"#,
        );
        match out {
            SessionEntry::Task(e) => {
                assert!(e.content[0].contains(REDACTION_PLACEHOLDER));
                let call = &e.tool_calls.unwrap()[0];
                assert_eq!(
                    call.input.as_object().unwrap()["path"].as_str(),
                    Some("/etc/app")
                );
                match call.result.as_ref().unwrap() {
                    ToolOutput::Text { text } => {
                        assert!(text.contains(REDACTION_PLACEHOLDER))
                    }
                    other => panic!("wrong output variant: {:?}", other),
                }
            }
            other => panic!("wrong variant: {}", other.kind()),
        }
    }

    #[test]
    fn test_plan_feedback_sanitized() {
        let out = sanitize(
            r#"{"type":"plan","status":"approved","title":"Setup API","content":"Configure API_KEY=supersecretvalue123456789","feedback":"Also add SECRET_KEY=anothersecret12345678901"}"#,
        );
        match out {
            SessionEntry::Plan(e) => {
                assert_eq!(e.title, "Setup API");
                assert!(e.content.contains(REDACTION_PLACEHOLDER));
                assert!(e.feedback.unwrap().contains(REDACTION_PLACEHOLDER));
            }
            other => panic!("wrong variant: {}", other.kind()),
        }
    }

    #[test]
    fn test_questionnaire_selective() {
        let out = sanitize(
            r#"{"type":"questionnaire","questions":[{"question":"What is your API key?","answer":"sk-myapikey12345678901234567890"},{"question":"What is your name?","answer":"John"}]}"#,
        );
        match out {
            SessionEntry::Questionnaire(e) => {
                assert_eq!(e.questions[0].question, "What is your API key?");
                assert!(e.questions[0]
                    .answer
                    .as_deref()
                    .unwrap()
                    .contains(REDACTION_PLACEHOLDER));
                assert_eq!(e.questions[1].answer.as_deref(), Some("John"));
            }
            other => panic!("wrong variant: {}", other.kind()),
        }
    }

    #[test]
    fn test_identity_metadata_untouched() {
        let out = sanitize(
            r#"{"type":"summary","id":"e42","createdAt":"2025-03-01T09:30:00Z","parentId":"e41","content":"set PASSWORD=verysecret99 in ci"}"#,
        );
        match out {
            SessionEntry::Summary(e) => {
                assert_eq!(e.id.as_deref(), Some("e42"));
                assert_eq!(e.created_at.as_deref(), Some("2025-03-01T09:30:00Z"));
                assert_eq!(e.parent_id.as_deref(), Some("e41"));
                assert!(e.content.contains(REDACTION_PLACEHOLDER));
            }
            other => panic!("wrong variant: {}", other.kind()),
        }
    }
}
