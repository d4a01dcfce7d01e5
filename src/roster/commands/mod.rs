use crate::model::Student;

pub mod add;
pub mod delete;
pub mod enroll;
pub mod find;
pub mod list;
pub mod persist;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command. The CLI decides how to render it.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_ids: Vec<u32>,
    pub listed_students: Vec<Student>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_ids(mut self, ids: Vec<u32>) -> Self {
        self.affected_ids = ids;
        self
    }

    pub fn with_listed_students(mut self, students: Vec<Student>) -> Self {
        self.listed_students = students;
        self
    }

    /// True when any message is an error.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
