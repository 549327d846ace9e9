use crate::config::HomeseekConfig;
use crate::filter::IgnoredCriterion;
use crate::model::PropertyRecord;

pub mod config;
pub mod favorites;
pub mod search;
pub mod view;

pub use view::DetailOutcome;

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

/// Structured outcome of a command, rendered by the UI layer.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records to show as a listing (search hits, favorites).
    pub listed: Vec<PropertyRecord>,
    /// Records changed by a mutation.
    pub affected: Vec<PropertyRecord>,
    pub detail: Option<DetailOutcome>,
    /// Search form input that was dropped as unusable.
    pub ignored: Vec<IgnoredCriterion>,
    pub config: Option<HomeseekConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, records: Vec<PropertyRecord>) -> Self {
        self.listed = records;
        self
    }

    pub fn with_affected(mut self, records: Vec<PropertyRecord>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_detail(mut self, detail: DetailOutcome) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn with_config(mut self, config: HomeseekConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}
