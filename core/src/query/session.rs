use crate::catalog::TopicStatus;
use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TopicFilter {
    #[default]
    All,
    #[serde(untagged)]
    Status(TopicStatus),
}

impl TopicFilter {
    pub fn admits(self, status: TopicStatus) -> bool {
        match self {
            TopicFilter::All => true,
            TopicFilter::Status(s) => s == status,
        }
    }
}

impl FromStr for TopicFilter {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "all" {
            return Ok(TopicFilter::All);
        }
        s.parse::<TopicStatus>().map(TopicFilter::Status)
    }
}

impl fmt::Display for TopicFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopicFilter::All => f.write_str("all"),
            TopicFilter::Status(s) => f.write_str(s.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    Votes,
    Newest,
}

impl FromStr for SortMode {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "votes" => Ok(SortMode::Votes),
            "newest" => Ok(SortMode::Newest),
            other => Err(BoardError::UnknownSortMode(other.to_string())),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::Votes => f.write_str("votes"),
            SortMode::Newest => f.write_str("newest"),
        }
    }
}

/// Raw contents of the "suggest a topic" form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub tags: String, // comma-separated
}

impl SubmissionForm {
    pub fn new(title: &str, details: &str, tags: &str) -> Self {
        Self {
            title: title.to_string(),
            details: details.to_string(),
            tags: tags.to_string(),
        }
    }

    /// Submit control is enabled only for a non-blank title.
    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.details.clear();
        self.tags.clear();
    }
}

/// Everything the user has typed or selected in the current session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionState {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub topic_filter: TopicFilter,
    #[serde(default)]
    pub sort: SortMode,
    #[serde(default)]
    pub form: SubmissionForm,
}

impl SessionState {
    pub fn new(topic_filter: TopicFilter, sort: SortMode) -> Self {
        Self {
            topic_filter,
            sort,
            ..Self::default()
        }
    }
}
