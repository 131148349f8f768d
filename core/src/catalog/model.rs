use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TopicStatus {
    Idea,
    Queued,
    Researching,
    Recording,
    Editing,
    Published,
}

impl TopicStatus {
    pub const ALL: [TopicStatus; 6] = [
        TopicStatus::Idea,
        TopicStatus::Queued,
        TopicStatus::Researching,
        TopicStatus::Recording,
        TopicStatus::Editing,
        TopicStatus::Published,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TopicStatus::Idea => "idea",
            TopicStatus::Queued => "queued",
            TopicStatus::Researching => "researching",
            TopicStatus::Recording => "recording",
            TopicStatus::Editing => "editing",
            TopicStatus::Published => "published",
        }
    }

    /// Label shown on the status badge.
    pub fn badge_label(self) -> &'static str {
        match self {
            TopicStatus::Idea => "Idea",
            TopicStatus::Queued => "Queued",
            TopicStatus::Researching => "Researching",
            TopicStatus::Recording => "Recording",
            TopicStatus::Editing => "Editing",
            TopicStatus::Published => "Published",
        }
    }
}

impl fmt::Display for TopicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopicStatus {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TopicStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| BoardError::UnknownTopicFilter(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
    pub status: TopicStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkStage {
    Research,
    Script,
    Recording,
    Editing,
}

impl WorkStage {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkStage::Research => "research",
            WorkStage::Script => "script",
            WorkStage::Recording => "recording",
            WorkStage::Editing => "editing",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkItem {
    pub id: String,
    pub title: String,
    pub stage: WorkStage,
    pub progress: u8, // 0..=100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkItem {
    pub fn normalized(mut self) -> Self {
        self.progress = self.progress.min(100);
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Score change of a fresh vote in this direction.
    pub fn unit(self) -> i64 {
        match self {
            VoteDirection::Up => 1,
            VoteDirection::Down => -1,
        }
    }
}

impl FromStr for VoteDirection {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "up" => Ok(VoteDirection::Up),
            "down" => Ok(VoteDirection::Down),
            other => Err(BoardError::InvalidInput(format!(
                "vote direction must be up|down, got {}",
                other
            ))),
        }
    }
}

/// The session voter's current vote on a suggestion. `None` serializes as null.
pub type UserVote = Option<VoteDirection>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub tags: Vec<String>,
    pub votes: i64,
    pub created_at: i64, // unix millis
    #[serde(default)]
    pub user_voted: UserVote,
}
