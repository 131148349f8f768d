use crate::catalog::{Catalog, Suggestion, Topic, VoteDirection, WorkItem};
use crate::ids::date_of_millis;
use crate::query::engine::{suggestions_for_session, topics_for_session};
use crate::query::{SessionState, SubmissionForm};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TopicCard {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
    pub badge_label: String,
}

impl From<&Topic> for TopicCard {
    fn from(t: &Topic) -> Self {
        Self {
            id: t.id.clone(),
            title: t.title.clone(),
            tags: t.tags.clone(),
            badge_label: t.status.badge_label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SuggestionCard {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub tags: Vec<String>,
    pub votes: i64,
    pub upvoted: bool,
    pub downvoted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>, // YYYY-MM-DD
}

impl From<&Suggestion> for SuggestionCard {
    fn from(s: &Suggestion) -> Self {
        Self {
            id: s.id.clone(),
            title: s.title.clone(),
            details: s.details.clone(),
            tags: s.tags.clone(),
            votes: s.votes,
            upvoted: s.user_voted == Some(VoteDirection::Up),
            downvoted: s.user_voted == Some(VoteDirection::Down),
            created_on: date_of_millis(s.created_at),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WorkCard {
    pub id: String,
    pub title: String,
    pub stage_label: String,
    pub progress: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&WorkItem> for WorkCard {
    fn from(w: &WorkItem) -> Self {
        Self {
            id: w.id.clone(),
            title: w.title.clone(),
            stage_label: w.stage.as_str().to_string(),
            progress: w.progress,
            notes: w.notes.clone(),
        }
    }
}

/// Render-ready snapshot of the whole board for one session state.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BoardView {
    pub query: String,
    pub topic_filter: String,
    pub sort: String,
    pub topics: Vec<TopicCard>,
    pub topic_count: usize,
    pub suggestions: Vec<SuggestionCard>,
    pub suggestion_count: usize,
    pub work: Vec<WorkCard>,
    pub form: SubmissionForm,
    pub can_submit: bool,
}

impl BoardView {
    pub fn build(catalog: &Catalog, session: &SessionState) -> Self {
        let topics: Vec<TopicCard> = topics_for_session(catalog.topics(), session)
            .into_iter()
            .map(TopicCard::from)
            .collect();
        let suggestions: Vec<SuggestionCard> =
            suggestions_for_session(catalog.suggestions(), session)
                .into_iter()
                .map(SuggestionCard::from)
                .collect();
        Self {
            query: session.query.clone(),
            topic_filter: session.topic_filter.to_string(),
            sort: session.sort.to_string(),
            topic_count: topics.len(),
            topics,
            suggestion_count: suggestions.len(),
            suggestions,
            work: catalog.work_items().iter().map(WorkCard::from).collect(),
            form: session.form.clone(),
            can_submit: session.form.can_submit(),
        }
    }

    pub fn topic_count_label(&self) -> String {
        format!("{} items", self.topic_count)
    }

    pub fn suggestion_count_label(&self) -> String {
        format!("{} suggestions", self.suggestion_count)
    }
}
