use super::model::{Suggestion, Topic, WorkItem};
use super::seed::CatalogSeed;

/// Owns the topic, work-item and suggestion collections for one session.
///
/// Reads are open to anyone holding a shared reference; the only mutations
/// are suggestion lookup for voting and prepending a new suggestion.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    topics: Vec<Topic>,
    work_items: Vec<WorkItem>,
    suggestions: Vec<Suggestion>,
}

impl Catalog {
    pub fn from_seed(seed: CatalogSeed) -> Self {
        Self {
            topics: seed.topics,
            work_items: seed.work_items,
            suggestions: seed.suggestions,
        }
    }

    pub fn sample(now_ms: i64) -> Self {
        Self::from_seed(CatalogSeed::sample(now_ms))
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn work_items(&self) -> &[WorkItem] {
        &self.work_items
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn suggestion(&self, id: &str) -> Option<&Suggestion> {
        self.suggestions.iter().find(|s| s.id == id)
    }

    pub(crate) fn suggestion_mut(&mut self, id: &str) -> Option<&mut Suggestion> {
        self.suggestions.iter_mut().find(|s| s.id == id)
    }

    /// Newest submissions go to the front regardless of the active sort mode.
    pub(crate) fn prepend_suggestion(&mut self, suggestion: Suggestion) {
        self.suggestions.insert(0, suggestion);
    }

    pub fn snapshot(&self) -> CatalogSeed {
        CatalogSeed {
            topics: self.topics.clone(),
            work_items: self.work_items.clone(),
            suggestions: self.suggestions.clone(),
        }
    }
}
