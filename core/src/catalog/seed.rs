use super::model::{Suggestion, Topic, TopicStatus, WorkItem, WorkStage};
use crate::error::{BoardError, BoardResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Serialized shape of a catalog, used both for the built-in sample data and
/// for seed files.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogSeed {
    #[serde(default)]
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub work_items: Vec<WorkItem>,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

impl CatalogSeed {
    /// Built-in sample data. Suggestion timestamps are relative to `now_ms`.
    pub fn sample(now_ms: i64) -> Self {
        Self {
            topics: vec![
                topic(
                    "t1",
                    "React Server Components in Practice",
                    &["react", "nextjs"],
                    TopicStatus::Researching,
                ),
                topic(
                    "t2",
                    "PostgreSQL Indexing 101",
                    &["postgres", "db"],
                    TopicStatus::Queued,
                ),
                topic(
                    "t3",
                    "Secure JWT Auth Flows",
                    &["security", "auth"],
                    TopicStatus::Idea,
                ),
                topic(
                    "t4",
                    "Kubernetes for Homelabs (NitroLab)",
                    &["k8s", "homelab"],
                    TopicStatus::Editing,
                ),
                topic(
                    "t5",
                    "Shadcn UI Patterns",
                    &["ui", "react"],
                    TopicStatus::Published,
                ),
            ],
            work_items: vec![
                WorkItem {
                    id: "w1".to_string(),
                    title: "Kubernetes for Homelabs (NitroLab)".to_string(),
                    stage: WorkStage::Editing,
                    progress: 78,
                    notes: Some("B-roll pass, captions next.".to_string()),
                },
                WorkItem {
                    id: "w2".to_string(),
                    title: "RSC in Next 15: Data & Caching".to_string(),
                    stage: WorkStage::Research,
                    progress: 35,
                    notes: Some("Prototyping examples.".to_string()),
                },
            ],
            suggestions: vec![
                Suggestion {
                    id: "s1".to_string(),
                    title: "Monorepos with pnpm + Turbo + CI".to_string(),
                    details: Some("Real-world setup with caching and artifacts.".to_string()),
                    tags: tags(&["tooling", "ci"]),
                    votes: 23,
                    created_at: now_ms - 12 * HOUR_MS,
                    user_voted: None,
                },
                Suggestion {
                    id: "s2".to_string(),
                    title: "SQLite in Kubernetes for ARR stack".to_string(),
                    details: Some("Backups, persistence, and VPN pod layout.".to_string()),
                    tags: tags(&["k8s", "homelab"]),
                    votes: 41,
                    created_at: now_ms - 2 * DAY_MS,
                    user_voted: None,
                },
                Suggestion {
                    id: "s3".to_string(),
                    title: "Dark-mode theming with shadcn + Tailwind".to_string(),
                    details: None,
                    tags: tags(&["ui", "tailwind"]),
                    votes: 17,
                    created_at: now_ms - 30 * MINUTE_MS,
                    user_voted: None,
                },
            ],
        }
    }

    pub fn from_json_str(raw: &str) -> BoardResult<Self> {
        let seed: CatalogSeed = serde_json::from_str(raw)?;
        seed.validated()
    }

    pub fn load(path: impl AsRef<Path>) -> BoardResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| BoardError::Seed(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json_str(&raw)
    }

    fn validated(mut self) -> BoardResult<Self> {
        check_unique("topic", self.topics.iter().map(|t| t.id.as_str()))?;
        check_unique("work item", self.work_items.iter().map(|w| w.id.as_str()))?;
        check_unique("suggestion", self.suggestions.iter().map(|s| s.id.as_str()))?;
        if let Some(s) = self.suggestions.iter().find(|s| s.title.trim().is_empty()) {
            return Err(BoardError::Seed(format!(
                "suggestion {} has an empty title",
                s.id
            )));
        }
        self.work_items = self
            .work_items
            .into_iter()
            .map(WorkItem::normalized)
            .collect();
        Ok(self)
    }
}

fn check_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> BoardResult<()> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(BoardError::Seed(format!("duplicate {} id {}", kind, id)));
        }
    }
    Ok(())
}

fn topic(id: &str, title: &str, tag_list: &[&str], status: TopicStatus) -> Topic {
    Topic {
        id: id.to_string(),
        title: title.to_string(),
        tags: tags(tag_list),
        status,
    }
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::CatalogSeed;

    #[test]
    fn seed_file_rejects_duplicate_ids() {
        let raw = r#"{"topics":[
            {"id":"t1","title":"A","tags":[],"status":"idea"},
            {"id":"t1","title":"B","tags":[],"status":"queued"}
        ]}"#;
        let err = CatalogSeed::from_json_str(raw).unwrap_err();
        assert!(err.to_string().contains("duplicate topic id t1"));
    }

    #[test]
    fn missing_seed_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent_seed.json");
        let err = CatalogSeed::load(&path).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("seed error: cannot read"));
        assert!(msg.contains("absent_seed.json"));
    }

    #[test]
    fn seed_file_clamps_work_progress() {
        let raw = r#"{"work_items":[
            {"id":"w9","title":"Overdone","stage":"script","progress":140}
        ]}"#;
        let seed = CatalogSeed::from_json_str(raw).unwrap();
        assert_eq!(seed.work_items[0].progress, 100);
        assert!(seed.work_items[0].notes.is_none());
    }
}
