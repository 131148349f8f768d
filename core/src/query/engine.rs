use super::session::{SessionState, SortMode, TopicFilter};
use crate::catalog::{Suggestion, Topic};

/// Lowercased, trimmed search needle. `None` means "match everything".
fn needle(query: &str) -> Option<String> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        None
    } else {
        Some(q)
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn any_tag_matches(tags: &[String], needle: &str) -> bool {
    tags.iter().any(|tag| contains_ci(tag, needle))
}

pub fn topic_matches(topic: &Topic, filter: TopicFilter, query: &str) -> bool {
    if !filter.admits(topic.status) {
        return false;
    }
    match needle(query) {
        None => true,
        Some(q) => contains_ci(&topic.title, &q) || any_tag_matches(&topic.tags, &q),
    }
}

pub fn suggestion_matches(suggestion: &Suggestion, query: &str) -> bool {
    match needle(query) {
        None => true,
        Some(q) => {
            contains_ci(&suggestion.title, &q)
                || any_tag_matches(&suggestion.tags, &q)
                || suggestion
                    .details
                    .as_deref()
                    .map(|d| contains_ci(d, &q))
                    .unwrap_or(false)
        }
    }
}

/// Topics admitted by `filter` and `query`, in source order.
pub fn filter_topics<'a>(topics: &'a [Topic], filter: TopicFilter, query: &str) -> Vec<&'a Topic> {
    let out: Vec<&Topic> = topics
        .iter()
        .filter(|t| topic_matches(t, filter, query))
        .collect();
    tracing::debug!(%filter, query, matched = out.len(), total = topics.len(), "filtered topics");
    out
}

/// Suggestions matching `query`, ordered by `sort`.
///
/// `sort_by` is stable: suggestions with equal keys keep collection order,
/// which puts the most recent submission first.
pub fn sort_suggestions<'a>(
    suggestions: &'a [Suggestion],
    query: &str,
    sort: SortMode,
) -> Vec<&'a Suggestion> {
    let mut out: Vec<&Suggestion> = suggestions
        .iter()
        .filter(|s| suggestion_matches(s, query))
        .collect();
    match sort {
        SortMode::Votes => out.sort_by(|a, b| b.votes.cmp(&a.votes)),
        SortMode::Newest => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
    tracing::debug!(%sort, query, matched = out.len(), total = suggestions.len(), "sorted suggestions");
    out
}

pub fn topics_for_session<'a>(topics: &'a [Topic], session: &SessionState) -> Vec<&'a Topic> {
    filter_topics(topics, session.topic_filter, &session.query)
}

pub fn suggestions_for_session<'a>(
    suggestions: &'a [Suggestion],
    session: &SessionState,
) -> Vec<&'a Suggestion> {
    sort_suggestions(suggestions, &session.query, session.sort)
}
