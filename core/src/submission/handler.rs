use crate::catalog::{Catalog, Suggestion, VoteDirection};
use crate::ids::IdGenerator;
use crate::query::SubmissionForm;

/// Splits a comma-separated tag field, trimming entries and dropping empties.
/// Order is kept as typed.
pub fn parse_tags_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Builds the suggestion a form would produce, or `None` for a blank title.
/// The author's upvote is already applied.
pub fn build_suggestion(form: &SubmissionForm, id: String, now_ms: i64) -> Option<Suggestion> {
    let title = form.title.trim();
    if title.is_empty() {
        return None;
    }
    let details = form.details.trim();
    Some(Suggestion {
        id,
        title: title.to_string(),
        details: if details.is_empty() {
            None
        } else {
            Some(details.to_string())
        },
        tags: parse_tags_csv(&form.tags),
        votes: VoteDirection::Up.unit(),
        created_at: now_ms,
        user_voted: Some(VoteDirection::Up),
    })
}

/// Turns the form into a new suggestion at the front of the catalog and
/// clears the form. A blank title leaves catalog and form untouched.
pub fn submit(
    form: &mut SubmissionForm,
    catalog: &mut Catalog,
    ids: &mut IdGenerator,
    now_ms: i64,
) -> Option<Suggestion> {
    if !form.can_submit() {
        tracing::warn!("submission ignored: blank title");
        return None;
    }
    let suggestion = build_suggestion(form, ids.next_id(), now_ms)?;
    tracing::info!(
        id = %suggestion.id,
        title = %suggestion.title,
        tags = suggestion.tags.len(),
        "suggestion submitted"
    );
    catalog.prepend_suggestion(suggestion.clone());
    form.clear();
    Some(suggestion)
}
