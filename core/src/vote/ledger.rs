use crate::catalog::{Catalog, UserVote, VoteDirection};
use crate::ids::now_rfc3339_utc;
use serde::{Deserialize, Serialize};

/// Outcome of one locally applied vote.
///
/// Carries enough to confirm the vote against a server later, or to undo it
/// by applying `-delta`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteReceipt {
    pub ts_utc: String, // RFC3339 UTC string
    pub suggestion_id: String,
    pub direction: VoteDirection,
    pub previous: UserVote,
    pub current: UserVote,
    pub delta: i64,
    pub votes: i64,
}

/// Next vote state and score delta when the voter clicks `direction`.
pub fn vote_transition(current: UserVote, direction: VoteDirection) -> (UserVote, i64) {
    match current {
        None => (Some(direction), direction.unit()),
        Some(prev) if prev == direction => (None, -direction.unit()),
        Some(_) => (Some(direction), 2 * direction.unit()),
    }
}

/// Applies votes to catalog suggestions and remembers each receipt.
#[derive(Debug, Clone, Default)]
pub struct VoteLedger {
    receipts: Vec<VoteReceipt>,
}

impl VoteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` (and changes nothing) when `suggestion_id` is unknown or
    /// the new score would overflow.
    pub fn apply(
        &mut self,
        catalog: &mut Catalog,
        suggestion_id: &str,
        direction: VoteDirection,
    ) -> Option<VoteReceipt> {
        let Some(suggestion) = catalog.suggestion_mut(suggestion_id) else {
            tracing::warn!(suggestion_id, "vote ignored: unknown suggestion");
            return None;
        };
        let previous = suggestion.user_voted;
        let (current, delta) = vote_transition(previous, direction);
        let Some(votes) = suggestion.votes.checked_add(delta) else {
            tracing::warn!(suggestion_id, delta, "vote ignored: score out of range");
            return None;
        };
        suggestion.user_voted = current;
        suggestion.votes = votes;

        let receipt = VoteReceipt {
            ts_utc: now_rfc3339_utc(),
            suggestion_id: suggestion.id.clone(),
            direction,
            previous,
            current,
            delta,
            votes: suggestion.votes,
        };
        tracing::info!(
            suggestion_id,
            ?direction,
            delta,
            votes = receipt.votes,
            "vote applied"
        );
        self.receipts.push(receipt.clone());
        Some(receipt)
    }

    pub fn receipts(&self) -> &[VoteReceipt] {
        &self.receipts
    }

    /// Net score change this session has applied to one suggestion.
    pub fn net_delta(&self, suggestion_id: &str) -> i64 {
        self.receipts
            .iter()
            .filter(|r| r.suggestion_id == suggestion_id)
            .map(|r| r.delta)
            .sum()
    }
}
