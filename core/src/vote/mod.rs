pub mod ledger;

pub use ledger::{vote_transition, VoteLedger, VoteReceipt};
