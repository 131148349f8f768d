pub mod engine;
pub mod session;

pub use engine::{filter_topics, sort_suggestions};
pub use session::{SessionState, SortMode, SubmissionForm, TopicFilter};
