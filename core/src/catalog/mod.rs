pub mod model;
pub mod seed;
pub mod store;

pub use model::{Suggestion, Topic, TopicStatus, UserVote, VoteDirection, WorkItem, WorkStage};
pub use seed::CatalogSeed;
pub use store::Catalog;
