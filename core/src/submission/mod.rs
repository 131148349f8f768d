pub mod handler;

pub use handler::{build_suggestion, parse_tags_csv, submit};
