pub mod board;
pub mod catalog;
pub mod config;
pub mod ids;
pub mod query;
pub mod submission;
pub mod view;
pub mod vote;

pub mod error;
