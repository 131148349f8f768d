pub mod model;
pub mod render;

pub use model::{BoardView, SuggestionCard, TopicCard, WorkCard};
pub use render::{render_board, render_text, BoardRenderer, TextRenderer};
