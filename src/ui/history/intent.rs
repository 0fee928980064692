use crate::stories::Story;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum HistoryIntent {
    /// A search succeeded; remember it at the front.
    Record { term: String, stories: Vec<Story> },
    MoveUp,
    MoveDown,
}

impl Intent for HistoryIntent {}
