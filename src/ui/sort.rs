//! Sort view over the story list.
//!
//! Derived on every render, never stored. Text columns sort ascending;
//! numeric columns sort ascending and are then reversed, so they read
//! highest first. The user toggle reverses whatever that produced.

use crate::stories::Story;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    None,
    Title,
    Author,
    Comments,
    Points,
}

impl SortKey {
    /// Columns that can be selected from the list header, in display order.
    pub const COLUMNS: [SortKey; 4] = [
        SortKey::Title,
        SortKey::Author,
        SortKey::Comments,
        SortKey::Points,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::None => "None",
            SortKey::Title => "Title",
            SortKey::Author => "Author",
            SortKey::Comments => "Comments",
            SortKey::Points => "Points",
        }
    }

    /// True for keys whose base ordering is ascending-then-reversed.
    pub fn is_descending(self) -> bool {
        matches!(self, SortKey::Comments | SortKey::Points)
    }

    /// Base ordering for this key, before the user toggle.
    fn sorted(self, stories: &[Story]) -> Vec<Story> {
        let mut list = stories.to_vec();
        match self {
            SortKey::None => {}
            SortKey::Title => list.sort_by(|a, b| a.title.cmp(&b.title)),
            SortKey::Author => list.sort_by(|a, b| a.author.cmp(&b.author)),
            SortKey::Comments => {
                list.sort_by_key(|s| s.num_comments);
                list.reverse();
            }
            SortKey::Points => {
                list.sort_by_key(|s| s.points);
                list.reverse();
            }
        }
        list
    }
}

/// Selected sort column plus the user's reverse toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: SortKey,
    pub reversed: bool,
}

impl SortState {
    /// Header click: same column flips the toggle, another column resets it.
    /// `None` has no direction and never sets the toggle.
    pub fn select(&mut self, key: SortKey) {
        if key == SortKey::None {
            self.key = key;
            self.reversed = false;
        } else if self.key == key {
            self.reversed = !self.reversed;
        } else {
            self.key = key;
            self.reversed = false;
        }
    }

    /// Order `stories` for display.
    pub fn apply(&self, stories: &[Story]) -> Vec<Story> {
        let mut list = self.key.sorted(stories);
        if self.reversed && self.key != SortKey::None {
            list.reverse();
        }
        list
    }

    /// Whether the displayed order is effectively reversed.
    pub fn effective_reverse(&self) -> bool {
        self.reversed ^ self.key.is_descending()
    }

    /// Arrow glyph for a column header; only the selected column has one.
    pub fn indicator(&self, column: SortKey) -> Option<&'static str> {
        if column != self.key || column == SortKey::None {
            return None;
        }
        Some(if self.effective_reverse() { "↓" } else { "↑" })
    }
}
