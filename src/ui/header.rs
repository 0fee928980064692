use crate::ui::stories::StoriesState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const LOADING_TEXT: &str = "Loading...";
pub const ERROR_TEXT: &str = "ERROR LOADING DATA";

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, stories: &StoriesState, total_comments: u64) -> Paragraph<'static> {
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::raw("  "),
            Span::styled(
                format!("My Hacker Stories with {} comments.", total_comments),
                title_style,
            ),
        ];
        if stories.is_loading {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(LOADING_TEXT, Style::default().fg(HEADER_TEXT)));
        }
        if stories.is_error {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(ERROR_TEXT, Style::default().fg(STATUS_ERROR)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
