use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(focus: Focus) -> &'static str {
        match focus {
            Focus::Search => " Enter: Submit │ Tab: List │ Ctrl+R: Recent │ Ctrl+Q: Quit",
            Focus::List => {
                " ↑/↓: Move │ x: Dismiss │ t/a/c/p: Sort │ n: Unsorted │ Tab: Search │ Ctrl+R: Recent │ q: Quit"
            }
            Focus::Popup(_) => " Up/Down: Move │ Enter: Load │ Esc: Close",
        }
    }

    pub fn widget(&self, area: Rect, focus: Focus, can_submit: bool) -> Paragraph<'static> {
        let hints = Self::hints(focus);
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let hint_style = if focus == Focus::Search && !can_submit {
            text_style.add_modifier(Modifier::CROSSED_OUT)
        } else {
            text_style
        };

        let line = Line::from(vec![
            Span::styled(hints, hint_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
