use crate::ui::history::state::HistoryState;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 50;

pub fn render_history_dialog(frame: &mut Frame, area: Rect, state: &HistoryState) {
    let inner_width = DIALOG_WIDTH.saturating_sub(2) as usize; // subtract borders

    let mut lines: Vec<Line> = if state.is_empty() {
        vec![Line::from(" No previous searches yet.")]
    } else {
        state
            .entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let label = format!("{}. {}", idx + 1, entry.term);
                let count = format!("{} stories", entry.result.len());
                let padding = inner_width
                    .saturating_sub(label.chars().count())
                    .saturating_sub(count.len())
                    .saturating_sub(2); // 1 char margin each side
                let line = Line::from(vec![
                    Span::raw(" "),
                    Span::styled(label, Style::default().fg(HEADER_TEXT)),
                    Span::raw(" ".repeat(padding.max(1))),
                    Span::styled(count, Style::default().fg(POPUP_BORDER)),
                    Span::raw(" "),
                ]);
                if idx == state.selected {
                    line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
                } else {
                    line
                }
            })
            .collect()
    };
    lines.push(Line::from(""));
    lines.push(Line::from(" Up/Down: Move  Enter/1-5: Load  Esc: Close"));

    let height = lines.len().saturating_add(2) as u16;
    let popup_area = centered_rect_by_size(area, DIALOG_WIDTH, height);

    frame.render_widget(Clear, popup_area);
    let block = Block::default()
        .title(Span::styled("Previous Searches", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
