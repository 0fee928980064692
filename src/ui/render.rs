use crate::ui::app::{App, Focus, PopupKind};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::history::render_history_dialog;
use crate::ui::layout::{body_regions, layout_regions};
use crate::ui::sort::SortKey;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER,
};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState};
use ratatui::Frame;

const SEARCH_LABEL: &str = "Search: ";
const DISMISS_LABEL: &str = "[x]";

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(
        Header::new().widget(app.stories(), app.total_comments()),
        header,
    );
    frame.render_widget(Clear, body);

    let (form, history, list) = body_regions(body);
    draw_search_form(frame, app, form);
    draw_history_bar(frame, app, history);
    draw_story_table(frame, app, list);

    frame.render_widget(
        Footer::new().widget(footer, app.focus(), app.can_submit()),
        footer,
    );

    if let Some(PopupKind::History) = app.popup_kind() {
        render_history_dialog(frame, body, app.history());
    }
}

fn draw_search_form(frame: &mut Frame, app: &App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let focused = app.focus() == Focus::Search;
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let submit_style = if app.can_submit() {
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
    };

    let term = app.search_term();
    let inner_width = area.width.saturating_sub(2) as usize;
    let submit = "[ Submit ]";
    let used = SEARCH_LABEL.chars().count() + term.chars().count() + submit.chars().count();
    let padding = inner_width.saturating_sub(used).max(1);

    let line = Line::from(vec![
        Span::styled(SEARCH_LABEL, Style::default().fg(MUTED_TEXT)),
        Span::styled(term.to_string(), Style::default().fg(HEADER_TEXT)),
        Span::raw(" ".repeat(padding)),
        Span::styled(submit, submit_style),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused && !app.show_popup() && area.width > 2 && area.height > 2 {
        let offset = (SEARCH_LABEL.chars().count() + term.chars().count()) as u16;
        let x = area.x + 1 + offset.min(area.width.saturating_sub(3));
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn draw_history_bar(frame: &mut Frame, app: &App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let mut spans = vec![Span::styled(" Recent: ", Style::default().fg(MUTED_TEXT))];
    if app.history().is_empty() {
        spans.push(Span::styled("none", Style::default().fg(MUTED_TEXT)));
    }
    for (idx, term) in app.history().terms().enumerate() {
        spans.push(Span::styled(
            format!("[{}: {}]", idx + 1, term),
            Style::default().fg(HEADER_TEXT),
        ));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn column_title(app: &App, key: SortKey) -> String {
    match app.sort().indicator(key) {
        Some(arrow) => format!("{} {}", key.label(), arrow),
        None => key.label().to_string(),
    }
}

fn draw_story_table(frame: &mut Frame, app: &App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let stories = app.visible_stories();
    let focused = app.focus() == Focus::List;

    let header_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let mut header_cells: Vec<Cell> = SortKey::COLUMNS
        .iter()
        .map(|key| Cell::from(column_title(app, *key)))
        .collect();
    header_cells.push(Cell::from(""));
    let header = Row::new(header_cells).style(header_style);

    let rows: Vec<Row> = stories
        .iter()
        .map(|story| {
            Row::new(vec![
                Cell::from(story.title.clone()),
                Cell::from(story.author.clone()),
                Cell::from(story.num_comments.to_string()),
                Cell::from(story.points.to_string()),
                Cell::from(DISMISS_LABEL),
            ])
            .style(Style::default().fg(HEADER_TEXT))
        })
        .collect();

    let widths = [
        Constraint::Percentage(40),
        Constraint::Percentage(30),
        Constraint::Percentage(10),
        Constraint::Percentage(10),
        Constraint::Percentage(10),
    ];

    let mut block = Block::default()
        .title(Span::styled(
            format!(" Stories ({}) ", stories.len()),
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { ACCENT } else { GLOBAL_BORDER }));
    if let Some(story) = stories.get(app.selected()) {
        if !story.url.is_empty() {
            block = block.title_bottom(Line::from(Span::styled(
                format!(" {} ", story.url),
                Style::default().fg(POPUP_BORDER),
            )));
        }
    }

    let highlight = if focused {
        Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(highlight);

    let mut state = TableState::default().with_selected(if stories.is_empty() {
        None
    } else {
        Some(app.selected())
    });
    frame.render_stateful_widget(table, area, &mut state);
}
