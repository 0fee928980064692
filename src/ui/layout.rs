use ratatui::layout::Rect;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into search form, history bar and story table.
pub fn body_regions(body: Rect) -> (Rect, Rect, Rect) {
    let form_height = body.height.min(3);
    let history_height = 1.min(body.height.saturating_sub(form_height));
    let form = Rect {
        height: form_height,
        ..body
    };
    let history = Rect {
        y: body.y + form_height,
        height: history_height,
        ..body
    };
    let list = Rect {
        y: body.y + form_height + history_height,
        height: body.height.saturating_sub(form_height + history_height),
        ..body
    };
    (form, history, list)
}

/// Rect of the given size centered in `area`, shrunk to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
