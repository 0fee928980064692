use crate::ui::app::{App, Focus, PopupKind};
use crate::ui::sort::SortKey;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'r') {
        app.toggle_popup(PopupKind::History);
        return;
    }

    match app.focus() {
        Focus::Popup(PopupKind::History) => handle_history_key(app, key),
        Focus::Search => handle_search_key(app, key),
        Focus::List => handle_list_key(app, key),
    }
}

fn handle_history_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_popup(),
        KeyCode::Up => app.move_history_selection(-1),
        KeyCode::Down => app.move_history_selection(1),
        KeyCode::Enter => {
            app.confirm_history_selection();
        }
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            let index = ch.to_digit(10).unwrap_or(0) as usize;
            if index > 0 && app.load_previous_search(index - 1) {
                app.close_popup();
            }
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.submit_search();
        }
        KeyCode::Backspace => app.on_search_backspace(),
        KeyCode::Tab | KeyCode::Down => app.focus_list(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.on_search_input(ch)
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Delete | KeyCode::Char('x') => {
            app.dismiss_selected();
        }
        KeyCode::Char('t') => app.select_sort(SortKey::Title),
        KeyCode::Char('a') => app.select_sort(SortKey::Author),
        KeyCode::Char('c') => app.select_sort(SortKey::Comments),
        KeyCode::Char('p') => app.select_sort(SortKey::Points),
        KeyCode::Char('n') => app.select_sort(SortKey::None),
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Tab | KeyCode::Esc | KeyCode::Char('/') => app.focus_search(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::DEFAULT_ENDPOINT;
    use crate::storage::MemoryStore;
    use crate::stories::Story;
    use crate::ui::app::AppSettings;

    fn make_app() -> App {
        App::new(
            AppSettings {
                endpoint: DEFAULT_ENDPOINT.to_string(),
                default_term: "React".to_string(),
                initial_term: None,
            },
            Box::new(MemoryStore::new()),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = make_app();
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn plain_q_types_into_search() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.search_term(), "Reactq");
    }

    #[test]
    fn sort_keys_apply_in_list_focus() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Char('p')));
        assert_eq!(app.sort().key, SortKey::Points);
        handle_key(&mut app, press(KeyCode::Char('p')));
        assert!(app.sort().reversed);
    }

    #[test]
    fn digit_in_history_popup_loads_entry() {
        let mut app = make_app();
        let story = Story {
            title: "Rust".to_string(),
            url: String::new(),
            author: "graydon".to_string(),
            num_comments: 1,
            points: 1,
            object_id: 1,
        };
        app.on_search_finished("Rust".to_string(), Ok(vec![story]));
        app.on_search_finished("Go".to_string(), Ok(vec![]));
        handle_key(&mut app, ctrl('r'));
        assert!(app.show_popup());
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert!(!app.show_popup());
        assert_eq!(app.search_term(), "Rust");
        assert_eq!(app.stories().data.len(), 1);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        let mut key = press(KeyCode::Char('z'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert_eq!(app.search_term(), "React");
    }
}
