use crate::search::{query_url, SearchError};
use crate::storage::{KeyValueStore, SEARCH_TERM_KEY};
use crate::stories::{total_comments, Story};
use crate::ui::history::{HistoryIntent, HistoryReducer, HistoryState};
use crate::ui::mvi::{IntentObserver, Reducer};
use crate::ui::sort::{SortKey, SortState};
use crate::ui::stories::{StoriesError, StoriesIntent, StoriesReducer, StoriesState};
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PopupKind {
    History,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Search,
    List,
    Popup(PopupKind),
}

/// Work the UI asks the runtime to do off the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Search { term: String },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Startup settings for `App`.
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Query URL prefix, used to tell whether a submit changes the query.
    pub endpoint: String,
    /// Term used when storage has none.
    pub default_term: String,
    /// Overrides the stored term for this session without writing it.
    pub initial_term: Option<String>,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    endpoint: String,
    /// Text in the search box.
    search_term: String,
    /// URL of the query currently shown; a submit only fetches when it changes.
    active_url: Option<String>,
    /// Story list state (MVI pattern).
    stories: StoriesState,
    /// Search history state (MVI pattern).
    history: HistoryState,
    sort: SortState,
    /// Cursor into the sorted story list.
    selected: usize,
    store: Box<dyn KeyValueStore>,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
    observers: Vec<Box<dyn IntentObserver<StoriesReducer>>>,
}

impl App {
    pub fn new(settings: AppSettings, store: Box<dyn KeyValueStore>) -> Self {
        let search_term = settings
            .initial_term
            .or_else(|| store.get(SEARCH_TERM_KEY).filter(|term| !term.is_empty()))
            .unwrap_or(settings.default_term);
        Self {
            should_quit: false,
            focus: Focus::Search,
            endpoint: settings.endpoint,
            search_term,
            active_url: None,
            stories: StoriesState::default(),
            history: HistoryState::default(),
            sort: SortState::default(),
            selected: 0,
            store,
            command_sender: None,
            last_command_error: None,
            observers: Vec::new(),
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn add_observer(&mut self, observer: Box<dyn IntentObserver<StoriesReducer>>) {
        self.observers.push(observer);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn show_popup(&self) -> bool {
        matches!(self.focus, Focus::Popup(_))
    }

    pub fn popup_kind(&self) -> Option<PopupKind> {
        match self.focus {
            Focus::Popup(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn toggle_popup(&mut self, kind: PopupKind) -> bool {
        self.focus = match self.focus {
            Focus::Popup(active) if active == kind => Focus::Search,
            _ => Focus::Popup(kind),
        };
        self.show_popup()
    }

    pub fn close_popup(&mut self) {
        self.focus = Focus::Search;
    }

    pub fn focus_search(&mut self) {
        self.focus = Focus::Search;
    }

    pub fn focus_list(&mut self) {
        self.focus = Focus::List;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Search => Focus::List,
            Focus::List => Focus::Search,
            popup @ Focus::Popup(_) => popup,
        };
    }

    // ========================================================================
    // Read access for rendering
    // ========================================================================

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn stories(&self) -> &StoriesState {
        &self.stories
    }

    pub fn history(&self) -> &HistoryState {
        &self.history
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn active_url(&self) -> Option<&str> {
        self.active_url.as_deref()
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    /// Stories in display order.
    pub fn visible_stories(&self) -> Vec<Story> {
        self.sort.apply(&self.stories.data)
    }

    pub fn total_comments(&self) -> u64 {
        total_comments(&self.stories.data)
    }

    /// Submitting is disabled while the search box is empty.
    pub fn can_submit(&self) -> bool {
        !self.search_term.is_empty()
    }

    // ========================================================================
    // Search form
    // ========================================================================

    /// Fetch the current term. Called once at startup.
    pub fn start(&mut self) {
        self.active_url = Some(query_url(&self.endpoint, &self.search_term));
        self.begin_fetch(self.search_term.clone());
    }

    pub fn on_search_input(&mut self, ch: char) {
        let mut term = self.search_term.clone();
        term.push(ch);
        self.set_search_term(term);
    }

    pub fn on_search_backspace(&mut self) {
        let mut term = self.search_term.clone();
        if term.pop().is_some() {
            self.set_search_term(term);
        }
    }

    /// Replace the search term and persist it.
    pub fn set_search_term(&mut self, term: String) {
        if term == self.search_term {
            return;
        }
        self.search_term = term;
        if let Err(err) = self.store.set(SEARCH_TERM_KEY, &self.search_term) {
            tracing::warn!(error = %err, "Failed to persist search term");
        }
    }

    /// Submit the search form.
    ///
    /// Returns true when a fetch was started. Nothing happens for an empty
    /// term or when the query URL is the one already shown.
    pub fn submit_search(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        let url = query_url(&self.endpoint, &self.search_term);
        if self.active_url.as_deref() == Some(url.as_str()) {
            tracing::debug!(%url, "Query unchanged, not refetching");
            return false;
        }
        tracing::info!(term = %self.search_term, "Submitting search");
        self.active_url = Some(url);
        self.begin_fetch(self.search_term.clone());
        true
    }

    fn begin_fetch(&mut self, term: String) {
        self.dispatch_stories(StoriesIntent::FetchInit);
        self.send_command(UiCommand::Search { term });
    }

    /// A fetch started for `term` has finished.
    ///
    /// Results are applied in arrival order; a slow earlier search can
    /// overwrite a faster later one.
    pub fn on_search_finished(&mut self, term: String, result: Result<Vec<Story>, SearchError>) {
        match result {
            Ok(stories) => {
                tracing::info!(%term, hits = stories.len(), "Search finished");
                self.dispatch_stories(StoriesIntent::FetchSuccess {
                    stories: stories.clone(),
                });
                self.dispatch_history(HistoryIntent::Record { term, stories });
            }
            Err(err) => {
                tracing::warn!(%term, error = %err, "Search failed");
                self.dispatch_stories(StoriesIntent::FetchFailure);
            }
        }
        self.clamp_selection();
    }

    // ========================================================================
    // History
    // ========================================================================

    /// Show a previous search again without fetching.
    pub fn load_previous_search(&mut self, index: usize) -> bool {
        let Some(entry) = self.history.get(index).cloned() else {
            return false;
        };
        self.set_search_term(entry.term);
        self.dispatch_stories(StoriesIntent::LoadPrevious {
            stories: entry.result,
        });
        self.selected = 0;
        true
    }

    pub fn move_history_selection(&mut self, direction: i32) {
        let intent = if direction.is_negative() {
            HistoryIntent::MoveUp
        } else {
            HistoryIntent::MoveDown
        };
        self.dispatch_history(intent);
    }

    pub fn open_history_popup(&mut self) {
        self.focus = Focus::Popup(PopupKind::History);
    }

    /// Load the entry under the popup cursor and close the popup.
    pub fn confirm_history_selection(&mut self) -> bool {
        let loaded = self.load_previous_search(self.history.selected);
        if loaded {
            self.close_popup();
        }
        loaded
    }

    // ========================================================================
    // Story list
    // ========================================================================

    pub fn select_sort(&mut self, key: SortKey) {
        self.sort.select(key);
        self.selected = 0;
    }

    pub fn move_selection(&mut self, direction: i32) {
        let len = self.stories.data.len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let current = self.selected.min(len - 1);
        self.selected = if direction.is_negative() {
            current.saturating_sub(1)
        } else {
            (current + 1).min(len - 1)
        };
    }

    pub fn selected_story(&self) -> Option<Story> {
        self.visible_stories().get(self.selected).cloned()
    }

    /// Dismiss the story under the cursor.
    pub fn dismiss_selected(&mut self) -> bool {
        let Some(story) = self.selected_story() else {
            return false;
        };
        self.dismiss(story);
        true
    }

    pub fn dismiss(&mut self, story: Story) {
        self.dispatch_stories(StoriesIntent::RemoveStory { story });
        self.clamp_selection();
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Dispatch an intent to the stories reducer.
    pub fn dispatch_stories(&mut self, intent: StoriesIntent) {
        for observer in &self.observers {
            observer.observe(&intent, &self.stories);
        }
        dispatch_mvi!(self, stories, StoriesReducer, intent);
    }

    /// Decode a JSON action envelope and dispatch it.
    ///
    /// State is untouched when decoding fails.
    pub fn dispatch_encoded(&mut self, json: &str) -> Result<(), StoriesError> {
        let intent = StoriesIntent::decode(json)?;
        self.dispatch_stories(intent);
        self.clamp_selection();
        Ok(())
    }

    /// Dispatch an intent to the history reducer.
    pub fn dispatch_history(&mut self, intent: HistoryIntent) {
        dispatch_mvi!(self, history, HistoryReducer, intent);
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to queue UI command");
                self.last_command_error = Some(format!("Command send failed: {}", err));
                false
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.stories.data.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
