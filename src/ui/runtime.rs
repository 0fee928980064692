use crate::search::SearchApi;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

const COMMAND_QUEUE_SIZE: usize = 32;

/// Run the terminal UI until the user quits.
///
/// The UI loop runs on the calling thread; searches run on `handle`.
pub fn run(
    mut app: App,
    api: Arc<dyn SearchApi>,
    handle: Handle,
    tick_rate: Duration,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE_SIZE);
    spawn_search_worker(&handle, command_rx, api, events.sender());
    app.set_command_sender(command_tx);
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Ok(AppEvent::SearchFinished { term, result }) => app.on_search_finished(term, result),
            Err(std_mpsc::RecvTimeoutError::Timeout) => {}
            Err(std_mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

/// Execute UI commands on the tokio runtime.
///
/// Every search runs in its own task and posts its result back to the UI
/// thread. Searches are not cancelled or deduplicated.
pub fn spawn_search_worker(
    handle: &Handle,
    mut commands: mpsc::Receiver<UiCommand>,
    api: Arc<dyn SearchApi>,
    events: std_mpsc::Sender<AppEvent>,
) {
    handle.spawn(async move {
        while let Some(command) = commands.recv().await {
            match command {
                UiCommand::Search { term } => {
                    let api = Arc::clone(&api);
                    let events = events.clone();
                    tokio::spawn(async move {
                        let result = api.search(&term).await;
                        if events.send(AppEvent::SearchFinished { term, result }).is_err() {
                            tracing::trace!("Search result dropped (UI gone)");
                        }
                    });
                }
            }
        }
    });
}
