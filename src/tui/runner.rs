//! Main TUI runner - entry point and event loop

use std::time::Duration;

use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::app::message::Message;
use crate::app::state::AppState;
use crate::app::{handler, signals};
use crate::common::prelude::*;
use crate::config::Settings;
use crate::core::RemoteData;

use super::{actions, event, render, terminal};

/// Run the TUI application
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let client = ApiClient::new(
        &settings.api.base_url,
        Duration::from_millis(settings.api.timeout_ms),
    )?;

    // Initialize terminal
    let mut term = ratatui::init();

    let mut state = AppState::new(client.host());
    let tick = Duration::from_millis(settings.ui.tick_ms);

    // Unified message channel (fetch results, signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    // Kick off the one startup fetch: the user collection
    state.users = RemoteData::Loading;
    actions::handle_action(
        handler::UpdateAction::Fetch(handler::FetchTask::Users),
        client.clone(),
        msg_tx.clone(),
    );

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &client, tick);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    client: &ApiClient,
    tick: Duration,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (fetch results, signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, client, &msg_tx);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll(tick)? {
            process_message(state, message, client, &msg_tx);
        }
    }

    Ok(())
}

/// Run one message through the update function, following any chain of
/// follow-up messages and dispatching any actions it produces.
fn process_message(
    state: &mut AppState,
    message: Message,
    client: &ApiClient,
    msg_tx: &mpsc::Sender<Message>,
) {
    let mut current = Some(message);

    while let Some(msg) = current.take() {
        let result = handler::update(state, msg);

        if let Some(action) = result.action {
            actions::handle_action(action, client.clone(), msg_tx.clone());
        }

        current = result.message;
    }
}
