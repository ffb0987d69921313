//! Main TUI runner - entry point and event loop
//!
//! Contains the core application lifecycle:
//! - `run`: Main entry point, sets up terminal and state
//! - `run_loop`: Main event loop processing messages and terminal events

use tokio::sync::mpsc;

use crate::app::message::Message;
use crate::app::state::{AppState, DiffTarget, DiffViewState, UiMode};
use crate::app::{signals, UpdateAction};
use crate::common::prelude::*;
use crate::config;

use super::{actions, event, process, render, terminal};

/// Run the TUI application
///
/// Loads settings, initializes the terminal, dispatches the startup tasks
/// (snapshot listing and tool probe), then enters the event loop. When a
/// pre/post pair is given the comparison page opens directly, with the
/// dashboard listing still loading behind it.
pub async fn run(config_name: &str, compare: Option<(u64, u64)>) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Write a commented default config on first run, then load it
    if let Some(path) = config::default_config_path() {
        if let Err(e) = config::init_config_dir(&path) {
            warn!("Could not create default config at {:?}: {}", path, e);
        }
    }
    let settings = config::load_settings();
    info!("Elevation method: {}", settings.privilege.elevation);

    // Initialize terminal
    let mut term = ratatui::init();

    let mut state = AppState::new(settings, config_name);

    // Create unified message channel (for signal handler, background tasks)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    // Startup work: snapshot listing and tool probe
    process::process_message(&mut state, Message::RefreshSnapshots, &msg_tx);
    actions::handle_action(
        UpdateAction::CheckTools,
        msg_tx.clone(),
        state.settings.clone(),
        state.config_name.clone(),
    );

    // Direct comparison requested on the command line
    if let Some((pre, post)) = compare {
        info!("Opening comparison page for {}..{}", pre, post);
        let mut diff = DiffViewState::new(pre, post);
        let generation = diff.begin_fetch();
        state.compare_page = Some(diff);
        state.mode = UiMode::ComparePage;
        actions::handle_action(
            UpdateAction::FetchDiff {
                target: DiffTarget::ComparePage,
                pre,
                post,
                generation,
            },
            msg_tx.clone(),
            state.settings.clone(),
            state.config_name.clone(),
        );
    }

    // Run the main loop
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx);

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
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (background tasks, signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process::process_message(state, message, &msg_tx);
        }
    }

    Ok(())
}
