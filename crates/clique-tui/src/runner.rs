//! Interactive UI entry point and main loop

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::info;

use clique_app::config::Settings;
use clique_app::process::process_message;
use clique_app::{AppState, HttpBackend, Message, ScreenKind};
use clique_core::{Result, ResultExt};

use crate::terminal::TerminalGuard;
use crate::theme::Theme;
use crate::{event, render};

/// Run the terminal UI until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    // Fail on a bad base URL before taking over the terminal
    let backend = HttpBackend::from_settings(&settings).context("Failed to create backend")?;
    let backend = Arc::new(backend);
    let tick_rate = Duration::from_millis(settings.ui.tick_rate_ms.max(1));
    let initial_screen = settings.ui.initial_screen;

    let mut state = AppState::new(settings);
    let theme = Theme::default();
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);

    if initial_screen == ScreenKind::Feed {
        process_message(&mut state, Message::Navigate(ScreenKind::Feed), &msg_tx, &backend);
    }

    info!("Starting UI on {}", state.screen());
    let mut terminal = TerminalGuard::init();

    while !state.should_quit {
        // Results from background submissions and feed fetches
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(&mut state, msg, &msg_tx, &backend);
        }

        terminal.draw(|frame| render::view(frame, &state, &theme))?;

        if let Some(message) = event::poll(tick_rate)? {
            process_message(&mut state, message, &msg_tx, &backend);
        }
    }

    info!("UI closed");
    Ok(())
}
