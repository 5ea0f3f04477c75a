// src/ui/tui.rs
//! Terminal setup and the main event loop.

use std::{
    io::{self, Stdout},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::Event,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::info;

use crate::{api::ListingClient, app::App, ui::event::spawn_event_reader};

type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal on every exit path once raw mode is on.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
}

fn setup_terminal() -> Result<TuiTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

enum LoopSignal {
    Input(Option<Event>),
    Listing(Option<crate::app::ListingEvent>),
    Tick,
}

/// Run the browser against `client` until the user quits.
pub async fn run(client: Arc<dyn ListingClient>) -> Result<()> {
    let _guard = TerminalGuard;
    let mut terminal = setup_terminal()?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let shutdown = Arc::new(AtomicBool::new(false));
    spawn_event_reader(event_tx, Arc::clone(&shutdown));

    let mut app = App::new(client);
    app.start();

    let mut tick = tokio::time::interval(Duration::from_millis(250));
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        terminal.draw(|f| app.draw(f))?;

        let signal = tokio::select! {
            event = event_rx.recv() => LoopSignal::Input(event),
            listing = app.next_listing() => LoopSignal::Listing(listing),
            _ = tick.tick() => LoopSignal::Tick,
        };

        match signal {
            LoopSignal::Input(Some(Event::Key(key))) => {
                if app.on_key(key) {
                    break;
                }
            }
            // Reader thread gave up; nothing left to drive the UI
            LoopSignal::Input(None) => break,
            LoopSignal::Input(Some(_)) => {}
            LoopSignal::Listing(Some(listing)) => {
                app.apply_listing(listing);
            }
            LoopSignal::Listing(None) | LoopSignal::Tick => {}
        }
    }

    info!("shutting down");
    shutdown.store(true, Ordering::Relaxed);
    terminal.show_cursor()?;
    Ok(())
}
