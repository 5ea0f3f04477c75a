// src/ui/event.rs
//! Terminal input, read off the async runtime.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use crossterm::event::Event;
use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

/// Forward crossterm events to `event_tx` from a dedicated thread until
/// `shutdown` is set or the receiver is dropped.
pub fn spawn_event_reader(event_tx: UnboundedSender<Event>, shutdown: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        while !shutdown.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(250)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(event) => {
                        if event_tx.send(event).is_err() {
                            break;
                        }
                    }
                    Err(error) => warn!(%error, "reading terminal event failed"),
                },
                Ok(false) => {}
                Err(error) => {
                    warn!(%error, "polling terminal events failed");
                    break;
                }
            }
        }
    });
}
