// Copyright (c) 2026 rezky_nightky

use std::io;
use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError};
use std::thread;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

pub enum BackendEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Error(io::Error),
}

// One dedicated thread blocks on event::read() and forwards into a
// rendezvous channel; the main loop drains it without ever blocking.
pub struct EventPump {
    rx: Receiver<BackendEvent>,
}

impl EventPump {
    pub fn start() -> Self {
        let (tx, rx) = mpsc::sync_channel(0);
        thread::spawn(move || forward_events(tx));
        Self { rx }
    }

    pub fn try_next(&self) -> Option<BackendEvent> {
        match self.rx.try_recv() {
            Ok(ev) => Some(ev),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(BackendEvent::Error(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "event pump stopped",
            ))),
        }
    }
}

fn forward_events(tx: SyncSender<BackendEvent>) {
    loop {
        let sent = match event::read() {
            Ok(Event::Key(k)) if k.kind == KeyEventKind::Press => tx.send(BackendEvent::Key(k)),
            Ok(Event::Resize(w, h)) => tx.send(BackendEvent::Resize(w, h)),
            Ok(_) => Ok(()),
            Err(e) => {
                let _ = tx.send(BackendEvent::Error(e));
                return;
            }
        };
        if sent.is_err() {
            // Receiver gone: the main loop already exited.
            return;
        }
    }
}
