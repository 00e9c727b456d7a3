//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! All side effects happen here. The reducer stays pure and produces
//! effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! - Spawned tasks send `UiEvent`s to `inbox_tx`
//! - The runtime drains `inbox_rx` each loop iteration
//! - Continuations therefore always run on the UI thread, in order

mod handlers;
mod inbox;

use std::future::Future;
use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use senti_core::sentiment::SentimentClient;
use tokio::sync::mpsc;

use crate::common::{TaskCompleted, TaskId, TaskStarted};
use crate::effects::UiEffect;
use crate::events::{AnalysisOutcome, UiEvent};
use crate::state::AppState;
use crate::{render, terminal, update};

/// Tick interval while a request is in flight or the user is typing (~60fps).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle. Longer timeout reduces CPU usage.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    client: SentimentClient,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
    last_terminal_event: Instant,
}

impl TuiRuntime {
    /// Creates the runtime and takes over the terminal.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(client: SentimentClient) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(client.endpoint().describe());
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            client,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the event loop until the user quits.
    ///
    /// Must be called from within a tokio runtime; requests are spawned onto it.
    ///
    /// # Errors
    /// Returns an error if terminal I/O fails.
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            let events = self.collect_events()?;

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }
                // Only Tick renders, capping the frame rate at the tick cadence.
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }

                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects terminal input, inbox results and the next Tick.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let tick_interval = if self.state.form.is_loading() || recent_terminal_activity {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns a task with the uniform started/completed lifecycle.
    fn spawn_task<F, Fut>(&self, id: TaskId, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = AnalysisOutcome> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let _ = tx.send(UiEvent::AnalysisStarted(TaskStarted { id }));
        tokio::spawn(async move {
            let result = f().await;
            let _ = tx.send(UiEvent::AnalysisCompleted(TaskCompleted { id, result }));
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::AnalyzeSentiment { task, request } => {
                let client = self.client.clone();
                self.spawn_task(task, move || handlers::analyze_sentiment(client, request));
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
