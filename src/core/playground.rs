//! Interaction state machine behind the "Interactive Code Playground" widget.
//!
//! The controller never sleeps on the caller's behalf. Both of its timers are
//! tokio tasks that only send a [`PlaygroundEvent`] back to the host, which
//! hands it to [`PlaygroundController::handle`] on the same task that drives
//! every other mutation. Each event carries the selection epoch or run id it
//! was scheduled for, and is dropped if that token is no longer current.

use super::snippet::{Direction, Snippet, SnippetCatalog};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};
use uuid::Uuid;

pub const DEFAULT_RUN_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_AUTO_ADVANCE: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Simulated execution latency of a run.
    pub run_delay: Duration,
    /// Idle time after the last snippet change before the carousel moves on.
    pub auto_advance: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            run_delay: DEFAULT_RUN_DELAY,
            auto_advance: DEFAULT_AUTO_ADVANCE,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    #[default]
    Idle,
    Running,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlaygroundState {
    pub current_index: usize,
    pub run_status: RunStatus,
    pub displayed_output: Option<String>,
}

/// Timer completions. The host must pass each one back to
/// [`PlaygroundController::handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaygroundEvent {
    AutoAdvance { generation: u64 },
    RunFinished { run_id: Uuid },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Manual,
    Auto,
}

#[derive(Debug)]
struct PendingRun {
    id: Uuid,
    index: usize,
    selection: u64,
    handle: JoinHandle<()>,
}

#[derive(Debug)]
struct AutoAdvanceTimer {
    generation: u64,
    handle: JoinHandle<()>,
}

#[derive(Debug)]
pub struct PlaygroundController {
    catalog: SnippetCatalog,
    timing: Timing,
    state: PlaygroundState,
    // Bumped on every snippet change.
    selection: u64,
    events: UnboundedSender<PlaygroundEvent>,
    auto_advance: Option<AutoAdvanceTimer>,
    pending_run: Option<PendingRun>,
}

impl PlaygroundController {
    /// Creates the widget state and arms the first auto-advance tick.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(
        catalog: SnippetCatalog,
        timing: Timing,
    ) -> (Self, UnboundedReceiver<PlaygroundEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let mut controller = Self {
            catalog,
            timing,
            state: PlaygroundState::default(),
            selection: 0,
            events,
            auto_advance: None,
            pending_run: None,
        };
        controller.schedule_auto_advance();
        info!(
            snippets = controller.catalog.len(),
            run_delay_ms = timing.run_delay.as_millis() as u64,
            auto_advance_ms = timing.auto_advance.as_millis() as u64,
            "playground mounted"
        );
        (controller, receiver)
    }

    pub fn advance(&mut self, direction: Direction) {
        self.change_snippet(direction, Source::Manual);
    }

    /// Starts a simulated run of the current snippet unless one is already in flight.
    pub fn run_current(&mut self) {
        if self.state.run_status == RunStatus::Running {
            debug!("run already in flight, ignoring");
            return;
        }

        let id = Uuid::new_v4();
        let index = self.state.current_index;
        let deadline = Instant::now() + self.timing.run_delay;
        let events = self.events.clone();
        let handle = tokio::spawn(async move {
            sleep_until(deadline).await;
            let _ = events.send(PlaygroundEvent::RunFinished { run_id: id });
        });

        self.state.run_status = RunStatus::Running;
        self.pending_run = Some(PendingRun {
            id,
            index,
            selection: self.selection,
            handle,
        });
        debug!(%id, index, language = %self.current_snippet().language, "run started");
    }

    pub fn auto_advance_tick(&mut self) {
        self.change_snippet(Direction::Next, Source::Auto);
    }

    pub fn handle(&mut self, event: PlaygroundEvent) {
        match event {
            PlaygroundEvent::AutoAdvance { generation } if generation == self.selection => {
                self.auto_advance = None;
                self.auto_advance_tick();
            }
            PlaygroundEvent::AutoAdvance { generation } => {
                debug!(generation, current = self.selection, "dropping superseded tick");
            }
            PlaygroundEvent::RunFinished { run_id } => self.finish_run(run_id),
        }
    }

    pub fn current_snippet(&self) -> &Snippet {
        self.catalog.get(self.state.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn run_status(&self) -> RunStatus {
        self.state.run_status
    }

    pub fn displayed_output(&self) -> Option<&str> {
        self.state.displayed_output.as_deref()
    }

    pub fn state(&self) -> &PlaygroundState {
        &self.state
    }

    pub fn catalog(&self) -> &SnippetCatalog {
        &self.catalog
    }

    /// Unmounts the widget. No event is delivered afterwards.
    pub fn teardown(mut self) {
        self.cancel_timers();
        info!("playground unmounted");
    }

    fn change_snippet(&mut self, direction: Direction, source: Source) {
        let from = self.state.current_index;
        self.state.current_index = self.catalog.step(from, direction);
        self.state.displayed_output = None;
        self.selection = self.selection.wrapping_add(1);
        debug!(
            ?source,
            ?direction,
            from,
            to = self.state.current_index,
            "snippet changed"
        );
        self.schedule_auto_advance();
    }

    fn schedule_auto_advance(&mut self) {
        if let Some(timer) = self.auto_advance.take() {
            timer.handle.abort();
        }

        let generation = self.selection;
        let deadline = Instant::now() + self.timing.auto_advance;
        let events = self.events.clone();
        let handle = tokio::spawn(async move {
            sleep_until(deadline).await;
            let _ = events.send(PlaygroundEvent::AutoAdvance { generation });
        });
        self.auto_advance = Some(AutoAdvanceTimer { generation, handle });
    }

    fn finish_run(&mut self, run_id: Uuid) {
        let run = match self.pending_run.take() {
            Some(run) if run.id == run_id => run,
            other => {
                self.pending_run = other;
                debug!(%run_id, "ignoring completion of unknown run");
                return;
            }
        };

        self.state.run_status = RunStatus::Idle;
        if run.selection == self.selection && run.index == self.state.current_index {
            let output = self.catalog.get(run.index).expected_output.clone();
            info!(id = %run.id, index = run.index, %output, "run finished");
            self.state.displayed_output = Some(output);
        } else {
            debug!(
                id = %run.id,
                target = run.index,
                current = self.state.current_index,
                "snippet changed during run, discarding result"
            );
        }
    }

    fn cancel_timers(&mut self) {
        if let Some(timer) = self.auto_advance.take() {
            debug!(generation = timer.generation, "cancelling auto-advance");
            timer.handle.abort();
        }
        if let Some(run) = self.pending_run.take() {
            debug!(id = %run.id, "cancelling pending run");
            run.handle.abort();
        }
    }
}

impl Drop for PlaygroundController {
    fn drop(&mut self) {
        self.cancel_timers();
    }
}
