//! Timed step sequencer
//!
//! Walks an ordered step list over wall-clock time: apply a step, sleep its
//! delay, advance the index by exactly one, apply the next. The whole run
//! lives in a single owned tokio task whose handle is retained, so stop,
//! restart and drop cancel every pending advance; nothing fires against
//! stale state after a stop.

use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tracing::debug;

use atelier_core::domain::step::TimedStep;

/// Observable state of a sequence run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceState {
    /// Current 0-based step index
    pub index: usize,
    /// Whether a run is in flight
    pub running: bool,
    /// Whether the last step has been reached
    pub finished: bool,
}

impl SequenceState {
    fn idle() -> Self {
        Self {
            index: 0,
            running: false,
            finished: false,
        }
    }
}

/// Receives each step as the sequencer reaches it
pub trait StepSink<T>: Send + Sync {
    /// Called once per step, in order, with the step's index
    fn apply(&self, index: usize, step: &T);
}

/// Drives an ordered step list through a sink on a timer
pub struct Sequencer<T> {
    steps: Arc<Vec<T>>,
    state: Arc<Mutex<SequenceState>>,
    task: Option<JoinHandle<()>>,
}

impl<T> Sequencer<T>
where
    T: TimedStep + Send + Sync + 'static,
{
    /// Creates a sequencer over the given steps
    pub fn new(steps: Vec<T>) -> Self {
        Self {
            steps: Arc::new(steps),
            state: Arc::new(Mutex::new(SequenceState::idle())),
            task: None,
        }
    }

    /// The steps this sequencer drives
    pub fn steps(&self) -> &[T] {
        &self.steps
    }

    /// Snapshot of the current run state
    pub fn state(&self) -> SequenceState {
        *self.state.lock().unwrap()
    }

    /// Whether the last step has been reached
    pub fn is_finished(&self) -> bool {
        self.state.lock().unwrap().finished
    }

    /// Starts a run from step 0, cancelling any run already in flight
    ///
    /// An empty step list finishes immediately: the terminal flag is set,
    /// the index stays at 0 and no task is spawned.
    pub fn start(&mut self, sink: Arc<dyn StepSink<T>>) {
        self.stop();

        {
            let mut state = self.state.lock().unwrap();
            *state = SequenceState::idle();
            if self.steps.is_empty() {
                state.finished = true;
                return;
            }
            state.running = true;
        }

        let steps = Arc::clone(&self.steps);
        let shared = Arc::clone(&self.state);

        self.task = Some(tokio::spawn(async move {
            sink.apply(0, &steps[0]);

            for index in 1..steps.len() {
                tokio::time::sleep(steps[index - 1].delay()).await;
                shared.lock().unwrap().index = index;
                sink.apply(index, &steps[index]);
            }

            debug!("sequence finished after {} step(s)", steps.len());
            let mut state = shared.lock().unwrap();
            state.running = false;
            state.finished = true;
        }));
    }

    /// Cancels every pending advance
    ///
    /// Idempotent: stopping an already-stopped sequencer changes nothing.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.state.lock().unwrap().running = false;
    }

    /// Waits for the in-flight run to finish
    pub async fn join(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl<T> Drop for Sequencer<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
