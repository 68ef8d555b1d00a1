//! Probabilistic day-cycle simulator
//!
//! Ages a recruitment roster one simulated day per tick: candidates move
//! forward one stage when their draw clears the threshold (busy days every
//! fifth day amplify the draw), and every third day a coin flip may bring a
//! new applicant in. The day counter is clamped to the configured bound and
//! reaching it stops the simulation.
//!
//! The per-tick rule is a plain function over `(day, roster, sampler)` so
//! tests drive it without a clock; the simulator only adds the interval loop
//! and cancellation around it.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time;
use tracing::debug;

use atelier_core::catalog;
use atelier_core::domain::candidate::{Candidate, Roster};
use atelier_core::domain::narration::{NarrationEntry, NarrationKind};

use crate::config::SimulatorConfig;
use crate::narration::NarrationSink;
use crate::rng::Sampler;

/// Draws above this advance a candidate one stage
const PROGRESS_THRESHOLD: f64 = 0.7;

/// Draw amplifier on busy days (every fifth day)
const BUSY_DAY_AMPLIFIER: f64 = 1.5;

/// Spawn coin flips above this admit a new applicant
const SPAWN_THRESHOLD: f64 = 0.5;

/// Observable state of a day-cycle run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayState {
    /// Current simulated day, in `[0, max_days]`
    pub day: u32,
    /// Whether the simulation is ticking
    pub running: bool,
}

/// What one tick did
#[derive(Debug, Clone, Copy)]
pub struct DayOutcome {
    /// The day after the tick
    pub day: u32,
    /// Whether the day bound was reached
    pub finished: bool,
}

/// Advances the simulation by exactly one day
///
/// The returned day is the previous day plus one, clamped to `max_days`.
/// Candidate advancement is always exactly one stage or none; terminal-stage
/// candidates draw nothing. Every mutation is narrated with the new day.
pub fn advance_day(
    previous_day: u32,
    max_days: u32,
    roster: &mut Roster,
    sampler: &mut dyn Sampler,
    narration: &dyn NarrationSink,
) -> DayOutcome {
    let day = (previous_day + 1).min(max_days);
    let amplifier = if day % 5 == 0 { BUSY_DAY_AMPLIFIER } else { 1.0 };

    for candidate in roster.iter_mut() {
        if candidate.stage.is_terminal() {
            continue;
        }
        if sampler.chance() * amplifier > PROGRESS_THRESHOLD {
            let previous = candidate.stage;
            if let Some(next) = candidate.advance() {
                narration.record(NarrationEntry::on_day(
                    day,
                    NarrationKind::Action,
                    format!("{}: {previous} -> {next}", candidate.name),
                ));
            }
        }
    }

    if day % 3 == 0 && sampler.chance() > SPAWN_THRESHOLD {
        let names = catalog::candidate_names();
        let roles = catalog::roles();
        let name = names[sampler.pick(names.len())];
        let role = roles[sampler.pick(roles.len())];
        let experience_years = sampler.pick(10) as u32 + 1;

        narration.record(NarrationEntry::on_day(
            day,
            NarrationKind::Success,
            format!("{name} applied ({role})"),
        ));
        roster.push(Candidate::applicant(name, role, experience_years));
    }

    let finished = day >= max_days;
    if finished {
        narration.record(NarrationEntry::on_day(
            day,
            NarrationKind::Success,
            format!("Simulation complete after {day} days"),
        ));
    }

    DayOutcome { day, finished }
}

/// Runs the day-cycle rule on a repeating tick
///
/// Owns the roster, the day state and the ticking task. The task handle is
/// retained so stop, restart and drop cancel the pending tick.
pub struct DayCycleSimulator {
    config: SimulatorConfig,
    roster: Arc<Mutex<Roster>>,
    state: Arc<Mutex<DayState>>,
    sampler: Arc<Mutex<Box<dyn Sampler>>>,
    narration: Arc<dyn NarrationSink>,
    task: Option<JoinHandle<()>>,
}

impl DayCycleSimulator {
    /// Creates a simulator over a roster
    pub fn new(
        config: SimulatorConfig,
        roster: Roster,
        sampler: Box<dyn Sampler>,
        narration: Arc<dyn NarrationSink>,
    ) -> Self {
        Self {
            config,
            roster: Arc::new(Mutex::new(roster)),
            state: Arc::new(Mutex::new(DayState {
                day: 0,
                running: false,
            })),
            sampler: Arc::new(Mutex::new(sampler)),
            narration,
            task: None,
        }
    }

    /// Shared handle to the roster (the owning view reads and edits it)
    pub fn roster(&self) -> Arc<Mutex<Roster>> {
        Arc::clone(&self.roster)
    }

    /// Snapshot of the current day state
    pub fn state(&self) -> DayState {
        *self.state.lock().unwrap()
    }

    /// The simulator configuration
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Changes the tick period; takes effect on the next start
    pub fn set_tick_interval(&mut self, tick_interval: Duration) {
        self.config.tick_interval = tick_interval;
    }

    /// Starts ticking from day 0, cancelling any run already in flight
    ///
    /// The roster is left as-is: candidates are only removed by direct user
    /// action, so a restart replays days over the existing roster.
    pub fn start(&mut self) {
        self.stop();

        {
            let mut state = self.state.lock().unwrap();
            state.day = 0;
            state.running = true;
        }
        self.narration.info(format!(
            "Simulation started (up to {} days)",
            self.config.max_days
        ));

        let tick_interval = self.config.tick_interval;
        let max_days = self.config.max_days;
        let roster = Arc::clone(&self.roster);
        let state = Arc::clone(&self.state);
        let sampler = Arc::clone(&self.sampler);
        let narration = Arc::clone(&self.narration);

        self.task = Some(tokio::spawn(async move {
            let mut ticker = time::interval(tick_interval);
            // The first interval tick completes immediately; the first
            // simulated day lands one full period after start.
            ticker.tick().await;

            loop {
                ticker.tick().await;

                let finished = {
                    let mut roster = roster.lock().unwrap();
                    let mut sampler = sampler.lock().unwrap();
                    let previous_day = state.lock().unwrap().day;

                    let outcome = advance_day(
                        previous_day,
                        max_days,
                        &mut roster,
                        sampler.as_mut(),
                        narration.as_ref(),
                    );
                    debug!("advanced to day {}", outcome.day);

                    let mut state = state.lock().unwrap();
                    state.day = outcome.day;
                    if outcome.finished {
                        state.running = false;
                    }
                    outcome.finished
                };

                if finished {
                    break;
                }
            }
        }));
    }

    /// Cancels the pending tick and clears the running flag
    ///
    /// Idempotent: stopping an already-stopped simulator changes nothing.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.state.lock().unwrap().running = false;
    }

    /// Waits for the run to reach its day bound
    pub async fn join(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for DayCycleSimulator {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use atelier_core::domain::candidate::Stage;

    use crate::narration::InMemoryNarration;
    use crate::rng::ScriptedSampler;

    fn single_candidate_roster(stage: Stage) -> Roster {
        Roster::from_candidates(vec![Candidate::with_stage(
            "Marie Laurent",
            "Frontend Developer",
            stage,
            3,
            &["React"],
        )])
    }

    #[test]
    fn test_day_is_clamped_at_the_bound() {
        let narration = InMemoryNarration::new();
        let mut roster = Roster::new();
        let mut sampler = ScriptedSampler::default();

        let outcome = advance_day(30, 30, &mut roster, &mut sampler, &narration);
        assert_eq!(outcome.day, 30);
        assert!(outcome.finished);
    }

    #[test]
    fn test_draw_above_threshold_moves_one_stage() {
        let narration = InMemoryNarration::new();
        let mut roster = single_candidate_roster(Stage::New);
        let mut sampler = ScriptedSampler::chances(vec![0.8]);

        advance_day(0, 30, &mut roster, &mut sampler, &narration);

        let candidate = roster.find("Marie Laurent").unwrap();
        assert_eq!(candidate.stage, Stage::Interview);

        let entries = narration.drain();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].day, Some(1));
        assert!(entries[0].message.contains("new -> interview"));
    }

    #[test]
    fn test_draw_below_threshold_moves_nothing() {
        let narration = InMemoryNarration::new();
        let mut roster = single_candidate_roster(Stage::Offer);
        let mut sampler = ScriptedSampler::chances(vec![0.69]);

        advance_day(0, 30, &mut roster, &mut sampler, &narration);

        assert_eq!(roster.find("Marie Laurent").unwrap().stage, Stage::Offer);
        assert!(narration.is_empty());
    }

    #[test]
    fn test_busy_day_amplifies_the_draw() {
        // 0.5 * 1.5 = 0.75 clears the 0.7 threshold on a busy day only.
        let narration = InMemoryNarration::new();

        let mut roster = single_candidate_roster(Stage::New);
        let mut sampler = ScriptedSampler::chances(vec![0.5]);
        advance_day(4, 30, &mut roster, &mut sampler, &narration);
        assert_eq!(roster.find("Marie Laurent").unwrap().stage, Stage::Interview);

        let mut roster = single_candidate_roster(Stage::New);
        let mut sampler = ScriptedSampler::chances(vec![0.5]);
        advance_day(5, 30, &mut roster, &mut sampler, &narration);
        assert_eq!(roster.find("Marie Laurent").unwrap().stage, Stage::New);
    }

    #[test]
    fn test_terminal_candidates_draw_nothing() {
        let narration = InMemoryNarration::new();
        let mut roster = single_candidate_roster(Stage::Hired);
        // A draw this high would advance anyone who consumed it; nobody does.
        let mut sampler = ScriptedSampler::chances(vec![0.99]);

        advance_day(0, 30, &mut roster, &mut sampler, &narration);

        assert_eq!(roster.find("Marie Laurent").unwrap().stage, Stage::Hired);
        assert!(narration.is_empty());
    }

    #[test]
    fn test_spawn_on_every_third_day() {
        let narration = InMemoryNarration::new();
        let mut roster = Roster::new();
        // Empty roster: the first draw is the spawn coin. Name index 2,
        // role index 1, experience 4 + 1.
        let mut sampler = ScriptedSampler::new(vec![0.6], vec![2, 1, 4]);

        advance_day(2, 30, &mut roster, &mut sampler, &narration);

        assert_eq!(roster.len(), 1);
        let candidate = roster.find("Julie Chen").unwrap();
        assert_eq!(candidate.role, "Backend Developer");
        assert_eq!(candidate.stage, Stage::New);
        assert_eq!(candidate.experience_years, 5);

        let entries = narration.drain();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].message.contains("Julie Chen applied"));
    }

    #[test]
    fn test_no_spawn_off_cycle_or_on_failed_coin() {
        let narration = InMemoryNarration::new();

        // Day 4: not a spawn day, the coin is never flipped.
        let mut roster = Roster::new();
        let mut sampler = ScriptedSampler::chances(vec![0.9]);
        advance_day(3, 30, &mut roster, &mut sampler, &narration);
        assert!(roster.is_empty());

        // Day 3 with a failed coin.
        let mut roster = Roster::new();
        let mut sampler = ScriptedSampler::chances(vec![0.5]);
        advance_day(2, 30, &mut roster, &mut sampler, &narration);
        assert!(roster.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_to_the_bound_stops_itself() {
        let narration = Arc::new(InMemoryNarration::new());
        let config = SimulatorConfig::new(Duration::from_millis(100), 3);
        let mut simulator = DayCycleSimulator::new(
            config,
            Roster::new(),
            Box::new(ScriptedSampler::default()),
            narration.clone(),
        );

        simulator.start();
        simulator.join().await;

        let state = simulator.state();
        assert_eq!(state.day, 3);
        assert!(!state.running);

        let entries = narration.drain();
        assert!(entries.first().unwrap().message.contains("Simulation started"));
        assert!(entries.last().unwrap().message.contains("Simulation complete"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_prevents_further_days() {
        let narration = Arc::new(InMemoryNarration::new());
        let config = SimulatorConfig::new(Duration::from_millis(100), 30);
        let mut simulator = DayCycleSimulator::new(
            config,
            Roster::new(),
            Box::new(ScriptedSampler::default()),
            narration,
        );

        simulator.start();
        // Two ticks land.
        tokio::time::sleep(Duration::from_millis(250)).await;
        simulator.stop();
        let day_at_stop = simulator.state().day;
        assert_eq!(day_at_stop, 2);

        // No tick fires after stop.
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(simulator.state().day, day_at_stop);
        assert!(!simulator.state().running);

        // Stopping again is a no-op.
        simulator.stop();
        assert_eq!(simulator.state().day, day_at_stop);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_resets_the_day_but_keeps_the_roster() {
        let narration = Arc::new(InMemoryNarration::new());
        let config = SimulatorConfig::new(Duration::from_millis(100), 2);
        let mut simulator = DayCycleSimulator::new(
            config,
            single_candidate_roster(Stage::New),
            Box::new(ScriptedSampler::default()),
            narration,
        );

        simulator.start();
        simulator.join().await;
        assert_eq!(simulator.state().day, 2);

        simulator.start();
        assert_eq!(simulator.state().day, 0);
        simulator.join().await;
        assert_eq!(simulator.state().day, 2);

        // The candidate survived both runs.
        assert_eq!(simulator.roster().lock().unwrap().len(), 1);
    }
}
