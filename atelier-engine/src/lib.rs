//! Atelier Engine
//!
//! The temporal machinery behind the Atelier simulations.
//!
//! Architecture:
//! - Sequencer: drives an ordered step list over wall-clock time through a sink
//! - Day cycle: repeating tick that ages a recruitment roster probabilistically
//! - Workflow: replays a scripted branch/commit sequence against a live store
//! - Narration: buffered, categorized audit trail of every mutation
//! - Rng: injectable random source so runs are reproducible from a seed
//!
//! Every spawned task's handle is retained by its owner so stop, restart and
//! drop cancel all pending timers. Cancellation only prevents future ticks;
//! an in-flight tick is never rolled back.

pub mod config;
pub mod daycycle;
pub mod narration;
pub mod rng;
pub mod sequencer;
pub mod workflow;

pub use config::SimulatorConfig;
pub use daycycle::DayCycleSimulator;
pub use narration::{InMemoryNarration, NarrationSink};
pub use rng::{Sampler, ScriptedSampler, SeededSampler};
pub use sequencer::{SequenceState, Sequencer, StepSink};
pub use workflow::WorkflowSink;
