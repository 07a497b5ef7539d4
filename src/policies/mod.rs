//! Pacing policies.
//!
//! ## Contents
//! - [`JitterPolicy`] randomization applied to the pause between attempts
//!
//! ## Quick wiring
//! ```text
//! RunnerConfig { inter_task_delay, jitter }
//!      └─► core::Runner calls config.pause() before every attempt but the first:
//!           - Duration::ZERO  → no pause
//!           - otherwise       → jitter.apply(inter_task_delay)
//! ```

mod jitter;

pub use jitter::JitterPolicy;
