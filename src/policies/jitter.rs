//! # Jitter policy for inter-task pauses.
//!
//! [`JitterPolicy`] adds randomness to the pause the runner takes between attempts,
//! so that a batch hitting a rate-limited API does not produce a perfectly regular
//! request pattern.
//!
//! - [`JitterPolicy::None`]: no randomization, predictable pauses
//! - [`JitterPolicy::Full`]: random pause in [0, delay] (most aggressive)
//! - [`JitterPolicy::Equal`]: pause = delay/2 + random[0, delay/2] (balanced)

use rand::Rng;
use std::time::Duration;

/// Policy controlling randomization of the inter-task pause.
///
/// ## Trade-offs
/// - **None**: Predictable, easiest to reason about
/// - **Full**: Maximum randomness, can shorten pauses to zero
/// - **Equal**: Keeps at least half of the configured pause
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JitterPolicy {
    /// No jitter: pause for exactly the configured delay.
    #[default]
    None,

    /// Full jitter: random pause in [0, delay].
    Full,

    /// Equal jitter: pause = delay/2 + random[0, delay/2].
    Equal,
}

impl JitterPolicy {
    /// Applies jitter to the given delay.
    pub fn apply(&self, delay: Duration) -> Duration {
        match self {
            JitterPolicy::None => delay,
            JitterPolicy::Full => self.full_jitter(delay),
            JitterPolicy::Equal => self.equal_jitter(delay),
        }
    }

    /// Full jitter: random[0, delay]
    fn full_jitter(&self, delay: Duration) -> Duration {
        let mut rng = rand::rng();
        let ms = delay.as_millis() as u64;
        if ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rng.random_range(0..=ms))
    }

    /// Equal jitter: delay/2 + random[0, delay/2]
    fn equal_jitter(&self, delay: Duration) -> Duration {
        let mut rng = rand::rng();
        let ms = delay.as_millis() as u64;
        if ms == 0 {
            return Duration::ZERO;
        }
        let half = ms / 2;
        let jitter = if half == 0 {
            0
        } else {
            rng.random_range(0..=half)
        };
        Duration::from_millis(half + jitter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_identity() {
        let d = Duration::from_millis(500);
        assert_eq!(JitterPolicy::None.apply(d), d);
        assert_eq!(JitterPolicy::default(), JitterPolicy::None);
    }

    #[test]
    fn test_full_jitter_bounds() {
        for _ in 0..100 {
            let delay = JitterPolicy::Full.apply(Duration::from_millis(500));
            assert!(delay <= Duration::from_millis(500));
        }
    }

    #[test]
    fn test_equal_jitter_bounds() {
        for _ in 0..100 {
            let delay = JitterPolicy::Equal.apply(Duration::from_millis(500));
            assert!(delay >= Duration::from_millis(250));
            assert!(delay <= Duration::from_millis(500));
        }
    }

    #[test]
    fn test_zero_delay_stays_zero() {
        assert_eq!(JitterPolicy::Full.apply(Duration::ZERO), Duration::ZERO);
        assert_eq!(JitterPolicy::Equal.apply(Duration::ZERO), Duration::ZERO);
    }
}
