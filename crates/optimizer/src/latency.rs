use configuration::LatencyParams;
use rand::Rng;
use std::time::Duration;

/// Stands in for the round trip to a remote optimization service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencySimulator {
    base: Duration,
    jitter_ms: u64,
}

impl LatencySimulator {
    pub fn new(params: &LatencyParams) -> Self {
        Self {
            base: Duration::from_millis(params.base_ms),
            jitter_ms: params.jitter_ms,
        }
    }

    /// No delay at all.
    pub fn disabled() -> Self {
        Self {
            base: Duration::ZERO,
            jitter_ms: 0,
        }
    }

    /// `base + uniform(0..=jitter)`.
    pub fn sample(&self) -> Duration {
        let jitter = if self.jitter_ms == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..=self.jitter_ms)
        };
        self.base + Duration::from_millis(jitter)
    }

    /// Sleeps for one sampled delay and reports how long it was.
    pub async fn wait(&self) -> Duration {
        let delay = self.sample();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        delay
    }
}

impl Default for LatencySimulator {
    fn default() -> Self {
        Self::new(&LatencyParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_within_bounds() {
        let simulator = LatencySimulator::default();
        for _ in 0..200 {
            let delay = simulator.sample();
            assert!(delay >= Duration::from_millis(1500));
            assert!(delay <= Duration::from_millis(2500));
        }
    }

    #[test]
    fn disabled_never_waits() {
        assert_eq!(LatencySimulator::disabled().sample(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn wait_sleeps_on_the_tokio_clock() {
        let simulator = LatencySimulator::new(&LatencyParams {
            base_ms: 1500,
            jitter_ms: 0,
        });
        let started = tokio::time::Instant::now();
        let delay = simulator.wait().await;
        assert_eq!(delay, Duration::from_millis(1500));
        assert!(started.elapsed() >= delay);
    }
}
