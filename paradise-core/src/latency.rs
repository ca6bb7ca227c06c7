use std::time::Duration;

/// Fixed delay standing in for a backend round trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulatedLatency(Duration);

impl SimulatedLatency {
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    pub fn none() -> Self {
        Self(Duration::ZERO)
    }

    pub fn duration(&self) -> Duration {
        self.0
    }

    pub async fn wait(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_wait_advances_clock() {
        let latency = SimulatedLatency::from_millis(1000);
        let start = tokio::time::Instant::now();
        latency.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }
}
