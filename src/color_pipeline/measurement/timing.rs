use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: &'static str,
    pub duration: Duration,
}

/// Per-step durations of one pipeline operation (bus wait, LED settle,
/// acquisition, conversion).
#[derive(Debug, Default)]
pub struct PipelineTimings {
    steps: Vec<StepTiming>,
    totals: HashMap<&'static str, Duration>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, (name, duration): (&'static str, Duration)) {
        self.steps.push(StepTiming { name, duration });
        *self.totals.entry(name).or_insert(Duration::ZERO) += duration;
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    /// Summed duration of every step recorded under `name`.
    pub fn get_step(&self, name: &str) -> Option<Duration> {
        self.totals.get(name).copied()
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }

    pub fn log_summary(&self) {
        let total = self.total_duration();
        for step in &self.steps {
            debug!(
                step = step.name,
                ms = step.duration.as_secs_f64() * 1000.0,
                "pipeline step"
            );
        }
        debug!(ms = total.as_secs_f64() * 1000.0, "pipeline total");
    }
}

pub struct Timer {
    start: Instant,
    name: &'static str,
}

impl Timer {
    pub fn start(name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            name,
        }
    }

    pub fn stop(self) -> (&'static str, Duration) {
        (self.name, self.start.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_steps_accumulate() {
        let mut timings = PipelineTimings::new();
        timings.record(("acquire", Duration::from_millis(3)));
        timings.record(("convert", Duration::from_millis(1)));
        timings.record(("acquire", Duration::from_millis(4)));

        assert_eq!(timings.steps().len(), 3);
        assert_eq!(timings.get_step("acquire"), Some(Duration::from_millis(7)));
        assert_eq!(timings.get_step("settle"), None);
        assert_eq!(timings.total_duration(), Duration::from_millis(8));
    }
}
