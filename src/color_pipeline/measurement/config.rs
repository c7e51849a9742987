//! Measurement pipeline configuration types

use std::time::Duration;

use crate::color_pipeline::sensor::gain::DEFAULT_GAIN_INDEX;

/// Default I2C address of the spectral sensor.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x39;

/// Configuration for the measurement pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Bus address passed to the driver on `begin`
    pub i2c_address: u8,
    /// LED warm-up before an illuminated read. Must cover one full
    /// integration cycle across both SMUX banks (~2 x 50 ms plus margin).
    pub settle_delay: Duration,
    /// Pause between consecutive samples of a calibration capture
    pub sample_interval: Duration,
    /// Samples averaged per calibration capture
    pub capture_samples: usize,
    /// Gain table index applied on `begin`
    pub default_gain_index: usize,
    /// Upper bound on waiting for the sensor bus. `None` blocks forever.
    pub lock_timeout: Option<Duration>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            i2c_address: DEFAULT_I2C_ADDRESS,
            settle_delay: Duration::from_millis(150),
            sample_interval: Duration::from_millis(50),
            capture_samples: 10,
            default_gain_index: DEFAULT_GAIN_INDEX,
            lock_timeout: None,
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for PipelineConfig
#[derive(Default)]
pub struct PipelineConfigBuilder {
    i2c_address: Option<u8>,
    settle_delay: Option<Duration>,
    sample_interval: Option<Duration>,
    capture_samples: Option<usize>,
    default_gain_index: Option<usize>,
    lock_timeout: Option<Option<Duration>>,
}

impl PipelineConfigBuilder {
    pub fn i2c_address(mut self, address: u8) -> Self {
        self.i2c_address = Some(address);
        self
    }

    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = Some(delay);
        self
    }

    pub fn sample_interval(mut self, interval: Duration) -> Self {
        self.sample_interval = Some(interval);
        self
    }

    pub fn capture_samples(mut self, samples: usize) -> Self {
        self.capture_samples = Some(samples);
        self
    }

    pub fn default_gain_index(mut self, index: usize) -> Self {
        self.default_gain_index = Some(index);
        self
    }

    pub fn lock_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.lock_timeout = Some(timeout);
        self
    }

    /// Builds the config. A zero sample count is raised to one.
    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            i2c_address: self.i2c_address.unwrap_or(default.i2c_address),
            settle_delay: self.settle_delay.unwrap_or(default.settle_delay),
            sample_interval: self.sample_interval.unwrap_or(default.sample_interval),
            capture_samples: self.capture_samples.unwrap_or(default.capture_samples).max(1),
            default_gain_index: self.default_gain_index.unwrap_or(default.default_gain_index),
            lock_timeout: self.lock_timeout.unwrap_or(default.lock_timeout),
        }
    }
}
