//! Measurement module
//!
//! Orchestrates hardware access: live measurements, calibration captures and
//! gain changes, all serialized on one sensor bus.

mod config;
mod guard;
mod pipeline;
mod timing;
mod types;


pub use config::{DEFAULT_I2C_ADDRESS, PipelineConfig, PipelineConfigBuilder};
pub use guard::{Illuminated, SensorBus};
pub use pipeline::MeasurementPipeline;
pub use timing::{PipelineTimings, StepTiming, Timer};
pub use types::Measurement;
