//! Sensor access module
//!
//! This module defines the driver boundary, channel types and the gain table.

mod driver;
pub mod gain;
pub mod simulated_driver;
pub mod types;

pub use driver::SpectralDriver;
pub use gain::{DEFAULT_GAIN_INDEX, GAIN_COUNT, GAIN_TABLE, Gain, wrap_gain_index};
pub use simulated_driver::{Scene, SceneHandle, SimulatedDriver};
pub use types::{CalibratedSample, Channel, ChannelSample, NUM_CHANNELS};
