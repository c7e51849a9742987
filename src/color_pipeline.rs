//! Color measurement pipeline module
//!
//! This module turns raw spectral sensor counts into a color under a
//! dark / gray / white field calibration, with separate modules for sensor
//! access, calibration, color conversion and measurement orchestration.

pub mod calibration;
pub mod common;
pub mod conversions;
pub mod measurement;
pub mod sensor;

pub use common::{Result, SensorError};

pub use sensor::{
    CalibratedSample,
    Channel,
    ChannelSample,
    GAIN_COUNT,
    Gain,
    NUM_CHANNELS,
    SceneHandle,
    SimulatedDriver,
    SpectralDriver,
};

pub use calibration::{
    CalibrationReferences,
    GRAY_REFLECTANCE,
    apply_calibration,
};

pub use conversions::{
    ColorResult,
    calibrated_to_color,
    convert,
};

pub use measurement::{
    Measurement,
    MeasurementPipeline,
    PipelineConfig,
    PipelineConfigBuilder,
    PipelineTimings,
};
