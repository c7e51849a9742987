use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SensorError {
    #[error("Sensor driver not initialized")]
    NotInitialized,

    #[error("Spectral sensor not found at address 0x{0:02X}")]
    DriverNotFound(u8),

    #[error("Sensor read returned no valid data")]
    ReadFailed,

    #[error("{requested} reference requires {required} reference first")]
    MissingPrerequisite {
        required: &'static str,
        requested: &'static str,
    },

    #[error("Calibration capture aborted: sample {sample} of {of} failed")]
    AcquisitionFailed { sample: usize, of: usize },

    #[error("Timed out after {0:?} waiting for sensor bus")]
    Timeout(Duration),
}

pub type Result<T> = std::result::Result<T, SensorError>;
