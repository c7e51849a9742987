//! Calibration module
//!
//! Reference storage and the per-channel calibration step of the pipeline.

mod apply;
pub mod types;

pub use apply::apply_calibration;
pub use types::{CalibrationReferences, GRAY_REFLECTANCE, ReferenceKind};
