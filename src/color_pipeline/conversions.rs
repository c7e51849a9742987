//! Color conversion module
//!
//! Pure, stateless chain from raw channel counts to a display color:
//! calibration, tristimulus approximation, D65 matrix, sRGB encoding.
//! Nothing in here reads time, hardware or any state beyond its arguments.

pub mod srgb;
mod tristimulus;
pub mod types;

pub use srgb::{xyz_to_linear_srgb, xyz_to_srgb8};
pub use tristimulus::spectral_to_xyz;
pub use types::ColorResult;

use crate::color_pipeline::calibration::{CalibrationReferences, apply_calibration};
use crate::color_pipeline::sensor::types::{CalibratedSample, ChannelSample};

/// Converts an already-calibrated sample to a color.
pub fn calibrated_to_color(calibrated: &CalibratedSample, refs: &CalibrationReferences) -> ColorResult {
    let [x, y, z] = spectral_to_xyz(calibrated, refs.has_gray);
    let [r, g, b] = xyz_to_srgb8([x, y, z]);
    ColorResult { x, y, z, r, g, b }
}

/// Runs the whole chain on a raw sample.
pub fn convert(sample: &ChannelSample, refs: &CalibrationReferences) -> (CalibratedSample, ColorResult) {
    let calibrated = apply_calibration(sample, refs);
    let color = calibrated_to_color(&calibrated, refs);
    (calibrated, color)
}
