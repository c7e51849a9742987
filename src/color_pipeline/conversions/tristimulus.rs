use crate::color_pipeline::sensor::types::{CalibratedSample, Channel};

/// Maps calibrated channels to approximate XYZ.
///
/// FXL, FY and FZ stand in directly for X, Y and Z. This is a first-order
/// substitute for a spectral integral against the CIE observer, and saved
/// colors depend on it staying that way.
///
/// Without a gray reference there is no absolute scale, so the triple is
/// divided by its largest component for relative display.
pub fn spectral_to_xyz(calibrated: &CalibratedSample, has_gray: bool) -> [f32; 3] {
    let mut xyz = [
        calibrated.get(Channel::FXL),
        calibrated.get(Channel::FY),
        calibrated.get(Channel::FZ),
    ];

    if !has_gray {
        let max = xyz[0].max(xyz[1]).max(xyz[2]);
        if max > 0.0 {
            for v in xyz.iter_mut() {
                *v /= max;
            }
        }
    }

    xyz
}
