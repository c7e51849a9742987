//! Calibration reference types

use serde::{Deserialize, Serialize};

use crate::color_pipeline::sensor::types::NUM_CHANNELS;

/// Reflectance of the neutral gray card (18%).
pub const GRAY_REFLECTANCE: f32 = 0.18;

/// Field calibration state: averaged dark, gray and white references.
///
/// This is the snapshot exchanged with the persistence layer: three
/// fixed-length arrays, three presence flags and one timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalibrationReferences {
    /// Sensor output with no incident light (noise floor).
    pub dark: [f32; NUM_CHANNELS],
    /// Sensor output over the 18% gray card.
    pub gray: [f32; NUM_CHANNELS],
    /// Sensor output over a white reference tile.
    pub white: [f32; NUM_CHANNELS],
    pub has_dark: bool,
    pub has_gray: bool,
    pub has_white: bool,
    /// Milliseconds since boot at the last gray capture.
    pub timestamp_ms: u64,
}

impl CalibrationReferences {
    /// Dark and gray are both present, so readings are absolute reflectance.
    pub fn is_complete(&self) -> bool {
        self.has_dark && self.has_gray
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Which reference a capture operation fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Dark,
    Gray,
    White,
}

impl ReferenceKind {
    pub fn name(self) -> &'static str {
        match self {
            ReferenceKind::Dark => "dark",
            ReferenceKind::Gray => "gray",
            ReferenceKind::White => "white",
        }
    }

    /// Dark references are captured with the LED off.
    pub fn illuminated(self) -> bool {
        !matches!(self, ReferenceKind::Dark)
    }

    pub(crate) fn commit(self, refs: &mut CalibrationReferences, average: [f32; NUM_CHANNELS]) {
        match self {
            ReferenceKind::Dark => {
                refs.dark = average;
                refs.has_dark = true;
            }
            ReferenceKind::Gray => {
                refs.gray = average;
                refs.has_gray = true;
            }
            ReferenceKind::White => {
                refs.white = average;
                refs.has_white = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_sets_only_its_reference() {
        let mut refs = CalibrationReferences::default();
        ReferenceKind::White.commit(&mut refs, [3.0; NUM_CHANNELS]);

        assert!(refs.has_white);
        assert!(!refs.has_dark && !refs.has_gray);
        assert_eq!(refs.white, [3.0; NUM_CHANNELS]);
        assert_eq!(refs.dark, [0.0; NUM_CHANNELS]);
        assert!(!refs.is_complete());

        ReferenceKind::Dark.commit(&mut refs, [1.0; NUM_CHANNELS]);
        ReferenceKind::Gray.commit(&mut refs, [2.0; NUM_CHANNELS]);
        assert!(refs.is_complete());

        refs.clear();
        assert_eq!(refs, CalibrationReferences::default());
    }
}
