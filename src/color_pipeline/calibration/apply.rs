use crate::color_pipeline::calibration::types::{CalibrationReferences, GRAY_REFLECTANCE};
use crate::color_pipeline::sensor::types::{CalibratedSample, ChannelSample, NUM_CHANNELS};

/// Dark-subtracts every channel when a dark reference is present and, when
/// a gray reference is present, rescales it so the gray card reads as 0.18.
///
/// Channels whose gray-minus-dark span is not positive keep their
/// dark-subtracted value.
pub fn apply_calibration(sample: &ChannelSample, refs: &CalibrationReferences) -> CalibratedSample {
    let mut values = [0.0f32; NUM_CHANNELS];

    for (ch, value) in values.iter_mut().enumerate() {
        let raw = sample.counts()[ch] as f32;
        let mut calibrated = if refs.has_dark {
            (raw - refs.dark[ch]).max(0.0)
        } else {
            raw
        };

        if refs.has_gray {
            let span = refs.gray[ch] - refs.dark[ch];
            if span > 0.0 {
                calibrated = (calibrated / span) * GRAY_REFLECTANCE;
            }
        }

        *value = calibrated;
    }

    CalibratedSample::new(values)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn refs_with_dark(dark: f32) -> CalibrationReferences {
        CalibrationReferences {
            dark: [dark; NUM_CHANNELS],
            has_dark: true,
            ..Default::default()
        }
    }

    #[test]
    fn dark_only_subtracts_offset() {
        let sample = ChannelSample::new([100; NUM_CHANNELS]);
        let calibrated = apply_calibration(&sample, &refs_with_dark(20.0));
        assert_eq!(calibrated.values(), &[80.0; NUM_CHANNELS]);
    }

    #[test]
    fn dark_subtraction_clamps_at_zero() {
        let mut counts = [100u16; NUM_CHANNELS];
        counts[3] = 5;
        let calibrated = apply_calibration(&ChannelSample::new(counts), &refs_with_dark(20.0));
        assert_eq!(calibrated.values()[3], 0.0);
        assert!(calibrated.values().iter().all(|v| *v >= 0.0));
    }

    #[test]
    fn gray_card_reads_as_eighteen_percent() {
        let mut refs = refs_with_dark(20.0);
        refs.gray = [100.0; NUM_CHANNELS];
        refs.has_gray = true;

        let calibrated = apply_calibration(&ChannelSample::new([100; NUM_CHANNELS]), &refs);
        for value in calibrated.values() {
            assert_relative_eq!(*value, 0.18, epsilon = 1e-6);
        }
    }

    #[test]
    fn gray_normalization_matches_formula() {
        let mut refs = refs_with_dark(10.0);
        refs.gray = [410.0; NUM_CHANNELS];
        refs.has_gray = true;

        let mut counts = [0u16; NUM_CHANNELS];
        for (ch, count) in counts.iter_mut().enumerate() {
            *count = (ch as u16) * 60;
        }
        let calibrated = apply_calibration(&ChannelSample::new(counts), &refs);

        for ch in 0..NUM_CHANNELS {
            let expected = ((counts[ch] as f32 - 10.0).max(0.0) / 400.0) * 0.18;
            assert_relative_eq!(calibrated.values()[ch], expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn non_positive_gray_span_leaves_channel_unscaled() {
        let mut refs = refs_with_dark(50.0);
        refs.gray = [150.0; NUM_CHANNELS];
        refs.gray[0] = 50.0;
        refs.gray[1] = 40.0;
        refs.has_gray = true;

        let calibrated = apply_calibration(&ChannelSample::new([250; NUM_CHANNELS]), &refs);
        assert_eq!(calibrated.values()[0], 200.0);
        assert_eq!(calibrated.values()[1], 200.0);
        assert_relative_eq!(calibrated.values()[2], 0.36, epsilon = 1e-6);
    }

    #[test]
    fn dark_ignored_while_flag_unset() {
        let refs = CalibrationReferences {
            dark: [20.0; NUM_CHANNELS],
            ..Default::default()
        };

        let calibrated = apply_calibration(&ChannelSample::new([100; NUM_CHANNELS]), &refs);
        assert_eq!(calibrated.values(), &[100.0; NUM_CHANNELS]);
    }

    #[test]
    fn clamp_then_normalize_over_sweep() {
        let levels = [0u16, 5, 19, 20, 21, 64, 100, 999, 4096, u16::MAX];
        let darks = [0.0f32, 20.0, 150.5];
        let grays = [10.0f32, 20.0, 151.0, 800.0, 60000.0];

        for &dark in &darks {
            for &gray in &grays {
                let mut refs = refs_with_dark(dark);
                refs.gray = [gray; NUM_CHANNELS];
                refs.has_gray = true;
                let span = gray - dark;

                for &raw in &levels {
                    let calibrated = apply_calibration(&ChannelSample::new([raw; NUM_CHANNELS]), &refs);
                    let subtracted = (raw as f32 - dark).max(0.0);
                    let expected = if span > 0.0 {
                        subtracted / span * 0.18
                    } else {
                        subtracted
                    };

                    for value in calibrated.values() {
                        assert!(*value >= 0.0, "negative for raw={raw} dark={dark} gray={gray}");
                        assert_relative_eq!(*value, expected, max_relative = 1e-6);
                    }
                    if (raw as f32) < dark {
                        assert_eq!(calibrated.values()[0], 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn gray_ignored_while_flag_unset() {
        let mut refs = refs_with_dark(20.0);
        refs.gray = [100.0; NUM_CHANNELS];

        let calibrated = apply_calibration(&ChannelSample::new([100; NUM_CHANNELS]), &refs);
        assert_eq!(calibrated.values(), &[80.0; NUM_CHANNELS]);
    }
}
