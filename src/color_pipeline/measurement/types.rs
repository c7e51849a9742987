use crate::color_pipeline::conversions::ColorResult;
use crate::color_pipeline::sensor::types::{CalibratedSample, ChannelSample};

/// A successful live reading with the samples it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub raw: ChannelSample,
    pub calibrated: CalibratedSample,
    pub color: ColorResult,
    /// Milliseconds since the pipeline was constructed
    pub timestamp_ms: u64,
}
