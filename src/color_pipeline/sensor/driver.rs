use crate::color_pipeline::sensor::gain::Gain;
use crate::color_pipeline::sensor::types::NUM_CHANNELS;

/// Register-level access to the spectral sensor and its illumination LED.
///
/// All physical I/O goes through this trait so the pipeline can run against
/// a deterministic test double.
pub trait SpectralDriver: Send {
    /// Probes the sensor at `address` and powers it up. Returns `false` if
    /// the device does not answer.
    fn begin(&mut self, address: u8) -> bool;

    /// Reads one full multi-bank scan. `None` means no valid data.
    fn read_channels(&mut self) -> Option<[u16; NUM_CHANNELS]>;

    fn set_gain(&mut self, gain: Gain);

    fn illumination_on(&mut self);

    fn illumination_off(&mut self);
}
