//! Deterministic software model of the spectral sensor.
//!
//! The simulated sensor reports, per channel,
//!
//! ```text
//! counts = dark_offset + (lamp_on ? reflectance * lamp_response * gain : 0)
//! ```
//!
//! saturated to the 16-bit ADC range. The scene in front of the sensor is
//! shared through a [`SceneHandle`] so a caller can swap targets (cover, gray
//! card, white tile, sample) while the pipeline owns the driver.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::color_pipeline::sensor::driver::SpectralDriver;
use crate::color_pipeline::sensor::gain::{DEFAULT_GAIN_INDEX, GAIN_TABLE, Gain};
use crate::color_pipeline::sensor::types::NUM_CHANNELS;

/// Counts produced per channel by the LED on a perfect reflector at 1x gain.
const DEFAULT_LAMP_RESPONSE: [f32; NUM_CHANNELS] = [
    38.0, 52.0, 61.0, 70.0, 84.0, 90.0, 88.0, 80.0, 72.0, 60.0, 41.0, 25.0, 150.0, 12.0,
];

/// Sensor noise floor in counts.
const DEFAULT_DARK_OFFSET: [u16; NUM_CHANNELS] = [12, 14, 15, 13, 16, 18, 17, 15, 14, 13, 12, 20, 30, 8];

/// What the sensor is currently looking at.
#[derive(Debug, Clone)]
pub struct Scene {
    pub reflectance: [f32; NUM_CHANNELS],
    pub dark_offset: [u16; NUM_CHANNELS],
    pub lamp_response: [f32; NUM_CHANNELS],
    /// When false, `begin` fails as if nothing answered on the bus.
    pub present: bool,
    /// When true, every read returns no data.
    pub faulted: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            reflectance: [0.0; NUM_CHANNELS],
            dark_offset: DEFAULT_DARK_OFFSET,
            lamp_response: DEFAULT_LAMP_RESPONSE,
            present: true,
            faulted: false,
        }
    }
}

/// Shared handle used to change the scene while the pipeline runs.
#[derive(Debug, Clone, Default)]
pub struct SceneHandle {
    scene: Arc<Mutex<Scene>>,
}

impl SceneHandle {
    /// Sensor covered, lamp light fully absorbed.
    pub fn cover(&self) {
        self.scene.lock().reflectance = [0.0; NUM_CHANNELS];
    }

    /// Neutral target with the same reflectance on every channel.
    pub fn neutral(&self, reflectance: f32) {
        self.scene.lock().reflectance = [reflectance; NUM_CHANNELS];
    }

    pub fn target(&self, reflectance: [f32; NUM_CHANNELS]) {
        self.scene.lock().reflectance = reflectance;
    }

    pub fn set_faulted(&self, faulted: bool) {
        self.scene.lock().faulted = faulted;
    }

    pub fn set_present(&self, present: bool) {
        self.scene.lock().present = present;
    }

    pub fn snapshot(&self) -> Scene {
        self.scene.lock().clone()
    }
}

pub struct SimulatedDriver {
    scene: SceneHandle,
    gain: Gain,
    lamp_on: bool,
    address: Option<u8>,
}

impl SimulatedDriver {
    pub fn new() -> (Self, SceneHandle) {
        let scene = SceneHandle::default();
        let driver = Self {
            scene: scene.clone(),
            gain: GAIN_TABLE[DEFAULT_GAIN_INDEX],
            lamp_on: false,
            address: None,
        };
        (driver, scene)
    }

    pub fn gain(&self) -> Gain {
        self.gain
    }

    pub fn is_lamp_on(&self) -> bool {
        self.lamp_on
    }
}

impl SpectralDriver for SimulatedDriver {
    fn begin(&mut self, address: u8) -> bool {
        if !self.scene.scene.lock().present {
            return false;
        }
        self.address = Some(address);
        debug!("Simulated sensor answered at 0x{:02X}", address);
        true
    }

    fn read_channels(&mut self) -> Option<[u16; NUM_CHANNELS]> {
        let scene = self.scene.scene.lock();
        if self.address.is_none() || scene.faulted {
            return None;
        }

        let gain = self.gain.multiplier();
        let mut counts = [0u16; NUM_CHANNELS];
        for (ch, count) in counts.iter_mut().enumerate() {
            let lit = if self.lamp_on {
                scene.reflectance[ch] * scene.lamp_response[ch] * gain
            } else {
                0.0
            };
            let total = scene.dark_offset[ch] as f32 + lit;
            *count = total.round().clamp(0.0, u16::MAX as f32) as u16;
        }
        Some(counts)
    }

    fn set_gain(&mut self, gain: Gain) {
        self.gain = gain;
    }

    fn illumination_on(&mut self) {
        self.lamp_on = true;
    }

    fn illumination_off(&mut self) {
        self.lamp_on = false;
    }
}
