//! Scoped access to the shared sensor bus and illumination LED.

use std::ops::{Deref, DerefMut};
use std::time::Duration;

use parking_lot::{Mutex, MutexGuard};
use tracing::warn;

use crate::color_pipeline::common::error::{Result, SensorError};
use crate::color_pipeline::sensor::SpectralDriver;

/// Serializes every operation that touches the sensor bus or the LED.
///
/// Access is handed out as a guard; dropping it releases the bus on every
/// exit path.
pub struct SensorBus<D: SpectralDriver> {
    driver: Mutex<D>,
}

impl<D: SpectralDriver> SensorBus<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver: Mutex::new(driver),
        }
    }

    /// Waits for the bus. With `timeout` set, gives up after that long.
    pub fn acquire(&self, timeout: Option<Duration>) -> Result<MutexGuard<'_, D>> {
        match timeout {
            None => Ok(self.driver.lock()),
            Some(limit) => self.driver.try_lock_for(limit).ok_or_else(|| {
                warn!("Sensor bus busy for {:?}, giving up", limit);
                SensorError::Timeout(limit)
            }),
        }
    }
}

/// Keeps the LED on while alive and switches it off when dropped,
/// including during unwinding.
pub struct Illuminated<'a, D: SpectralDriver> {
    driver: &'a mut D,
}

impl<'a, D: SpectralDriver> Illuminated<'a, D> {
    pub fn on(driver: &'a mut D) -> Self {
        driver.illumination_on();
        Self { driver }
    }
}

impl<D: SpectralDriver> Deref for Illuminated<'_, D> {
    type Target = D;

    fn deref(&self) -> &D {
        self.driver
    }
}

impl<D: SpectralDriver> DerefMut for Illuminated<'_, D> {
    fn deref_mut(&mut self) -> &mut D {
        self.driver
    }
}

impl<D: SpectralDriver> Drop for Illuminated<'_, D> {
    fn drop(&mut self) {
        self.driver.illumination_off();
    }
}
