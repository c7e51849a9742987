use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::color_pipeline::{
    calibration::{CalibrationReferences, ReferenceKind},
    common::error::{Result, SensorError},
    conversions,
    measurement::{
        config::PipelineConfig,
        guard::{Illuminated, SensorBus},
        timing::{PipelineTimings, Timer},
        types::Measurement,
    },
    sensor::{ChannelSample, GAIN_TABLE, Gain, NUM_CHANNELS, SpectralDriver, wrap_gain_index},
};

/// Owns the sensor driver and calibration state, and runs measurements and
/// calibration captures against them.
///
/// Every method takes `&self`; share the pipeline between threads with an
/// `Arc`. Operations that touch the hardware queue on one bus lock and block
/// their caller for their full duration (one measurement is ~150 ms with the
/// LED, a capture is around two seconds), so call them off latency-critical
/// paths.
///
/// Changing the gain does not touch stored references. Re-run calibration
/// after a gain change.
pub struct MeasurementPipeline<D: SpectralDriver> {
    bus: SensorBus<D>,
    calibration: RwLock<CalibrationReferences>,
    gain_index: AtomicUsize,
    initialized: AtomicBool,
    config: PipelineConfig,
    epoch: Instant,
}

impl<D: SpectralDriver> MeasurementPipeline<D> {
    pub fn new(driver: D, config: PipelineConfig) -> Self {
        Self {
            bus: SensorBus::new(driver),
            calibration: RwLock::new(CalibrationReferences::default()),
            gain_index: AtomicUsize::new(wrap_gain_index(config.default_gain_index as i64)),
            initialized: AtomicBool::new(false),
            config,
            epoch: Instant::now(),
        }
    }

    /// Starts the driver, applies the configured gain and makes sure the
    /// LED is off. Until this succeeds every other operation returns
    /// [`SensorError::NotInitialized`].
    #[instrument(skip(self), fields(address = self.config.i2c_address))]
    pub fn begin(&self) -> Result<()> {
        let mut driver = self.bus.acquire(self.config.lock_timeout)?;

        if !driver.begin(self.config.i2c_address) {
            warn!("Spectral sensor not found at 0x{:02X}", self.config.i2c_address);
            return Err(SensorError::DriverNotFound(self.config.i2c_address));
        }

        let gain = self.gain();
        driver.set_gain(gain);
        driver.illumination_off();
        self.initialized.store(true, Ordering::Release);

        info!(gain = gain.label(), "Spectral sensor initialized (LED off)");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Takes one reading and converts it to a color.
    ///
    /// With `with_illumination` the LED is switched on, left to settle, one
    /// stale reading is discarded and the next one is kept. Without it the
    /// sensor is read immediately in the dark.
    #[instrument(skip(self))]
    pub fn measure(&self, with_illumination: bool) -> Result<Measurement> {
        let (measurement, timings) = self.measure_with_timings(with_illumination)?;
        timings.log_summary();
        Ok(measurement)
    }

    pub fn measure_with_timings(&self, with_illumination: bool) -> Result<(Measurement, PipelineTimings)> {
        self.ensure_initialized()?;
        let mut timings = PipelineTimings::new();

        let timer = Timer::start("bus_wait");
        let mut driver = self.bus.acquire(self.config.lock_timeout)?;
        timings.record(timer.stop());

        let raw = self
            .acquire(&mut driver, with_illumination, &mut timings)
            .inspect_err(|e| warn!("Measurement failed: {}", e))?;

        let timer = Timer::start("convert");
        let refs = *self.calibration.read();
        let (calibrated, color) = conversions::convert(&raw, &refs);
        timings.record(timer.stop());

        drop(driver);

        debug!(
            x = color.x,
            y = color.y,
            z = color.z,
            hex = %color.to_hex(),
            "Measurement complete"
        );

        let measurement = Measurement {
            raw,
            calibrated,
            color,
            timestamp_ms: self.now_ms(),
        };
        Ok((measurement, timings))
    }

    /// Averages readings with the sensor covered into the dark reference.
    #[instrument(skip(self))]
    pub fn capture_dark(&self) -> Result<()> {
        self.capture(ReferenceKind::Dark)
    }

    /// Averages readings over the 18% gray card. Needs a dark reference.
    #[instrument(skip(self))]
    pub fn capture_gray(&self) -> Result<()> {
        self.capture(ReferenceKind::Gray)
    }

    #[instrument(skip(self))]
    pub fn capture_white(&self) -> Result<()> {
        self.capture(ReferenceKind::White)
    }

    /// Copy of the current references.
    pub fn calibration(&self) -> CalibrationReferences {
        *self.calibration.read()
    }

    /// Replaces the references wholesale, e.g. from a persisted snapshot at
    /// startup.
    ///
    /// A gray reference without a dark one is dropped, since gray is only
    /// meaningful relative to the dark it was captured against.
    pub fn set_calibration(&self, mut snapshot: CalibrationReferences) {
        if snapshot.has_gray && !snapshot.has_dark {
            warn!("Restored gray reference has no dark reference, discarding gray");
            snapshot.has_gray = false;
        }
        *self.calibration.write() = snapshot;
        info!(
            has_dark = snapshot.has_dark,
            has_gray = snapshot.has_gray,
            has_white = snapshot.has_white,
            "Calibration restored"
        );
    }

    pub fn gain_index(&self) -> usize {
        self.gain_index.load(Ordering::Acquire)
    }

    pub fn gain(&self) -> Gain {
        GAIN_TABLE[self.gain_index()]
    }

    pub fn gain_label(&self) -> &'static str {
        self.gain().label()
    }

    /// Selects a gain by table index, wrapping out-of-range and negative
    /// values, and returns the index actually applied.
    #[instrument(skip(self))]
    pub fn set_gain_index(&self, index: i64) -> Result<usize> {
        self.ensure_initialized()?;
        let mut driver = self.bus.acquire(self.config.lock_timeout)?;

        let wrapped = wrap_gain_index(index);
        let gain = GAIN_TABLE[wrapped];
        driver.set_gain(gain);
        self.gain_index.store(wrapped, Ordering::Release);

        info!("Gain set to {}", gain.label());
        Ok(wrapped)
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(SensorError::NotInitialized)
        }
    }

    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    /// One reading under an already-held bus. The LED is off again when this
    /// returns, whatever the outcome.
    fn acquire(&self, driver: &mut D, with_illumination: bool, timings: &mut PipelineTimings) -> Result<ChannelSample> {
        let counts = if with_illumination {
            let mut lamp = Illuminated::on(driver);

            let timer = Timer::start("settle");
            pause(self.config.settle_delay);
            if lamp.read_channels().is_none() {
                debug!("Warm-up flush read returned no data");
            }
            timings.record(timer.stop());

            let timer = Timer::start("acquire");
            let counts = lamp.read_channels();
            timings.record(timer.stop());
            counts
        } else {
            let timer = Timer::start("acquire");
            let counts = driver.read_channels();
            timings.record(timer.stop());
            counts
        };

        counts.map(ChannelSample::new).ok_or(SensorError::ReadFailed)
    }

    /// Averages `capture_samples` readings into one reference. Either every
    /// reading succeeds and the average is committed, or nothing changes.
    fn capture(&self, kind: ReferenceKind) -> Result<()> {
        self.ensure_initialized()?;
        let mut driver = self.bus.acquire(self.config.lock_timeout)?;

        if kind == ReferenceKind::Gray && !self.calibration.read().has_dark {
            warn!("Dark reference required before gray");
            return Err(SensorError::MissingPrerequisite {
                required: ReferenceKind::Dark.name(),
                requested: kind.name(),
            });
        }

        let samples = self.config.capture_samples;
        let mut timings = PipelineTimings::new();
        let mut sums = [0.0f32; NUM_CHANNELS];

        for i in 0..samples {
            if i > 0 {
                pause(self.config.sample_interval);
            }

            let sample = self
                .acquire(&mut driver, kind.illuminated(), &mut timings)
                .map_err(|_| {
                    warn!(
                        "{} capture aborted at sample {} of {}",
                        kind.name(),
                        i + 1,
                        samples
                    );
                    SensorError::AcquisitionFailed { sample: i + 1, of: samples }
                })?;

            for (sum, count) in sums.iter_mut().zip(sample.counts()) {
                *sum += *count as f32;
            }
        }

        let average = sums.map(|sum| sum / samples as f32);
        {
            let mut refs = self.calibration.write();
            kind.commit(&mut refs, average);
            if kind == ReferenceKind::Gray {
                refs.timestamp_ms = self.now_ms();
            }
        }

        timings.log_summary();
        info!("{} reference captured ({} samples)", kind.name(), samples);
        Ok(())
    }
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}
