use std::sync::Arc;
use std::thread;

use anyhow::Context;
use chroma_probe_rs::color_pipeline::{
    Channel, MeasurementPipeline, NUM_CHANNELS, PipelineConfig, SceneHandle, SimulatedDriver,
};
use chroma_probe_rs::logger;

use tracing::{debug, error, info};

/// Orange-ish swatch: low blue, rising toward red.
const SWATCH: [f32; NUM_CHANNELS] = [
    0.06, 0.07, 0.08, 0.10, 0.18, 0.30, 0.28, 0.55, 0.62, 0.66, 0.64, 0.60, 0.35, 0.30,
];

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting chroma_probe...");

    let (driver, scene) = SimulatedDriver::new();
    let pipeline = Arc::new(MeasurementPipeline::new(driver, PipelineConfig::default()));
    pipeline.begin().context("starting spectral sensor")?;

    info!("Sensor gain: {}", pipeline.gain_label());

    run_calibration(&pipeline, &scene)?;

    scene.target(SWATCH);

    // A UI context and a remote-command context share the same pipeline.
    let contexts: Vec<_> = ["ui", "remote"]
        .into_iter()
        .map(|name| {
            let pipeline = Arc::clone(&pipeline);
            thread::Builder::new()
                .name(name.to_string())
                .spawn(move || match pipeline.measure(true) {
                    Ok(m) => info!(
                        "Measured {} (X={:.3} Y={:.3} Z={:.3})",
                        m.color.to_hex(),
                        m.color.x,
                        m.color.y,
                        m.color.z
                    ),
                    Err(e) => error!("Measurement failed: {}", e),
                })
                .context("spawning measurement context")
        })
        .collect::<anyhow::Result<_>>()?;

    for handle in contexts {
        if handle.join().is_err() {
            error!("Measurement context panicked");
        }
    }

    Ok(())
}

fn run_calibration(pipeline: &MeasurementPipeline<SimulatedDriver>, scene: &SceneHandle) -> anyhow::Result<()> {
    scene.cover();
    pipeline.capture_dark().context("dark reference")?;

    scene.neutral(0.18);
    pipeline.capture_gray().context("gray reference")?;

    scene.neutral(0.9);
    pipeline.capture_white().context("white reference")?;

    let refs = pipeline.calibration();
    for channel in Channel::ALL {
        let ch = channel.index();
        debug!(
            "{:>5} ({:>7}): dark {:8.1} gray {:8.1} white {:8.1}",
            channel.name(),
            channel.band(),
            refs.dark[ch],
            refs.gray[ch],
            refs.white[ch]
        );
    }
    info!(
        complete = refs.is_complete(),
        has_white = refs.has_white,
        "Calibration finished"
    );
    Ok(())
}
