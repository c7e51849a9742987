use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use chroma_probe_rs::color_pipeline::{
    CalibrationReferences, ChannelSample, NUM_CHANNELS, apply_calibration, calibrated_to_color, convert,
};
use chroma_probe_rs::color_pipeline::conversions::xyz_to_srgb8;

fn generate_mock_sample(seed: u16) -> ChannelSample {
    let mut counts = [0u16; NUM_CHANNELS];
    for (ch, count) in counts.iter_mut().enumerate() {
        *count = 200 + ((ch as u16 * 37 + seed) % 900);
    }
    ChannelSample::new(counts)
}

fn calibration_states() -> Vec<(CalibrationReferences, &'static str)> {
    let dark_only = CalibrationReferences {
        dark: [18.0; NUM_CHANNELS],
        has_dark: true,
        ..Default::default()
    };
    let full = CalibrationReferences {
        gray: [640.0; NUM_CHANNELS],
        has_gray: true,
        ..dark_only
    };
    vec![
        (CalibrationReferences::default(), "uncalibrated"),
        (dark_only, "dark_only"),
        (full, "dark_and_gray"),
    ]
}

fn benchmark_full_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_by_calibration");
    let sample = generate_mock_sample(7);

    for (refs, label) in calibration_states() {
        group.bench_with_input(BenchmarkId::from_parameter(label), &refs, |b, refs| {
            b.iter(|| convert(black_box(&sample), black_box(refs)));
        });
    }

    group.finish();
}

fn benchmark_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let sample = generate_mock_sample(3);
    let (refs, _) = calibration_states().remove(2);
    let calibrated = apply_calibration(&sample, &refs);

    group.bench_function("apply_calibration", |b| {
        b.iter(|| apply_calibration(black_box(&sample), black_box(&refs)));
    });
    group.bench_function("calibrated_to_color", |b| {
        b.iter(|| calibrated_to_color(black_box(&calibrated), black_box(&refs)));
    });
    group.bench_function("xyz_to_srgb8", |b| {
        b.iter(|| xyz_to_srgb8(black_box([0.38, 0.40, 0.43])));
    });

    group.finish();
}

criterion_group!(benches, benchmark_full_chain, benchmark_stages);
criterion_main!(benches);
