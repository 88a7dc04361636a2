use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nalgebra::{Point2, Rotation2, Vector2};
use robot_localization::aruco::{
    ArucoLocalization, DetectionResult, DetectorConfig, MarkerObservation,
};
use robot_localization::core::{deg2rad, norm_angle_2pi, norm_angle_pi, FrameView, TransferData};

fn marker_quad(center: Point2<f32>, deg: f32) -> Vec<Point2<f32>> {
    let rot = Rotation2::new(deg2rad(deg));
    [
        Vector2::new(-20.0, -20.0),
        Vector2::new(20.0, -20.0),
        Vector2::new(20.0, 20.0),
        Vector2::new(-20.0, 20.0),
    ]
    .iter()
    .map(|v| center + rot * *v)
    .collect()
}

fn bench_angles(c: &mut Criterion) {
    let inputs: Vec<f32> = (-500..500).map(|i| i as f32 * 0.37).collect();
    c.bench_function("norm_angle_2pi+pi x1000", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &a in &inputs {
                acc += norm_angle_2pi(black_box(a), true) + norm_angle_pi(black_box(a), true);
            }
            acc
        })
    });
}

fn bench_estimate(c: &mut Criterion) {
    // 50 markers, target in the middle of the list.
    let det = DetectionResult::from_observations((0..50).map(|id| {
        MarkerObservation::new(
            id,
            marker_quad(Point2::new(10.0 * id as f32, 100.0), id as f32),
        )
    }));
    let mut loc = ArucoLocalization::new(move |_: &FrameView<'_>, _: &DetectorConfig| det.clone());
    let pixels = vec![0u8; 16 * 16];
    let frame = FrameView::gray(16, 16, &pixels).expect("frame");
    loc.detect_markers(&frame);

    let mut tracker = TransferData::new(Vector2::new(0.01, 0.01));
    c.bench_function("estimate_position (50 markers)", |b| {
        b.iter(|| loc.estimate_position(black_box(&mut tracker), black_box(25)))
    });
    c.bench_function("detect_markers + estimate_position", |b| {
        b.iter(|| {
            loc.detect_markers(black_box(&frame));
            loc.estimate_position(&mut tracker, 25)
        })
    });
}

criterion_group!(benches, bench_angles, bench_estimate);
criterion_main!(benches);
