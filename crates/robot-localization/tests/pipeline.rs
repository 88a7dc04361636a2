use approx::assert_abs_diff_eq;
use nalgebra::{Point2, Rotation2, Vector2};
use robot_localization::aruco::{
    DetectionResult, DetectorConfig, LocalizeError, MarkerObservation, PredefinedDictionary,
};
use robot_localization::core::{deg2rad, rad2deg, FrameView};
use robot_localization::{FrameOutcome, LocalizationConfig, LocalizationPipeline, Status};

fn marker_quad(center: Point2<f32>, side: f32, deg: f32) -> Vec<Point2<f32>> {
    let rot = Rotation2::new(deg2rad(deg));
    let h = 0.5 * side;
    [
        Vector2::new(-h, -h),
        Vector2::new(h, -h),
        Vector2::new(h, h),
        Vector2::new(-h, h),
    ]
    .iter()
    .map(|v| center + rot * *v)
    .collect()
}

fn single(id: i32, center: Point2<f32>, deg: f32) -> DetectionResult {
    DetectionResult::from_observations([MarkerObservation::new(
        id,
        marker_quad(center, 60.0, deg),
    )])
}

fn scripted(
    frames: Vec<DetectionResult>,
) -> impl FnMut(&FrameView<'_>, &DetectorConfig) -> DetectionResult {
    let mut frames = frames.into_iter();
    move |_: &FrameView<'_>, _: &DetectorConfig| frames.next().unwrap_or_default()
}

fn config() -> LocalizationConfig {
    let mut cfg = LocalizationConfig::new([0.005, 0.005]);
    cfg.frame_width = 32;
    cfg.frame_height = 24;
    cfg.marker_id = 5;
    cfg
}

#[test]
fn pose_freezes_while_marker_is_lost() {
    let cfg = config();
    let frames = vec![
        single(5, Point2::new(100.0, 100.0), 0.0),
        single(5, Point2::new(160.0, 100.0), 20.0),
        DetectionResult::default(),
        single(8, Point2::new(10.0, 10.0), 0.0),
        single(5, Point2::new(160.0, 100.0), 20.0),
    ];
    let mut pipeline = LocalizationPipeline::from_config(&cfg, scripted(frames));
    let pixels = vec![0u8; cfg.frame_width * cfg.frame_height];
    let frame = FrameView::gray(cfg.frame_width, cfg.frame_height, &pixels).expect("frame");

    assert!(pipeline.process_frame(Some(&frame)).is_updated());
    assert_eq!(
        pipeline.process_frame(Some(&frame)),
        FrameOutcome::Updated { index: 0 }
    );
    assert_abs_diff_eq!(rad2deg(pipeline.tracker().delta_heading()), 20.0, epsilon = 1e-3);
    let seen = *pipeline.tracker();

    let lost = pipeline.process_frame(Some(&frame));
    assert_eq!(lost, FrameOutcome::Held(LocalizeError::NoMarkerDetected));
    assert_eq!(lost.status(), Status::MarkerNotDetected);
    let t = pipeline.tracker();
    assert_eq!(t.current_position(), seen.current_position());
    assert_eq!(t.previous_position(), seen.current_position());
    assert_eq!(t.current_heading(), seen.current_heading());
    assert_eq!(t.delta_position(), Vector2::zeros());
    assert_eq!(t.delta_heading(), 0.0);

    let other = pipeline.process_frame(Some(&frame));
    assert_eq!(
        other,
        FrameOutcome::Held(LocalizeError::TargetMarkerAbsent { id: 5 })
    );
    assert_eq!(other.status(), Status::NotMarkerIndex);

    // Marker reappears where it was lost: no motion.
    assert!(pipeline.process_frame(Some(&frame)).is_updated());
    assert_abs_diff_eq!(pipeline.tracker().delta_heading(), 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(
        pipeline.tracker().delta_position(),
        Vector2::zeros(),
        epsilon = 1e-5
    );

    assert_eq!(pipeline.process_frame(None), FrameOutcome::EndOfVideo);
    assert_eq!(FrameOutcome::EndOfVideo.status(), Status::EndOfVideoFile);
    assert_eq!(pipeline.frames_processed(), 5);
}

#[test]
fn malformed_quad_fails_without_freezing() {
    let cfg = config();
    let mut broken = marker_quad(Point2::new(80.0, 80.0), 60.0, 0.0);
    broken.truncate(2);
    let frames = vec![
        single(5, Point2::new(100.0, 100.0), 0.0),
        single(5, Point2::new(140.0, 100.0), 0.0),
        DetectionResult::from_observations([MarkerObservation::new(5, broken)]),
    ];
    let mut pipeline = LocalizationPipeline::from_config(&cfg, scripted(frames));
    let pixels = vec![0u8; cfg.frame_width * cfg.frame_height];
    let frame = FrameView::gray(cfg.frame_width, cfg.frame_height, &pixels).expect("frame");

    pipeline.process_frame(Some(&frame));
    pipeline.process_frame(Some(&frame));
    let before = *pipeline.tracker();

    let outcome = pipeline.process_frame(Some(&frame));
    assert!(matches!(
        outcome,
        FrameOutcome::Failed(LocalizeError::Geometry(_))
    ));
    assert_eq!(outcome.status(), Status::MarkerNotDetected);
    assert_eq!(*pipeline.tracker(), before);
}

#[test]
fn controller_is_configured_from_config() {
    let mut cfg = config();
    cfg.dictionary = PredefinedDictionary::AprilTag36h11;
    let pipeline = LocalizationPipeline::from_config(&cfg, scripted(Vec::new()));

    let loc = pipeline.localization();
    assert_eq!(loc.dictionary(), PredefinedDictionary::AprilTag36h11);
    assert_eq!(
        loc.frame_size().map(|s| (s.width, s.height)),
        Some((32, 24))
    );
    assert_eq!(pipeline.marker_id(), 5);
    assert_eq!(
        pipeline.tracker().pixel_resolution(),
        Vector2::new(0.005, 0.005)
    );
}
