use tilemaze::constants::FPS_WINDOW;
use tilemaze::timing::{frames_per_second, FrameStats};

#[test]
fn test_frames_per_second() {
    assert_eq!(frames_per_second(0.5), 2);
    assert_eq!(frames_per_second(1.0 / 30.0), 30);
    assert_eq!(frames_per_second(f32::NAN), 0);
}

#[test]
fn test_empty_stats() {
    let stats = FrameStats::default();
    assert_eq!(stats.frames(), 0);
    assert_eq!(stats.current_fps(), 0);
    assert_eq!(stats.average_fps(), 0.0);
    assert!(!stats.window_complete());
}

#[test]
fn test_invalid_samples_are_ignored() {
    let mut stats = FrameStats::new();
    stats.record(0.0);
    stats.record(-0.016);
    stats.record(f32::INFINITY);
    assert_eq!(stats.frames(), 0);
}

#[test]
fn test_average_over_window() {
    let mut stats = FrameStats::new();
    for _ in 0..FPS_WINDOW {
        stats.record(0.05);
    }
    assert!(stats.window_complete());
    assert_eq!(stats.current_fps(), 20);

    // A full window of faster frames pushes the slow ones out entirely.
    for _ in 0..FPS_WINDOW {
        stats.record(0.02);
    }
    assert!((stats.average_fps() - 50.0).abs() < 0.01);
    assert_eq!(stats.frames(), 2 * FPS_WINDOW as u64);
}

#[test]
fn test_window_completion_is_periodic() {
    let mut stats = FrameStats::new();
    for _ in 0..FPS_WINDOW + 1 {
        stats.record(0.016);
    }
    assert!(!stats.window_complete());
}
