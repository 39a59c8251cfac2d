use navdrawer::nav::ScrollDirectionDetector;

#[test]
fn test_initial_state() {
    let detector = ScrollDirectionDetector::new();
    assert_eq!(detector.previous_offset(), 0);
    assert!(!detector.is_downscrolling());
}

#[test]
fn test_down_then_up() {
    let mut detector = ScrollDirectionDetector::new();

    assert!(detector.sample(50));
    assert!(detector.is_downscrolling());
    assert_eq!(detector.previous_offset(), 50);

    assert!(!detector.sample(30));
    assert!(!detector.is_downscrolling());
    assert_eq!(detector.previous_offset(), 30);
}

#[test]
fn test_same_offset_is_not_downscrolling() {
    let mut detector = ScrollDirectionDetector::new();
    detector.sample(10);
    assert!(!detector.sample(10));
}

#[test]
fn test_every_sample_is_compared_without_threshold() {
    let mut detector = ScrollDirectionDetector::new();
    let signals: Vec<bool> = [1, 2, 1, 5, 4, 4, 9].into_iter().map(|o| detector.sample(o)).collect();
    assert_eq!(signals, vec![true, true, false, true, false, false, true]);
}

#[test]
fn test_reset() {
    let mut detector = ScrollDirectionDetector::new();
    detector.sample(42);
    detector.reset();
    assert_eq!(detector, ScrollDirectionDetector::default());
}
