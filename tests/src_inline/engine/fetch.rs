use super::*;

const DEBOUNCE: Duration = Duration::from_millis(500);

#[test]
fn test_poll_waits_for_debounce() {
    let t0 = Instant::now();
    let mut tracker = RequestTracker::new(DEBOUNCE);
    assert!(tracker.poll(t0).is_none());

    tracker.mark_changed(t0);
    assert!(tracker.is_pending());
    assert!(tracker.poll(t0 + Duration::from_millis(499)).is_none());
    let token = tracker.poll(t0 + DEBOUNCE).unwrap();
    assert_eq!(token.generation(), 1);
    assert!(!tracker.is_pending());
    assert!(tracker.is_outstanding());
    assert!(tracker.poll(t0 + DEBOUNCE * 2).is_none());
}

#[test]
fn test_rapid_changes_coalesce() {
    let t0 = Instant::now();
    let mut tracker = RequestTracker::new(DEBOUNCE);
    tracker.mark_changed(t0);
    tracker.mark_changed(t0 + Duration::from_millis(300));
    assert!(tracker.poll(t0 + DEBOUNCE).is_none());
    let token = tracker.poll(t0 + Duration::from_millis(800)).unwrap();
    assert_eq!(token.generation(), 1);
}

#[test]
fn test_superseded_response_rejected() {
    let t0 = Instant::now();
    let mut tracker = RequestTracker::new(DEBOUNCE);
    tracker.mark_changed(t0);
    let first = tracker.poll(t0 + DEBOUNCE).unwrap();
    tracker.mark_changed(t0 + DEBOUNCE);
    let second = tracker.poll(t0 + DEBOUNCE * 2).unwrap();

    assert!(!tracker.accept(first));
    assert!(tracker.is_outstanding());
    assert!(tracker.accept(second));
    assert!(!tracker.is_outstanding());
    assert!(!tracker.accept(second));
}
