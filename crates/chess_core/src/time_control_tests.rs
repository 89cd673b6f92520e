use super::*;
use std::thread;

#[test]
fn test_search_limits_depth_only() {
    let limits = SearchLimits::depth(5);
    assert_eq!(limits.max_depth, 5);
    assert!(limits.move_time.is_none());
}

#[test]
fn test_search_limits_with_time() {
    let limits = SearchLimits::depth_and_time(4, Duration::from_millis(100));
    assert_eq!(limits.max_depth, 4);
    assert_eq!(limits.move_time, Some(Duration::from_millis(100)));
}

#[test]
fn test_limits_from_remaining_time() {
    let limits = SearchLimits::from_remaining(Duration::from_secs(100), 0.25, 64);
    assert_eq!(limits.max_depth, 64);
    assert_eq!(limits.move_time, Some(Duration::from_secs(25)));

    let none_left = SearchLimits::from_remaining(Duration::ZERO, 0.022, 64);
    assert_eq!(none_left.move_time, Some(Duration::ZERO));
}

#[test]
fn test_limits_out_of_range_fraction_is_clamped() {
    let remaining = Duration::from_secs(900);
    let all = SearchLimits::from_remaining(remaining, f64::INFINITY, 8);
    assert_eq!(all.move_time, Some(remaining));

    let huge = SearchLimits::from_remaining(Duration::MAX, 1.0, 8);
    assert!(huge.move_time.is_some());

    let negative = SearchLimits::from_remaining(remaining, -0.5, 8);
    assert_eq!(negative.move_time, Some(Duration::ZERO));

    let nan = SearchLimits::from_remaining(remaining, f64::NAN, 8);
    assert_eq!(nan.move_time, Some(Duration::ZERO));
}

#[test]
fn test_time_control_expiry() {
    let tc = TimeControl::start(Some(Duration::from_millis(10)));
    assert!(!tc.is_expired());

    // Wait for time to expire
    thread::sleep(Duration::from_millis(20));
    assert!(tc.is_expired());
    assert!(tc.elapsed() >= Duration::from_millis(10));
}

#[test]
fn test_time_control_no_limit() {
    let tc = TimeControl::start(None);
    thread::sleep(Duration::from_millis(10));
    assert!(!tc.is_expired());
    assert!(tc.elapsed() >= Duration::from_millis(10));
}
