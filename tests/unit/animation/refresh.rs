use super::*;

#[test]
fn rejects_non_positive_rates() {
    assert!(FixedRefresh::new(0.0).is_err());
    assert!(FixedRefresh::new(-60.0).is_err());
    assert!(FixedRefresh::new(f64::INFINITY).is_err());
}

#[test]
fn rejects_rates_too_slow_for_a_duration() {
    assert!(FixedRefresh::new(1e-300).is_err());
    assert!(refresh_interval(f64::MIN_POSITIVE).is_err());
    assert!(refresh_interval(1e-3).is_ok());
}

#[test]
fn interval_matches_rate() {
    let d = FixedRefresh::new(50.0).unwrap();
    assert!((d.interval().as_secs_f64() - 0.02).abs() < 1e-6);
}

#[test]
fn fixed_refresh_paces_ticks() {
    let mut d = FixedRefresh::new(200.0).unwrap();
    let start = Instant::now();
    for _ in 0..4 {
        d.wait_for_refresh();
    }
    // First tick is immediate, the next three wait one interval each.
    assert!(start.elapsed() >= Duration::from_millis(14));
}

#[test]
fn unpaced_never_blocks() {
    let mut d = Unpaced;
    let start = Instant::now();
    for _ in 0..1000 {
        d.wait_for_refresh();
    }
    assert!(start.elapsed() < Duration::from_secs(1));
}
