use std::time::Duration;

use recboard_server::middleware::audit::elapsed_millis;

#[test]
fn elapsed_millis_truncates_to_whole_milliseconds() {
    assert_eq!(elapsed_millis(Duration::ZERO), 0);
    assert_eq!(elapsed_millis(Duration::from_micros(2_999)), 2);
    assert_eq!(elapsed_millis(Duration::from_secs(90)), 90_000);
}

#[test]
fn elapsed_millis_saturates_instead_of_wrapping() {
    assert_eq!(elapsed_millis(Duration::MAX), u64::MAX);
}
