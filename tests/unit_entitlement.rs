use chrono::NaiveDate;
use coursedeck::modules::enrollments::entitlement::{effective_expiry, is_accessible};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2026, 6, 15)
}

#[test]
fn test_effective_expiry_earlier_date_wins() {
    let enrollment = Some(date(2026, 12, 31));
    let course = Some(date(2026, 9, 1));

    assert_eq!(effective_expiry(enrollment, course), Some(date(2026, 9, 1)));
    assert_eq!(effective_expiry(course, enrollment), Some(date(2026, 9, 1)));
}

#[test]
fn test_effective_expiry_single_date_governs() {
    assert_eq!(
        effective_expiry(Some(date(2026, 9, 1)), None),
        Some(date(2026, 9, 1))
    );
    assert_eq!(
        effective_expiry(None, Some(date(2026, 9, 1))),
        Some(date(2026, 9, 1))
    );
    assert_eq!(effective_expiry(None, None), None);
}

#[test]
fn test_lifetime_course_always_accessible() {
    // Every date in the past, still accessible
    assert!(is_accessible(
        true,
        true,
        Some(date(2020, 1, 1)),
        Some(date(2020, 1, 1)),
        today()
    ));
}

#[test]
fn test_one_time_purchase_never_expires() {
    assert!(is_accessible(
        false,
        false,
        Some(date(2020, 1, 1)),
        Some(date(2020, 1, 1)),
        today()
    ));
}

#[test]
fn test_subscription_active_until_expiry() {
    assert!(is_accessible(
        true,
        false,
        Some(date(2026, 7, 1)),
        None,
        today()
    ));
}

#[test]
fn test_subscription_accessible_on_expiry_day_itself() {
    assert!(is_accessible(true, false, Some(today()), None, today()));
}

#[test]
fn test_subscription_expired_yesterday() {
    assert!(!is_accessible(
        true,
        false,
        Some(date(2026, 6, 14)),
        None,
        today()
    ));
}

#[test]
fn test_course_window_is_a_hard_ceiling() {
    // The per-user date reaches further, but the course window has closed
    assert!(!is_accessible(
        true,
        false,
        Some(date(2026, 12, 31)),
        Some(date(2026, 6, 1)),
        today()
    ));
}

#[test]
fn test_course_window_governs_when_enrollment_has_no_expiry() {
    assert!(is_accessible(
        true,
        false,
        None,
        Some(date(2026, 7, 1)),
        today()
    ));
    assert!(!is_accessible(
        true,
        false,
        None,
        Some(date(2026, 6, 1)),
        today()
    ));
}

#[test]
fn test_unbounded_subscription_stays_accessible() {
    assert!(is_accessible(true, false, None, None, today()));
}
