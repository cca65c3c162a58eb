//! Expiry policy for purchased courses.
//!
//! Two dates can bound a subscription: the per-user `expiry_date` on the
//! enrollment and the course-wide `valid_until` window. The most
//! restrictive one governs: when both are set, the earlier date wins.
//! A lifetime course ignores dates entirely, and a one-time purchase
//! without the subscription flag never expires.

use chrono::NaiveDate;

/// The date after which access lapses, or `None` when nothing bounds it.
pub fn effective_expiry(
    enrollment_expiry: Option<NaiveDate>,
    course_valid_until: Option<NaiveDate>,
) -> Option<NaiveDate> {
    match (enrollment_expiry, course_valid_until) {
        (Some(enrollment), Some(course)) => Some(enrollment.min(course)),
        (Some(enrollment), None) => Some(enrollment),
        (None, Some(course)) => Some(course),
        (None, None) => None,
    }
}

/// Whether an enrolled course is accessible on `today`. Access holds
/// through the expiry date itself (`today <= expiry`).
pub fn is_accessible(
    is_subscription: bool,
    is_lifetime: bool,
    enrollment_expiry: Option<NaiveDate>,
    course_valid_until: Option<NaiveDate>,
    today: NaiveDate,
) -> bool {
    if is_lifetime || !is_subscription {
        return true;
    }

    match effective_expiry(enrollment_expiry, course_valid_until) {
        Some(expiry) => today <= expiry,
        None => true,
    }
}
