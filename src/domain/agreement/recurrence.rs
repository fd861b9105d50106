//! Recurrence calculator - pure billing-date arithmetic.
//!
//! Stateless functions mapping (start date, billing cycle) to end dates and
//! next occurrences. No clock reads, no I/O; callers supply every date.
//!
//! # Month-end policy
//!
//! Adding calendar months clamps to the last valid day of the target month
//! (chrono's `Months` semantics): Jan 31 + 1 month is Feb 29 in a leap year
//! and Feb 28 otherwise. This is the single policy for the whole crate and
//! is pinned by tests.

use chrono::{Months, NaiveDate};

use super::BillingCycle;

/// Advances `date` by one billing period.
///
/// Returns `None` for the one-time cycle, which has no period to add, and
/// on arithmetic overflow at the far end of chrono's date range.
pub fn add_cycle(date: NaiveDate, cycle: BillingCycle) -> Option<NaiveDate> {
    let months = cycle.months_per_period()?;
    date.checked_add_months(Months::new(months))
}

/// Returns the first occurrence of the billing recurrence strictly after
/// `reference`, or `None` for one-time agreements.
///
/// Walks forward from `start` one period at a time, matching the behavior
/// of the billing screens this engine replaces: the result is always
/// `start + k * cycle` for the smallest integer `k >= 0` that lands past
/// the reference date.
pub fn next_occurrence_on_or_after(
    start: NaiveDate,
    cycle: BillingCycle,
    reference: NaiveDate,
) -> Option<NaiveDate> {
    if !cycle.is_recurring() {
        return None;
    }
    let mut occurrence = start;
    while occurrence <= reference {
        occurrence = add_cycle(occurrence, cycle)?;
    }
    Some(occurrence)
}

/// Projects the end of the period that begins at `start`.
///
/// One-time agreements are a zero-length period: the projected end is the
/// start date itself.
pub fn projected_end_date(start: NaiveDate, cycle: BillingCycle) -> Option<NaiveDate> {
    match cycle.months_per_period() {
        Some(_) => add_cycle(start, cycle),
        None => Some(start),
    }
}

/// Projects the renewal review date for the period that begins at `start`.
///
/// One-time agreements never renew, so this is `None`; every recurring
/// cycle reviews at the projected period end.
pub fn projected_renewal_date(start: NaiveDate, cycle: BillingCycle) -> Option<NaiveDate> {
    if !cycle.is_recurring() {
        return None;
    }
    projected_end_date(start, cycle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ════════════════════════════════════════════════════════════════════
    // add_cycle
    // ════════════════════════════════════════════════════════════════════

    #[test]
    fn add_cycle_advances_by_one_month() {
        assert_eq!(
            add_cycle(date(2024, 3, 15), BillingCycle::Monthly),
            Some(date(2024, 4, 15))
        );
    }

    #[test]
    fn add_cycle_advances_by_quarter() {
        assert_eq!(
            add_cycle(date(2024, 1, 10), BillingCycle::Quarterly),
            Some(date(2024, 4, 10))
        );
    }

    #[test]
    fn add_cycle_advances_by_half_year() {
        assert_eq!(
            add_cycle(date(2024, 8, 20), BillingCycle::Biannually),
            Some(date(2025, 2, 20))
        );
    }

    #[test]
    fn add_cycle_advances_by_one_year() {
        assert_eq!(
            add_cycle(date(2024, 1, 15), BillingCycle::Annually),
            Some(date(2025, 1, 15))
        );
    }

    #[test]
    fn add_cycle_returns_none_for_one_time() {
        assert_eq!(add_cycle(date(2024, 3, 1), BillingCycle::OneTime), None);
    }

    #[test]
    fn add_cycle_clamps_month_end_in_leap_year() {
        // Jan 31 + 1 month: February has 29 days in 2024.
        assert_eq!(
            add_cycle(date(2024, 1, 31), BillingCycle::Monthly),
            Some(date(2024, 2, 29))
        );
    }

    #[test]
    fn add_cycle_clamps_month_end_in_common_year() {
        assert_eq!(
            add_cycle(date(2023, 1, 31), BillingCycle::Monthly),
            Some(date(2023, 2, 28))
        );
    }

    #[test]
    fn add_cycle_clamps_feb_29_on_annual_advance() {
        assert_eq!(
            add_cycle(date(2024, 2, 29), BillingCycle::Annually),
            Some(date(2025, 2, 28))
        );
    }

    #[test]
    fn add_cycle_quarterly_from_nov_30_lands_on_feb_end() {
        assert_eq!(
            add_cycle(date(2023, 11, 30), BillingCycle::Quarterly),
            Some(date(2024, 2, 29))
        );
    }

    // ════════════════════════════════════════════════════════════════════
    // next_occurrence_on_or_after
    // ════════════════════════════════════════════════════════════════════

    #[test]
    fn next_occurrence_walks_annual_cycle_forward() {
        let next = next_occurrence_on_or_after(
            date(2024, 1, 15),
            BillingCycle::Annually,
            date(2024, 6, 1),
        );
        assert_eq!(next, Some(date(2025, 1, 15)));
    }

    #[test]
    fn next_occurrence_is_strictly_after_reference() {
        // Reference exactly on an occurrence: must return the one after it.
        let next = next_occurrence_on_or_after(
            date(2024, 1, 15),
            BillingCycle::Monthly,
            date(2024, 3, 15),
        );
        assert_eq!(next, Some(date(2024, 4, 15)));
    }

    #[test]
    fn next_occurrence_with_future_start_returns_first_period_end_or_start() {
        // Start after the reference: the start itself has not occurred yet,
        // but k = 0 only qualifies once it is strictly past the reference.
        let next = next_occurrence_on_or_after(
            date(2025, 3, 1),
            BillingCycle::Monthly,
            date(2024, 6, 1),
        );
        assert_eq!(next, Some(date(2025, 3, 1)));
    }

    #[test]
    fn next_occurrence_walks_many_elapsed_periods() {
        // Ten years of monthly periods elapsed.
        let next = next_occurrence_on_or_after(
            date(2014, 5, 10),
            BillingCycle::Monthly,
            date(2024, 5, 10),
        );
        assert_eq!(next, Some(date(2024, 6, 10)));
    }

    #[test]
    fn next_occurrence_returns_none_for_one_time() {
        let next = next_occurrence_on_or_after(
            date(2024, 3, 1),
            BillingCycle::OneTime,
            date(2024, 6, 1),
        );
        assert_eq!(next, None);
    }

    #[test]
    fn next_occurrence_is_monotonic_in_reference() {
        let start = date(2024, 1, 15);
        let n1 =
            next_occurrence_on_or_after(start, BillingCycle::Quarterly, date(2024, 2, 1)).unwrap();
        let n2 =
            next_occurrence_on_or_after(start, BillingCycle::Quarterly, date(2024, 8, 1)).unwrap();
        assert!(n2 >= n1);
    }

    // ════════════════════════════════════════════════════════════════════
    // Projections
    // ════════════════════════════════════════════════════════════════════

    #[test]
    fn projected_end_date_equals_add_cycle_for_recurring() {
        for cycle in [
            BillingCycle::Monthly,
            BillingCycle::Quarterly,
            BillingCycle::Biannually,
            BillingCycle::Annually,
        ] {
            let start = date(2024, 7, 14);
            assert_eq!(projected_end_date(start, cycle), add_cycle(start, cycle));
        }
    }

    #[test]
    fn projected_end_date_is_start_for_one_time() {
        let start = date(2024, 3, 1);
        assert_eq!(
            projected_end_date(start, BillingCycle::OneTime),
            Some(start)
        );
    }

    #[test]
    fn projected_renewal_date_equals_projected_end_for_recurring() {
        let start = date(2024, 7, 14);
        assert_eq!(
            projected_renewal_date(start, BillingCycle::Annually),
            projected_end_date(start, BillingCycle::Annually)
        );
    }

    #[test]
    fn projected_renewal_date_is_none_for_one_time() {
        assert_eq!(
            projected_renewal_date(date(2024, 3, 1), BillingCycle::OneTime),
            None
        );
    }
}
