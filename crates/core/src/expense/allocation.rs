//! Remainder-reconciled share allocation (Largest Remainder Method).
//!
//! Exact shares are rounded toward zero at the target precision, then the
//! units lost to rounding are handed back one at a time to the shares with the
//! largest fractional remainder. Ties go to the earlier participant, so an equal
//! split gives its extra cents to the first participants in list order.
//!
//! Every step is checked; an allocation that would leave the `Decimal` range
//! yields `None`.

use rust_decimal::prelude::*;

/// Splits `total` into `count` equal shares whose sum is exactly `total`
/// rounded to `decimal_places`.
#[must_use]
pub fn allocate_equal(total: Decimal, count: usize, decimal_places: u32) -> Option<Vec<Decimal>> {
    if count == 0 {
        return Some(Vec::new());
    }
    let total = round_total(total, decimal_places);
    let exact = total / Decimal::from(count);
    reconcile(total, vec![exact; count], decimal_places)
}

/// Splits `total` by `percentages` (expected to sum to 100) so that the shares
/// sum exactly to `total` rounded to `decimal_places`.
#[must_use]
pub fn allocate_by_percentages(
    total: Decimal,
    percentages: &[Decimal],
    decimal_places: u32,
) -> Option<Vec<Decimal>> {
    let total = round_total(total, decimal_places);
    let exact = percentages
        .iter()
        .map(|pct| percent_of(total, *pct))
        .collect::<Option<Vec<_>>>()?;
    reconcile(total, exact, decimal_places)
}

/// `total * pct / 100`, or `None` on overflow.
pub(crate) fn percent_of(total: Decimal, pct: Decimal) -> Option<Decimal> {
    total.checked_mul(pct)?.checked_div(Decimal::ONE_HUNDRED)
}

fn round_total(total: Decimal, decimal_places: u32) -> Decimal {
    total.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}

fn reconcile(total: Decimal, exact: Vec<Decimal>, decimal_places: u32) -> Option<Vec<Decimal>> {
    if exact.is_empty() {
        return Some(exact);
    }
    let unit = Decimal::new(1, decimal_places);
    let mut shares: Vec<Decimal> = exact
        .iter()
        .map(|share| share.round_dp_with_strategy(decimal_places, RoundingStrategy::ToZero))
        .collect();

    let allocated = shares
        .iter()
        .try_fold(Decimal::ZERO, |sum, share| sum.checked_add(*share))?;
    let leftover = total.checked_sub(allocated)?;
    let units = leftover
        .checked_div(unit)?
        .trunc()
        .to_usize()
        .unwrap_or(0)
        .min(shares.len());
    if units == 0 {
        return Some(shares);
    }

    let mut order: Vec<usize> = (0..shares.len()).collect();
    // Stable: equal remainders keep list order.
    order.sort_by(|&a, &b| (exact[b] - shares[b]).cmp(&(exact[a] - shares[a])));
    for idx in order.into_iter().take(units) {
        shares[idx] = shares[idx].checked_add(unit)?;
    }
    Some(shares)
}
