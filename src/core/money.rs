use rust_decimal::{Decimal, RoundingStrategy};

/// Percentage of `part` relative to `whole`, zero when `whole` is not
/// positive or the quotient overflows
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

/// `minuend - subtrahend`, zero on overflow
pub fn difference(minuend: Decimal, subtrahend: Decimal) -> Decimal {
    minuend.checked_sub(subtrahend).unwrap_or(Decimal::ZERO)
}

/// Mean of a set of amounts, zero for an empty set or when the total overflows
pub fn mean(amounts: &[Decimal]) -> Decimal {
    if amounts.is_empty() {
        return Decimal::ZERO;
    }
    amounts
        .iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(*amount))
        .and_then(|total| total.checked_div(Decimal::from(amounts.len())))
        .unwrap_or(Decimal::ZERO)
}

/// Formats a percentage with one decimal place for display, halves rounded
/// away from zero
pub fn format_percent(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}", rounded)
}
