use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

const CURRENCY_FRACTION_DIGITS: u32 = 3;

/// Formats a value as `$` followed by a comma-grouped number with at most
/// three fraction digits (`1234.5` → `$1,234.5`).
///
/// The sign follows the symbol (`$-1,234`).
#[must_use]
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return "$NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "$∞" } else { "$-∞" }.to_owned();
    }

    let magnitude = plain_decimal_text(value.abs());
    let (integer, fraction) = match magnitude.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (magnitude.as_str(), None),
    };

    let mut out = String::with_capacity(magnitude.len() + 4);
    out.push('$');
    if value < 0.0 && magnitude != "0" {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Formats a value with exactly one decimal place followed by `%`.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}

/// Tooltip label for one donut segment: `"BTC: $1200 (40%)"`.
///
/// The share is rounded to a whole percent; a zero or non-finite total
/// reports `0%`.
#[must_use]
pub fn format_segment_label(label: &str, value: f64, total: f64) -> String {
    let share = if total != 0.0 && total.is_finite() {
        (value / total * 100.0).round()
    } else {
        0.0
    };
    let amount = value.round();
    let amount = if amount == 0.0 { 0.0 } else { amount };
    let share = if share == 0.0 { 0.0 } else { share };
    if label.is_empty() {
        format!("${amount} ({share}%)")
    } else {
        format!("{label}: ${amount} ({share}%)")
    }
}

fn plain_decimal_text(magnitude: f64) -> String {
    match Decimal::from_f64(magnitude) {
        Some(decimal) => decimal
            .round_dp_with_strategy(
                CURRENCY_FRACTION_DIGITS,
                RoundingStrategy::MidpointAwayFromZero,
            )
            .normalize()
            .to_string(),
        None => {
            let text = format!("{magnitude:.3}");
            text.trim_end_matches('0').trim_end_matches('.').to_owned()
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
