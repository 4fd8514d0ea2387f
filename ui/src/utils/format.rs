//! Display formatting for money, percentages and dates.

use jiff::Timestamp;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const LAKH: f64 = 100_000.0;
const CRORE: f64 = 10_000_000.0;

/// Group digits the Indian way: the last three, then pairs.
fn indian_grouping(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// `₹4,20,000`, rounded to whole rupees.
pub fn rupees(amount: Decimal) -> String {
    let rounded = amount.round();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().trunc().to_string();
    format!("{sign}₹{}", indian_grouping(&digits))
}

/// `₹4.2L`, `₹1.5Cr`; amounts under a lakh are shown in full.
pub fn rupees_compact(amount: Decimal) -> String {
    let value = amount.to_f64().unwrap_or_default();
    let (scaled, suffix) = if value.abs() >= CRORE {
        (value / CRORE, "Cr")
    } else if value.abs() >= LAKH {
        (value / LAKH, "L")
    } else {
        return rupees(amount);
    };
    format!("₹{}{suffix}", trim_decimal(scaled))
}

/// One decimal place, dropping a trailing `.0`.
fn trim_decimal(value: f64) -> String {
    let text = format!("{value:.1}");
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

pub fn percent(value: f64) -> String {
    format!("{}%", trim_decimal(value))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn of(change: f64) -> Self {
        if change > 0.0 {
            Self::Up
        } else if change < 0.0 {
            Self::Down
        } else {
            Self::Flat
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            Self::Up => "text-green-600",
            Self::Down => "text-red-600",
            Self::Flat => "text-neutral-500",
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Flat => "",
        }
    }
}

/// `+12.5%`, `-3.1%`, `0%`
pub fn signed_percent(change: f64) -> String {
    match Trend::of(change) {
        Trend::Up => format!("+{}", percent(change)),
        _ => percent(change),
    }
}

/// `+2`, `-1`, `0`
pub fn signed_count(change: i64) -> String {
    if change > 0 {
        format!("+{change}")
    } else {
        change.to_string()
    }
}

/// `Jan 15, 2025` in the browser's time zone.
pub fn short_date(timestamp: Timestamp) -> String {
    timestamp
        .to_zoned(jiff::tz::TimeZone::system())
        .strftime("%b %-d, %Y")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_in_lakhs_and_crores() {
        assert_eq!(indian_grouping("999"), "999");
        assert_eq!(indian_grouping("1000"), "1,000");
        assert_eq!(indian_grouping("420000"), "4,20,000");
        assert_eq!(indian_grouping("12345678"), "1,23,45,678");
    }

    #[test]
    fn formats_rupees() {
        assert_eq!(rupees(Decimal::from(5000)), "₹5,000");
        assert_eq!(rupees(Decimal::new(749950, 2)), "₹7,500");
        assert_eq!(rupees(Decimal::ZERO), "₹0");
        assert_eq!(rupees(Decimal::from(-1500)), "-₹1,500");
    }

    #[test]
    fn compacts_large_amounts() {
        assert_eq!(rupees_compact(Decimal::from(420_000)), "₹4.2L");
        assert_eq!(rupees_compact(Decimal::from(500_000)), "₹5L");
        assert_eq!(rupees_compact(Decimal::from(15_000_000)), "₹1.5Cr");
        assert_eq!(rupees_compact(Decimal::from(85_000)), "₹85,000");
    }

    #[test]
    fn signs_changes() {
        assert_eq!(signed_percent(12.5), "+12.5%");
        assert_eq!(signed_percent(-3.1), "-3.1%");
        assert_eq!(signed_percent(0.0), "0%");
        assert_eq!(signed_count(2), "+2");
        assert_eq!(signed_count(-1), "-1");
        assert_eq!(signed_count(0), "0");
        assert_eq!(percent(87.0), "87%");
        assert_eq!(Trend::of(-0.5), Trend::Down);
    }
}
