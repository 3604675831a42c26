//! Shared helpers for estimate calculations: blank detection, percent
//! rounding, and JPY formatting.

/// True when a text field is empty or whitespace-only. Blank fields
/// never price a line and never count toward validation.
///
/// # Examples
///
/// ```
/// use booking_core::calculations::common::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank("   "));
/// assert!(!is_blank(" 田中 "));
/// ```
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Computes `amount × percent / 100` rounded half away from zero.
///
/// Used for the percent coupon, which is always computed on the
/// subtotal, never on a post-surcharge figure.
///
/// # Examples
///
/// ```
/// use booking_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(18000, 10), 1800);
/// assert_eq!(percent_of(999, 5), 50);   // 49.95 rounds up
/// assert_eq!(percent_of(990, 5), 50);   // 49.5 rounds up at midpoint
/// assert_eq!(percent_of(-1000, 5), -50); // away from zero
/// ```
pub fn percent_of(
    amount: i64,
    percent: i64,
) -> i64 {
    let scaled = amount * percent;
    let half = if scaled >= 0 { 50 } else { -50 };
    (scaled + half) / 100
}

/// Formats an amount as zero-decimal JPY with a full-width yen sign and
/// comma thousands grouping, e.g. `￥13,000` or `-￥1,800`.
///
/// # Examples
///
/// ```
/// use booking_core::format_jpy;
///
/// assert_eq!(format_jpy(0), "￥0");
/// assert_eq!(format_jpy(13000), "￥13,000");
/// assert_eq!(format_jpy(-1800), "-￥1,800");
/// ```
pub fn format_jpy(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-￥{grouped}")
    } else {
        format!("￥{grouped}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // is_blank tests
    // =========================================================================

    #[test]
    fn is_blank_empty_and_whitespace() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n "));
    }

    #[test]
    fn is_blank_false_for_content() {
        assert!(!is_blank("a"));
        assert!(!is_blank("  田中  "));
    }

    // =========================================================================
    // percent_of tests
    // =========================================================================

    #[test]
    fn percent_of_exact() {
        assert_eq!(percent_of(18000, 10), 1800);
        assert_eq!(percent_of(10000, 50), 5000);
    }

    #[test]
    fn percent_of_rounds_half_up() {
        // 990 * 5% = 49.5
        assert_eq!(percent_of(990, 5), 50);
    }

    #[test]
    fn percent_of_rounds_down_below_midpoint() {
        // 988 * 5% = 49.4
        assert_eq!(percent_of(988, 5), 49);
    }

    #[test]
    fn percent_of_negative_rounds_away_from_zero() {
        // -990 * 5% = -49.5
        assert_eq!(percent_of(-990, 5), -50);
    }

    #[test]
    fn percent_of_zero_amount() {
        assert_eq!(percent_of(0, 99), 0);
    }

    // =========================================================================
    // format_jpy tests
    // =========================================================================

    #[test]
    fn format_jpy_small_amount_has_no_separator() {
        assert_eq!(format_jpy(220), "￥220");
    }

    #[test]
    fn format_jpy_groups_thousands() {
        assert_eq!(format_jpy(13000), "￥13,000");
        assert_eq!(format_jpy(1234567), "￥1,234,567");
    }

    #[test]
    fn format_jpy_negative_amount() {
        assert_eq!(format_jpy(-500), "-￥500");
        assert_eq!(format_jpy(-1800), "-￥1,800");
    }

    #[test]
    fn format_jpy_zero() {
        assert_eq!(format_jpy(0), "￥0");
    }
}
