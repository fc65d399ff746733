use chrono::{DateTime, NaiveDate, Utc};

/// "$1,234.56" style money rendering, negative amounts as "-$12.00".
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}${}.{frac}", group_thousands(whole))
}

/// Thousands-grouped integer rendering for counters.
pub fn format_count(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(&value.abs().to_string()))
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Signed change figure for the overview cards.
pub fn format_change(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.1}%")
    } else {
        format!("{value:.1}%")
    }
}

pub fn format_date_time(at: DateTime<Utc>) -> String {
    at.format("%b %d, %Y %H:%M").to_string()
}

pub fn format_date(at: DateTime<Utc>) -> String {
    at.format("%b %d, %Y").to_string()
}

/// Parses the value of an `<input type="date">`, empty or malformed text
/// meaning "no bound".
pub fn parse_input_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn currency_groups_thousands_and_keeps_cents() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(-42.125), "-$42.13");
    }

    #[test]
    fn counts_group_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(15_420), "15,420");
        assert_eq!(format_count(-1_234), "-1,234");
    }

    #[test]
    fn change_carries_an_explicit_sign() {
        assert_eq!(format_change(12.5), "+12.5%");
        assert_eq!(format_change(-2.1), "-2.1%");
    }

    #[test]
    fn date_inputs_parse_or_mean_unbounded() {
        assert_eq!(
            parse_input_date("2024-01-20"),
            chrono::NaiveDate::from_ymd_opt(2024, 1, 20)
        );
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("20/01/2024"), None);
    }

    #[test]
    fn timestamps_render_in_display_format() {
        let at = Utc.with_ymd_and_hms(2024, 1, 20, 10, 30, 0).single().expect("valid instant");
        assert_eq!(format_date_time(at), "Jan 20, 2024 10:30");
        assert_eq!(format_date(at), "Jan 20, 2024");
    }
}
