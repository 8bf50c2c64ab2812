use crate::common::*;

#[doc = "Rounds to one decimal place. Deviations are stored at this precision."]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[doc = "Currency formatting with thousands separators: 1234567.8 -> \"$1,234,568\"."]
pub fn format_currency(value: f64) -> String {
    let rounded: i64 = value.round() as i64;

    if rounded < 0 {
        format!("-${}", rounded.unsigned_abs().to_formatted_string(&Locale::en))
    } else {
        format!("${}", (rounded as u64).to_formatted_string(&Locale::en))
    }
}

#[doc = "Signed percentage at one decimal: 12.34 -> \"+12.3%\"."]
pub fn format_signed_percent(value: f64) -> String {
    format!("{:+.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(round_one_decimal(-54.5454), -54.5);
        assert_eq!(round_one_decimal(9.09), 9.1);
        assert_eq!(round_one_decimal(25.0), 25.0);
    }

    #[test]
    fn formats_currency_with_separators() {
        assert_eq!(format_currency(1234567.8), "$1,234,568");
        assert_eq!(format_currency(600.0), "$600");
        assert_eq!(format_currency(-1500.2), "-$1,500");
    }

    #[test]
    fn formats_signed_percent() {
        assert_eq!(format_signed_percent(12.34), "+12.3%");
        assert_eq!(format_signed_percent(-9.1), "-9.1%");
        assert_eq!(format_signed_percent(0.0), "+0.0%");
    }
}
