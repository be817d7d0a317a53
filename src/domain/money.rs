use thiserror::Error;

/// Money is represented as integer cents to avoid floating-point precision
/// issues. $50.00 = 5000 cents.
pub type Cents = i64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("invalid rate: {0:?}")]
    InvalidRate(String),
}

/// Format cents as a plain two-decimal string.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Format cents the way the account log and balance display render money.
/// Example: 5000 -> "$50.00", -1234 -> "-$12.34"
pub fn format_dollars(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}

/// Parse user-entered decimal text into cents.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "100" -> 10000
///
/// More than two fractional digits are truncated, not rounded.
pub fn parse_cents(input: &str) -> Result<Cents, ParseAmountError> {
    let invalid = || ParseAmountError::InvalidAmount(input.to_string());

    let trimmed = input.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (units_str, frac_str) = match unsigned.split_once('.') {
        Some((units, frac)) => (units, frac),
        None => (unsigned, ""),
    };
    if units_str.is_empty() && frac_str.is_empty() {
        return Err(invalid());
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str.parse().map_err(|_| invalid())?
    };

    if !frac_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    // Keep at most two fractional digits; a single digit means tens of cents.
    let frac_str = &frac_str[..frac_str.len().min(2)];
    let frac: i64 = match frac_str.len() {
        0 => 0,
        1 => frac_str.parse::<i64>().map_err(|_| invalid())? * 10,
        _ => frac_str.parse().map_err(|_| invalid())?,
    };

    let cents = units * 100 + frac;
    Ok(if negative { -cents } else { cents })
}

/// Parse an interest rate in percent. Negative rates are allowed,
/// non-finite values are not.
pub fn parse_rate(input: &str) -> Result<f64, ParseAmountError> {
    let rate: f64 = input
        .trim()
        .parse()
        .map_err(|_| ParseAmountError::InvalidRate(input.to_string()))?;
    if rate.is_finite() {
        Ok(rate)
    } else {
        Err(ParseAmountError::InvalidRate(input.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(5000), "50.00");
        assert_eq!(format_cents(1234), "12.34");
        assert_eq!(format_cents(1), "0.01");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(-5000), "-50.00");
    }

    #[test]
    fn test_format_dollars() {
        assert_eq!(format_dollars(100000), "$1000.00");
        assert_eq!(format_dollars(50), "$0.50");
        assert_eq!(format_dollars(-1234), "-$12.34");
    }

    #[test]
    fn test_parse_cents() {
        assert_eq!(parse_cents("50.00"), Ok(5000));
        assert_eq!(parse_cents("50"), Ok(5000));
        assert_eq!(parse_cents("12.5"), Ok(1250));
        assert_eq!(parse_cents("0.01"), Ok(1));
        assert_eq!(parse_cents(".50"), Ok(50));
        assert_eq!(parse_cents(" 100 "), Ok(10000));
        assert_eq!(parse_cents("-50.00"), Ok(-5000));
        assert_eq!(parse_cents("100.999"), Ok(10099)); // Truncates
    }

    #[test]
    fn test_parse_cents_invalid() {
        assert!(parse_cents("abc").is_err());
        assert!(parse_cents("").is_err());
        assert!(parse_cents(".").is_err());
        assert!(parse_cents("12.34.56").is_err());
        assert!(parse_cents("12,34").is_err());
    }

    #[test]
    fn test_parse_rate() {
        assert_eq!(parse_rate("10"), Ok(10.0));
        assert_eq!(parse_rate("2.5"), Ok(2.5));
        assert_eq!(parse_rate("-1.5"), Ok(-1.5));
        assert!(parse_rate("ten").is_err());
        assert!(parse_rate("inf").is_err());
        assert!(parse_rate("NaN").is_err());
    }
}
