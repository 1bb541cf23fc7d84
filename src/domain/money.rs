use thiserror::Error;

/// Money is kept as integer cents so that sums never drift.
/// 1 unit = 100 cents, so 50.00 = 5000 cents.
pub type Cents = i64;

/// Largest amount a single record may carry (100,000,000,000.00).
/// Ledger-wide sums stay inside `i64` for close to a million such records.
pub const MAX_CENTS: Cents = 10_000_000_000_000;

/// Format cents as a plain decimal string.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.abs();
    format!("{}{}.{:02}", sign, abs_cents / 100, abs_cents % 100)
}

/// Format cents with a currency symbol in front, e.g. "Rs 12.50".
pub fn format_money(cents: Cents, symbol: &str) -> String {
    if symbol.is_empty() {
        format_cents(cents)
    } else {
        format!("{} {}", symbol, format_cents(cents))
    }
}

/// Parse a decimal string into cents.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "100" -> 10000
///
/// Thousands separators (`1,250.00`) are accepted since exported
/// spreadsheets frequently carry them.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let cleaned: String = input.trim().chars().filter(|c| *c != ',').collect();
    let (negative, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };

    if digits.is_empty() {
        return Err(ParseCentsError::Empty);
    }

    let (units_str, decimal_str) = match digits.split_once('.') {
        Some((units, decimals)) => {
            if decimals.contains('.') {
                return Err(ParseCentsError::InvalidFormat(input.to_string()));
            }
            (units, decimals)
        }
        None => (digits, ""),
    };

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        parse_digits(units_str, input)?
    };

    // Pad or truncate the fractional part to two digits
    let decimal_cents: i64 = match decimal_str.len() {
        0 => 0,
        1 => parse_digits(decimal_str, input)? * 10,
        _ => parse_digits(&decimal_str[..2], input)?,
    };

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(decimal_cents))
        .ok_or_else(|| ParseCentsError::InvalidFormat(input.to_string()))?;
    Ok(if negative { -cents } else { cents })
}

fn parse_digits(digits: &str, original: &str) -> Result<i64, ParseCentsError> {
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseCentsError::InvalidFormat(original.to_string()));
    }
    digits
        .parse()
        .map_err(|_| ParseCentsError::InvalidFormat(original.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCentsError {
    #[error("empty money value")]
    Empty,

    #[error("invalid money format: '{0}'")]
    InvalidFormat(String),
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
        assert_eq!(format_cents(-1), "-0.01");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(125050, "Rs"), "Rs 1250.50");
        assert_eq!(format_money(125050, ""), "1250.50");
    }

    #[test]
    fn test_parse_cents() {
        assert_eq!(parse_cents("50.00"), Ok(5000));
        assert_eq!(parse_cents("50"), Ok(5000));
        assert_eq!(parse_cents("12.5"), Ok(1250));
        assert_eq!(parse_cents(".50"), Ok(50));
        assert_eq!(parse_cents("-50.00"), Ok(-5000));
        assert_eq!(parse_cents("100.999"), Ok(10099)); // truncates
        assert_eq!(parse_cents("1,250.00"), Ok(125000));
        assert_eq!(parse_cents(" 7 "), Ok(700));
    }

    #[test]
    fn test_parse_cents_invalid() {
        assert_eq!(parse_cents(""), Err(ParseCentsError::Empty));
        assert!(parse_cents("abc").is_err());
        assert!(parse_cents("12.34.56").is_err());
        assert!(parse_cents("1e5").is_err());
        assert!(parse_cents("+5").is_err());
        assert!(parse_cents("--5").is_err());
        assert!(parse_cents("-").is_err());
        assert!(parse_cents("5-").is_err());
    }
}
