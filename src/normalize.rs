// Amount Normalizer - currency text to f64

/// Convert a raw currency-like string into a numeric amount.
///
/// Strips every occurrence of `strip` (the currency symbol), every comma
/// (thousands separator) and every whitespace code point, then parses the
/// longest valid numeric prefix of what remains. Unparseable input yields
/// 0.0 rather than an error: dirty rows must never abort a load, so this
/// function has no failure mode. A leading `-` is not stripped, which keeps
/// negative amounts intact.
///
/// # Examples
/// ```
/// use bid_ledger::normalize_amount;
/// assert_eq!(normalize_amount("$1,234.56", '$'), 1234.56);
/// assert_eq!(normalize_amount("-$5.00", '$'), -5.0);
/// assert_eq!(normalize_amount("abc", '$'), 0.0);
/// ```
pub fn normalize_amount(raw: &str, strip: char) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|&c| c != strip && c != ',' && !c.is_whitespace())
        .collect();

    parse_numeric_prefix(&cleaned)
}

/// Parse the longest leading numeric literal of `s`, or 0.0 if none.
///
/// Prefix grammar: optional sign, digits, optional `.` + digits, optional
/// exponent. Trailing garbage after a valid prefix is ignored ("12abc"
/// parses as 12.0), matching C `atof` behavior.
fn parse_numeric_prefix(s: &str) -> f64 {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.get(end), Some(&b'+') | Some(&b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
        end += 1;
    }
    let int_digits = end - int_start;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        let mut after_dot = end + 1;
        while bytes.get(after_dot).is_some_and(|b| b.is_ascii_digit()) {
            after_dot += 1;
        }
        frac_digits = after_dot - end - 1;
        // the dot only belongs to the prefix if digits surround it
        if int_digits > 0 || frac_digits > 0 {
            end = after_dot;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    // optional exponent; only consumed when at least one exponent digit follows
    if matches!(bytes.get(end), Some(&b'e') | Some(&b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(&b'+') | Some(&b'-')) {
            exp_end += 1;
        }
        let exp_digit_start = exp_end;
        while bytes.get(exp_end).is_some_and(|b| b.is_ascii_digit()) {
            exp_end += 1;
        }
        if exp_end > exp_digit_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(0.0)
}
