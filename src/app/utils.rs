use rust_decimal::Decimal;

pub fn normalize_symbol(field: &str) -> String {
    field.trim().to_uppercase()
}

/// Reads the leading whole number the way a form's integer parse does:
/// leading whitespace and a sign are skipped, anything after the digits is
/// ignored ("3.7" is 3, "10abc" is 10). Only counts above zero are accepted.
pub fn parse_quantity(field: &str) -> Option<u32> {
    let rest = field.trim_start();
    let (negative, rest) = match rest.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, rest.strip_prefix('+').unwrap_or(rest)),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() || negative {
        return None;
    }

    digits
        .parse::<u32>()
        .ok()
        .filter(|quantity| *quantity > 0)
}

pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp(2).normalize();
    if rounded < Decimal::ZERO {
        format!("-${}", rounded.abs())
    } else {
        format!("${}", rounded)
    }
}
