//! Lenient numeric parsing for operands.
//!
//! Operands are never rejected: leading blanks are skipped, an optional sign
//! is honoured, digits are consumed until the first character that is not
//! one, and text without any digit reads as 0. Overflow wraps.

/// Parses a decimal operand such as `4096`, `-3` or `12AB` (reads 12).
pub fn decimal(text: &str) -> i32 {
    let (negative, digits) = split_sign(text.trim_start());

    let mut value: i32 = 0;
    for c in digits.chars() {
        match c.to_digit(10) {
            Some(d) => value = value.wrapping_mul(10).wrapping_add(d as i32),
            None => break,
        }
    }

    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

/// Parses a hexadecimal operand such as `1000`, `0x1F` or `f1`.
pub fn hex(text: &str) -> i32 {
    let (negative, digits) = split_sign(text.trim_start());
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_hexdigit()))
        .unwrap_or(digits);

    let mut value: u32 = 0;
    for c in digits.chars() {
        match c.to_digit(16) {
            Some(d) => value = value.wrapping_mul(16).wrapping_add(d),
            None => break,
        }
    }

    let value = value as i32;
    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_plain() {
        assert_eq!(decimal("4096"), 4096);
        assert_eq!(decimal("  12"), 12);
        assert_eq!(decimal("-3"), -3);
        assert_eq!(decimal("+7"), 7);
    }

    #[test]
    fn decimal_stops_at_garbage() {
        assert_eq!(decimal("12AB"), 12);
        assert_eq!(decimal("ALPHA"), 0);
        assert_eq!(decimal(""), 0);
        assert_eq!(decimal("-"), 0);
    }

    #[test]
    fn hex_plain() {
        assert_eq!(hex("1000"), 0x1000);
        assert_eq!(hex("f1"), 0xF1);
        assert_eq!(hex("0x1F"), 0x1F);
        assert_eq!(hex("4C"), 0x4C);
    }

    #[test]
    fn hex_stops_at_garbage() {
        assert_eq!(hex("1G"), 1);
        assert_eq!(hex("ZZ"), 0);
        assert_eq!(hex(""), 0);
        assert_eq!(hex("0x"), 0);
    }
}
