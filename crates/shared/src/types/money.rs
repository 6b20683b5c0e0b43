//! Money formatting for minor-unit amounts.
//!
//! CRITICAL: Never use floating-point for money.
//! Amounts travel as integer cents and are only divided by 100 here, at
//! render time, using integer arithmetic.

/// An amount in the smallest currency unit (e.g., cents).
pub type Cents = i64;

/// Formats cents as whole `en-US` dollars, e.g. `123456 -> "$1,235"`.
///
/// Rounds half away from zero. An amount that rounds to zero renders as
/// `"$0"` without a sign.
#[must_use]
pub fn format_cents(cents: Cents) -> String {
    let dollars = (cents.unsigned_abs() + 50) / 100;
    with_sign(cents < 0 && dollars > 0, &group_thousands(dollars))
}

/// Formats cents with two fraction digits, e.g. `-123456 -> "-$1,234.56"`.
#[must_use]
pub fn format_cents_exact(cents: Cents) -> String {
    let abs = cents.unsigned_abs();
    let body = format!("{}.{:02}", group_thousands(abs / 100), abs % 100);
    with_sign(cents < 0, &body)
}

fn with_sign(negative: bool, body: &str) -> String {
    if negative {
        format!("-${body}")
    } else {
        format!("${body}")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
