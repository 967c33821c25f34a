// SPDX-License-Identifier: Apache-2.0

/// Round to the nearest hundredth. Applied to actor means *before* scaling
/// to percent, so the scaled figure keeps exactly the precision the mean had.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Two decimals with thousands separators: `1234567.5` → `"1,234,567.50"`.
#[must_use]
pub fn format_grouped(value: f64) -> String {
    let rendered = format!("{value:.2}");
    let (sign, digits) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    // Non-finite values render without a decimal point; pass them through.
    let Some((int_part, frac_part)) = digits.split_once('.') else {
        return rendered;
    };
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return rendered;
    }
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}.{frac_part}")
}

/// Ungrouped percentage with two decimals: `12.456` → `"12.46%"`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Currency with thousands separators: `30000000.0` → `"$30,000,000.00"`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    format!("${}", format_grouped(value))
}
