//! Presentation formatting for totals and multipliers.
//!
//! The engine itself never rounds; these helpers are where a displayed
//! figure gets its two decimals and grouping.

/// Formats a monetary value as "$1,234.56"
pub fn format_price(value: f64) -> String {
    let negative = value < 0.0;
    let formatted = format!("{:.2}", value.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    // Insert a thousands separator every three digits from the right
    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if negative {
        format!("-${grouped}.{cents}")
    } else {
        format!("${grouped}.{cents}")
    }
}

/// Formats a percentage multiplier (0.8) as a whole-number percentage ("80%")
pub fn format_percentage(multiplier: f64) -> String {
    format!("{:.0}%", multiplier * 100.0)
}
