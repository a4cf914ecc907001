//! Shared formatting utilities for UI components.

use unicode_width::UnicodeWidthStr;

/// Format a number with thousand separators.
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a statistic value with smart precision.
pub fn format_stat_value(val: f64) -> String {
    if !val.is_finite() {
        return if val.is_nan() {
            "NaN".to_string()
        } else if val.is_sign_positive() {
            "+Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-3..1e6).contains(&abs_val) {
        format!("{:.3e}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.3}", val)
    }
}

/// Pad or truncate a string to a display width.
pub fn fit_width(s: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(s);
    if current <= width {
        let mut out = s.to_string();
        out.push_str(&" ".repeat(width - current));
        return out;
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = UnicodeWidthStr::width(c.to_string().as_str());
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    while UnicodeWidthStr::width(out.as_str()) < width {
        out.push(' ');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(344), "344");
        assert_eq!(format_number(5076), "5,076");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn stat_values() {
        assert_eq!(format_stat_value(0.0), "0");
        assert_eq!(format_stat_value(39.1), "39.1");
        assert_eq!(format_stat_value(3750.0), "3750.0");
        assert_eq!(format_stat_value(f64::NAN), "NaN");
    }

    #[test]
    fn fit_width_pads_and_truncates() {
        assert_eq!(fit_width("abc", 5), "abc  ");
        assert_eq!(fit_width("abcdef", 4), "abc…");
    }
}
