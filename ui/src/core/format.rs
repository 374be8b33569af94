//! Formatting helpers for presenting estimates.

use time::{macros::format_description, Date};

pub fn format_rt(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.2}"),
        _ => "n/a".to_string(),
    }
}

/// Short axis label, e.g. `Mar 2021`.
pub fn format_axis_date(date: Date) -> String {
    date.format(format_description!("[month repr:short] [year]"))
        .unwrap_or_else(|_| date.to_string())
}

/// Full tooltip label, e.g. `7 Mar 2021`.
pub fn format_long_date(date: Date) -> String {
    date.format(format_description!(
        "[day padding:none] [month repr:short] [year]"
    ))
    .unwrap_or_else(|_| date.to_string())
}

pub fn format_count(value: usize) -> String {
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
