//! Display formatting for prices, dates, and card text.
//!
//! Prices group thousands with a space and take a configurable suffix;
//! dates render day-first. Nothing in the codebase parses these strings
//! back - the typed record is always authoritative.

use chrono::NaiveDate;

/// `45000` → `"45 000 ₽"` (suffix configurable, skipped when empty).
pub fn format_price(amount: i64, suffix: &str) -> String {
    let grouped = group_thousands(amount);
    if suffix.is_empty() {
        grouped
    } else {
        format!("{} {}", grouped, suffix)
    }
}

/// Thousands grouping for plain counters.
pub fn group_thousands(amount: i64) -> String {
    let negative = amount < 0;
    let digits: Vec<u8> = amount.unsigned_abs().to_string().into_bytes();

    let mut grouped = Vec::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.extend_from_slice(" ".as_bytes());
        }
        grouped.push(*digit);
    }

    let body = String::from_utf8(grouped).expect("digits and spaces are valid UTF-8");
    if negative { format!("-{}", body) } else { body }
}

/// Day-first date, `01.06.2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", format_date(start), format_date(end))
}

/// Truncate and normalize a string for table display:
/// - Replaces newlines with spaces
/// - Collapses consecutive whitespace
/// - Respects UTF-8 character boundaries
pub fn truncate_for_display(s: &str, max_chars: usize) -> String {
    let normalized = s
        .replace(['\n', '\r'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if normalized.chars().count() <= max_chars {
        normalized
    } else {
        let truncated: String = normalized.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
