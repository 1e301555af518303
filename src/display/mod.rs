//! Display formatting for terminal output
//!
//! Table rendering for expense lists and analytics views, plus a few small
//! text helpers shared by them.

pub mod analytics;
pub mod expense;

pub use analytics::{
    format_bucket_table, format_category_table, format_comparison_table, format_forecast_table,
    format_pattern, format_summary,
};
pub use expense::{format_expense_details, format_expense_table};

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    let magnitude = pct.abs();
    if magnitude < 0.1 && magnitude > 0.0 {
        format!("{:.2}%", pct)
    } else if magnitude < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Format a signed change, e.g. `+12.5%`
pub fn format_change(pct: f64) -> String {
    if pct > 0.0 {
        format!("+{}", format_percentage(pct))
    } else {
        format_percentage(pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate a string to at most `max_len` characters, with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
        assert_eq!(format_percentage(-25.0), "-25%");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(12.4), "+12%");
        assert_eq!(format_change(-4.0), "-4.0%");
        assert_eq!(format_change(0.0), "0.0%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(-5.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Café au lait", 7), "Café...");
    }
}
