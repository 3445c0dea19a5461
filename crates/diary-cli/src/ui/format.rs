//! String formatting utilities for UI rendering.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use super::theme::{RULE, TIMESTAMP_FORMAT};

/// Format an entry timestamp for the browse header.
pub fn format_timestamp<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// A rule as wide as `text`, counted in characters.
pub fn underline(text: &str) -> String {
    std::iter::repeat(RULE).take(text.chars().count()).collect()
}

/// Lines of the browse view for one entry.
pub fn entry_lines(header: &str, content: &str) -> Vec<String> {
    let rule = underline(header);
    vec![
        header.to_string(),
        rule.clone(),
        content.to_string(),
        String::new(),
        String::new(),
        rule,
        "n) new entry".to_string(),
        "d) delete entry".to_string(),
        "q) return to main menu".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_format_timestamp_pm() {
        let dt = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 5, 14, 7, 0)
            .unwrap();
        assert_eq!(format_timestamp(&dt), "Tuesday March 05, 2024 02:07PM");
    }

    #[test]
    fn test_format_timestamp_midnight_is_twelve_am() {
        let dt = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2023, 12, 31, 0, 30, 0)
            .unwrap();
        assert_eq!(format_timestamp(&dt), "Sunday December 31, 2023 12:30AM");
    }

    #[test]
    fn test_underline_counts_characters() {
        assert_eq!(underline("abc"), "===");
        assert_eq!(underline("héllo"), "=====");
        assert_eq!(underline(""), "");
    }

    #[test]
    fn test_entry_lines_layout() {
        let lines = entry_lines("Header", "Body\nmore");

        assert_eq!(lines[0], "Header");
        assert_eq!(lines[1], "======");
        assert_eq!(lines[2], "Body\nmore");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "======");
        assert_eq!(
            &lines[6..],
            &["n) new entry", "d) delete entry", "q) return to main menu"]
        );
    }
}
