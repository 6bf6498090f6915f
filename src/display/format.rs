//! Small text helpers shared by the formatters

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate to `max_len` characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Collapse newlines so a value fits on one table row
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer title", 10), "a much ...");
        assert_eq!(truncate("abcdef", 2), "..");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("ピカチュウの冒険", 6), "ピカチ...");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("one\ntwo   three"), "one two three");
    }
}
