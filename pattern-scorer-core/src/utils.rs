use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// read a file as text, tolerating non-UTF-8 content
pub fn read_text_tolerant(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(decode_bytes(&bytes))
}

/// decode bytes with appropriate encoding
fn decode_bytes(bytes: &[u8]) -> String {
    let (cow, _encoding_used, had_errors) = encoding_rs::UTF_8.decode(bytes);

    if had_errors {
        // fall back to lossy conversion if there were decoding errors
        String::from_utf8_lossy(bytes).to_string()
    } else {
        cow.to_string()
    }
}

/// total line count the way a plain newline split sees it
pub fn total_lines(content: &str) -> usize {
    content.split('\n').count()
}

/// count lines that are neither blank nor `#` comments
pub fn count_significant_lines(content: &str) -> usize {
    content
        .split('\n')
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .count()
}

/// check if a line reads as a comment (`#`, `//` or block-comment continuation)
pub fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('#') || trimmed.starts_with("//") || trimmed.starts_with('*')
}

/// truncate a string to a maximum length with ellipsis
pub fn truncate_with_ellipsis(text: &str, max_length: usize) -> String {
    if text.len() <= max_length {
        text.to_string()
    } else {
        // unicode-safe truncation to avoid panics on multi-byte characters
        let truncate_at = std::cmp::min(max_length.saturating_sub(3), text.len());
        let mut end_pos = truncate_at;

        while end_pos > 0 && !text.is_char_boundary(end_pos) {
            end_pos -= 1;
        }

        format!("{}...", &text[..end_pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_invalid_utf8_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.py");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"# caf\xe9\nprint('ok')\n").unwrap();

        let content = read_text_tolerant(&path).unwrap();
        assert!(content.contains("print('ok')"));
    }

    #[test]
    fn read_missing_file_is_an_error() {
        assert!(read_text_tolerant(Path::new("/no/such/file.py")).is_err());
    }

    #[test]
    fn significant_lines_skip_blanks_and_comments() {
        let content = "# header\n\nx = 1\n  # indented comment\ny = 2\n";
        assert_eq!(count_significant_lines(content), 2);
    }

    #[test]
    fn total_lines_counts_trailing_newline_fragment() {
        assert_eq!(total_lines("a\nb\n"), 3);
        assert_eq!(total_lines("a"), 1);
    }

    #[test]
    fn comment_line_detection() {
        assert!(is_comment_line("  # python"));
        assert!(is_comment_line("// js"));
        assert!(is_comment_line(" * block continuation"));
        assert!(!is_comment_line("let x = 1; // trailing"));
    }

    #[test]
    fn truncation_is_unicode_safe() {
        assert_eq!(truncate_with_ellipsis("short", 20), "short");
        let truncated = truncate_with_ellipsis("a-very-long-pattern-name", 10);
        assert_eq!(truncated, "a-very-...");
        // must not panic on multi-byte boundaries
        let _ = truncate_with_ellipsis("ééééééééééééé", 8);
    }
}
