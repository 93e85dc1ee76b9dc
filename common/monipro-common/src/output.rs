//! Output helpers for non-interactive dashboard modes
//!
//! Provides small formatting functions so renderers don't repeat the
//! serialize-and-map-error pattern.

use serde::Serialize;

use crate::error::Result;

/// Serialize any value as a single JSON line (no trailing newline)
///
/// Suitable for line-delimited JSON streams where one record is one line.
///
/// # Example
///
/// ```rust,ignore
/// use monipro_common::json_line;
///
/// println!("{}", json_line(&snapshot)?);
/// ```
pub fn json_line<T: Serialize>(data: &T) -> Result<String> {
    Ok(serde_json::to_string(data)?)
}

/// Serialize any value as pretty-printed JSON
pub fn json_pretty<T: Serialize>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Join a heading and `label: value` rows into an aligned text block
///
/// Labels are padded to the width of the longest label.
pub fn text_block(heading: &str, rows: &[(String, String)]) -> String {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut out = String::from(heading);
    for (label, value) in rows {
        out.push('\n');
        out.push_str(&format!("  {:<width$}  {}", label, value, width = width));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_json_line() {
        let data = TestData {
            name: "cpu".to_string(),
            value: 42,
        };
        let line = json_line(&data).unwrap();
        assert_eq!(line, r#"{"name":"cpu","value":42}"#);
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_json_pretty() {
        let data = TestData {
            name: "cpu".to_string(),
            value: 42,
        };
        let text = json_pretty(&data).unwrap();
        assert!(text.contains("\"value\": 42"));
    }

    #[test]
    fn test_text_block_aligns_labels() {
        let rows = vec![
            ("CPU".to_string(), "12%".to_string()),
            ("Memory".to_string(), "40%".to_string()),
        ];
        let block = text_block("MoniPro", &rows);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[0], "MoniPro");
        assert_eq!(lines[1], "  CPU     12%");
        assert_eq!(lines[2], "  Memory  40%");
    }

    #[test]
    fn test_text_block_without_rows() {
        assert_eq!(text_block("empty", &[]), "empty");
    }
}
