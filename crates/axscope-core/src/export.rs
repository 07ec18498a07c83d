//! CSV export of a decode cycle's results.
//!
//! One row per packet: hex line in column one, decoded text in column two.
//! Fields are RFC-4180 quoted and the document is prefixed with a UTF-8 BOM
//! for spreadsheet compatibility.

use thiserror::Error;

/// UTF-8 byte-order mark prefixed to every export.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Prefix for the conventional export file name.
pub const EXPORT_PREFIX: &str = "axscope";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("row count mismatch: {hex_rows} hex rows, {char_rows} char rows")]
    RowCountMismatch { hex_rows: usize, char_rows: usize },
}

/// Serialize paired hex/char packet lines into a CSV byte blob.
///
/// Inputs are pre-filtered packet lines (no blanks); a length mismatch
/// between them is an error rather than silent truncation.
///
/// # Examples
/// ```
/// use axscope_core::export::serialize_csv;
///
/// let csv = serialize_csv(&["AABB", "CCDD"], &["xy", "zw"])?;
/// let text = std::str::from_utf8(&csv[3..]).unwrap();
/// assert_eq!(text, "\"AABB\",\"xy\"\n\"CCDD\",\"zw\"");
/// # Ok::<(), axscope_core::export::ExportError>(())
/// ```
pub fn serialize_csv<H: AsRef<str>, C: AsRef<str>>(
    hex_lines: &[H],
    char_lines: &[C],
) -> Result<Vec<u8>, ExportError> {
    if hex_lines.len() != char_lines.len() {
        return Err(ExportError::RowCountMismatch {
            hex_rows: hex_lines.len(),
            char_rows: char_lines.len(),
        });
    }

    let rows: Vec<String> = hex_lines
        .iter()
        .zip(char_lines)
        .map(|(hex, chars)| {
            format!(
                "{},{}",
                escape_field(hex.as_ref()),
                escape_field(chars.as_ref())
            )
        })
        .collect();

    let mut out = Vec::from(UTF8_BOM);
    out.extend_from_slice(rows.join("\n").as_bytes());
    Ok(out)
}

/// Conventional export file name for a given source file base name.
pub fn export_file_name(source_base_name: &str) -> String {
    format!("{EXPORT_PREFIX}_{source_base_name}.csv")
}

fn escape_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::{ExportError, UTF8_BOM, export_file_name, serialize_csv};

    #[test]
    fn csv_is_bom_prefixed_and_transposed() {
        let csv = serialize_csv(&["AABB", "CCDD"], &["xy", "zw"]).unwrap();
        assert_eq!(&csv[..3], &UTF8_BOM);
        let text = std::str::from_utf8(&csv[3..]).unwrap();
        let rows: Vec<&str> = text.split('\n').collect();
        assert_eq!(rows, vec!["\"AABB\",\"xy\"", "\"CCDD\",\"zw\""]);
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let csv = serialize_csv(&["22"], &["he\"llo"]).unwrap();
        let text = std::str::from_utf8(&csv[3..]).unwrap();
        assert_eq!(text, "\"22\",\"he\"\"llo\"");
    }

    #[test]
    fn empty_input_yields_bom_only() {
        let csv = serialize_csv::<&str, &str>(&[], &[]).unwrap();
        assert_eq!(csv, UTF8_BOM.to_vec());
    }

    #[test]
    fn row_count_mismatch_is_an_error() {
        let err = serialize_csv(&["AABB"], &["x", "y"]).unwrap_err();
        assert!(matches!(
            err,
            ExportError::RowCountMismatch {
                hex_rows: 1,
                char_rows: 2
            }
        ));
    }

    #[test]
    fn export_name_follows_convention() {
        assert_eq!(export_file_name("beacon"), "axscope_beacon.csv");
    }
}
