//! Header-driven decoding of raw delimited text into row mappings.
//!
//! The source tables are plain delimiter-separated text with no quoting or
//! escaping; a delimiter inside a value is indistinguishable from a field
//! boundary, and the decoder makes no attempt to repair that. Rows shorter
//! than the header read as empty strings for the missing trailing columns,
//! rows longer than the header silently drop the extras.

use std::sync::Arc;

/// One decoded data row, resolving column names against the shared header.
#[derive(Debug, Clone)]
pub struct Row {
    headers: Arc<[String]>,
    cells: Vec<String>,
}

impl Row {
    /// The raw cell under `column`, or `""` when the column is absent from
    /// the header or the row is too short to reach it.
    pub fn field(&self, column: &str) -> &str {
        self.headers
            .iter()
            .position(|h| h == column)
            .and_then(|idx| self.cells.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Decodes `text` into data rows, treating the first non-blank line as the
/// header. Blank lines are discarded and both bare and carriage-return
/// line endings terminate a row. Empty input yields an empty vector, not
/// an error.
pub fn rows(text: &str, delimiter: u8) -> Vec<Row> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .quoting(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Arc<[String]> = match reader.headers() {
        Ok(record) => record.iter().map(|h| h.trim().to_string()).collect(),
        Err(_) => return Vec::new(),
    };
    if headers.is_empty() {
        return Vec::new();
    }

    reader
        .records()
        .filter_map(Result::ok)
        .filter(|record| record.iter().any(|cell| !cell.trim().is_empty()))
        .map(|record| Row {
            headers: Arc::clone(&headers),
            cells: record.iter().map(str::to_string).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(text: &str) -> Vec<Row> {
        rows(text, b',')
    }

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(decode("").is_empty());
    }

    #[test]
    fn header_only_yields_no_rows() {
        assert!(decode("Crop,Variety\n").is_empty());
    }

    #[test]
    fn blank_lines_are_discarded() {
        let rows = decode("Crop,Variety\n\nTomato,Srijana\n\n\nPotato,\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].field("Crop"), "Tomato");
        assert_eq!(rows[1].field("Crop"), "Potato");
    }

    #[test]
    fn carriage_return_line_endings_are_separators() {
        let rows = decode("Crop,Variety\r\nTomato,Srijana\r\nPotato,Local\r\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].field("Variety"), "Local");
    }

    #[test]
    fn short_rows_read_missing_columns_as_empty() {
        let rows = decode("Crop,Variety,Remarks\nTomato\n");
        assert_eq!(rows[0].field("Crop"), "Tomato");
        assert_eq!(rows[0].field("Variety"), "");
        assert_eq!(rows[0].field("Remarks"), "");
    }

    #[test]
    fn long_rows_drop_extra_fields() {
        let rows = decode("Crop,Variety\nTomato,Srijana,ignored,also ignored\n");
        assert_eq!(rows[0].field("Crop"), "Tomato");
        assert_eq!(rows[0].field("Variety"), "Srijana");
    }

    #[test]
    fn unknown_column_reads_as_empty() {
        let rows = decode("Crop\nTomato\n");
        assert_eq!(rows[0].field("Nope"), "");
    }

    #[test]
    fn no_quoting_means_quotes_are_literal() {
        let rows = decode("Crop,Remarks\nTomato,\"needs, staking\"\n");
        // The comma inside the quotes is a field boundary like any other.
        assert_eq!(rows[0].field("Remarks"), "\"needs");
    }

    #[test]
    fn byte_order_mark_does_not_corrupt_first_header() {
        let rows = decode("\u{feff}Crop,Variety\nTomato,Srijana\n");
        assert_eq!(rows[0].field("Crop"), "Tomato");
    }
}
