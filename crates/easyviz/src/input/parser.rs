//! Delimited text parser with delimiter detection.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use super::source::{DataTable, SourceMetadata};
use crate::error::{EasyvizError, Result};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Parser configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<char>,
    /// Whether the input has a header row.
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: char,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            max_rows: None,
            quote: '"',
        }
    }
}

impl ParserConfig {
    /// Use a fixed delimiter instead of auto-detection.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Treat the first row as data and generate column names.
    pub fn without_header(mut self) -> Self {
        self.has_header = false;
        self
    }

    /// Stop reading after `max_rows` data rows.
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    /// Check that delimiter and quote are single-byte characters.
    pub fn validate(&self) -> Result<()> {
        if let Some(d) = self.delimiter {
            ascii_byte(d)?;
        }
        ascii_byte(self.quote)?;
        Ok(())
    }
}

fn ascii_byte(c: char) -> Result<u8> {
    if c.is_ascii() && c != '\n' && c != '\r' {
        Ok(c as u8)
    } else {
        Err(EasyvizError::InvalidDelimiter(format!("{c:?}")))
    }
}

/// Parses uploaded delimited text into a [`DataTable`].
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the data table and metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();

        let contents = fs::read(path).map_err(|e| EasyvizError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let (table, mut metadata) = self.parse_bytes(&contents, file)?;
        metadata.path = Some(path.to_path_buf());
        Ok((table, metadata))
    }

    /// Parse uploaded bytes directly.
    pub fn parse_bytes(
        &self,
        bytes: &[u8],
        name: impl Into<String>,
    ) -> Result<(DataTable, SourceMetadata)> {
        self.config.validate()?;
        let name = name.into();

        let mut hasher = Sha256::new();
        hasher.update(bytes);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = match self.config.delimiter {
            Some(d) => ascii_byte(d)?,
            None => detect_delimiter(bytes)?,
        };
        debug!(file = %name, delimiter = %(delimiter as char).escape_default(), "parsing upload");

        let table = self.read_table(bytes, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        info!(
            file = %name,
            rows = table.row_count(),
            columns = table.column_count(),
            format = %format,
            "loaded table"
        );

        let metadata = SourceMetadata::new(
            name,
            None,
            hash,
            bytes.len() as u64,
            format,
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    fn read_table(&self, bytes: &[u8], delimiter: u8) -> Result<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(self.config.has_header)
            .quote(ascii_byte(self.config.quote)?)
            .flexible(true)
            .from_reader(bytes);

        let headers: Option<Vec<String>> = if self.config.has_header {
            let headers: Vec<String> = reader
                .headers()?
                .iter()
                .map(|s| s.trim().to_string())
                .collect();
            // An empty input yields a single empty header field.
            if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
                return Err(EasyvizError::EmptyData("No columns found".to_string()));
            }
            Some(headers)
        } else {
            None
        };

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            rows.push(record.iter().map(|s| s.to_string()).collect::<Vec<_>>());
        }

        let headers = match headers {
            Some(h) => h,
            None => {
                let width = rows.iter().map(Vec::len).max().unwrap_or(0);
                if width == 0 {
                    return Err(EasyvizError::EmptyData("No data rows found".to_string()));
                }
                (0..width).map(|i| format!("column_{}", i + 1)).collect()
            }
        };

        Ok(DataTable::new(headers, rows))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(EasyvizError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let variance: f64 = if counts.len() > 1 {
            let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            counts
                .iter()
                .map(|&c| (c as f64 - mean).powi(2))
                .sum::<f64>()
                / counts.len() as f64
        } else {
            0.0
        };

        // Higher count with lower variance wins; tabs are rare inside values.
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"a,b,c\n1,2,3\n4,5,6";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        let data = b"a\tb\tc\n1\t2\t3\n4\t5\t6";
        assert_eq!(detect_delimiter(data).unwrap(), b'\t');
    }

    #[test]
    fn test_detect_delimiter_ignores_quoted() {
        let data = b"name;note\n\"Smith, J\";ok\n\"Doe, A\";ok";
        assert_eq!(detect_delimiter(data).unwrap(), b';');
    }

    #[test]
    fn test_parse_csv() {
        let parser = Parser::new();
        let data = b"name,age,city\nAlice,30,NYC\nBob,25,LA";
        let (table, meta) = parser.parse_bytes(data, "people.csv").unwrap();

        assert_eq!(table.headers, vec!["name", "age", "city"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 0), Some("Alice"));
        assert_eq!(table.get(1, 1), Some("25"));
        assert_eq!(meta.format, "csv");
        assert_eq!(meta.file, "people.csv");
        assert!(meta.hash.starts_with("sha256:"));
        assert_eq!(meta.size_bytes, data.len() as u64);
    }

    #[test]
    fn test_parse_header_only_gives_zero_rows() {
        let (table, meta) = Parser::new().parse_bytes(b"a,b\n", "empty.csv").unwrap();
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 0);
        assert_eq!(meta.row_count, 0);
    }

    #[test]
    fn test_parse_empty_input_fails() {
        let err = Parser::new().parse_bytes(b"", "nothing.csv").unwrap_err();
        assert!(matches!(err, EasyvizError::EmptyData(_)));
    }

    #[test]
    fn test_parse_without_header() {
        let parser = Parser::with_config(ParserConfig::default().without_header());
        let (table, _) = parser.parse_bytes(b"1,2\n3,4\n", "raw.csv").unwrap();

        assert_eq!(table.headers, vec!["column_1", "column_2"]);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_parse_ragged_rows() {
        let (table, _) = Parser::new()
            .parse_bytes(b"a,b,c\n1,2\n1,2,3,4\n", "ragged.csv")
            .unwrap();

        assert_eq!(table.rows[0], vec!["1", "2", ""]);
        assert_eq!(table.rows[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn test_max_rows() {
        let parser = Parser::with_config(ParserConfig::default().with_max_rows(1));
        let (table, _) = parser.parse_bytes(b"a\n1\n2\n3\n", "a.csv").unwrap();
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_duplicate_headers_renamed() {
        let (table, _) = Parser::new()
            .parse_bytes(b"x,x,y,x\n1,2,3,4\n", "dup.csv")
            .unwrap();
        assert_eq!(table.headers, vec!["x", "x.1", "y", "x.2"]);
    }

    #[test]
    fn test_invalid_delimiter() {
        let parser = Parser::with_config(ParserConfig::default().with_delimiter('é'));
        let err = parser.parse_bytes(b"a\n1\n", "a.csv").unwrap_err();
        assert!(matches!(err, EasyvizError::InvalidDelimiter(_)));
    }
}
