use crate::Error;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use std::io::Cursor;
use std::io::Read;

/// A preprocessor for the word lists embedded at build time, providing
/// utilities for decompressing and parsing the embedded data.
pub struct EmbeddedListPreprocessor {}

impl EmbeddedListPreprocessor {
    /// Decompress an embedded Gzip file into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is not valid Gzip or does not decompress to
    /// UTF-8 text.
    pub fn decompress_to_string(read_bytes: &[u8]) -> Result<String, Error> {
        let mut decoder = GzDecoder::new(read_bytes);
        let mut decompressed_data = String::new();
        decoder.read_to_string(&mut decompressed_data).map_err(|e| {
            Error::UnexpectedError(format!("Failed to decompress embedded list: {}", e))
        })?;

        Ok(decompressed_data)
    }

    /// Parse a two-column CSV-formatted string into `(key, value)` pairs, using
    /// the named header columns.
    ///
    /// # Errors
    ///
    /// Returns a `ParserError` if the headers cannot be read, a named column is
    /// missing, or a record is malformed.
    pub fn read_pairs_from_string(
        csv_str: &str,
        key_column: &str,
        value_column: &str,
    ) -> Result<Vec<(String, String)>, Error> {
        let mut pairs = Vec::new();

        // Use a cursor to simulate a file reader from the string
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(Cursor::new(csv_str));

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        let column_index = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", name)))
        };

        let key_index = column_index(key_column)?;
        let value_index = column_index(value_column)?;

        for record in reader.records() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

            let key = record
                .get(key_index)
                .ok_or_else(|| Error::ParserError(format!("Missing '{}' field", key_column)))?;

            let value = record
                .get(value_index)
                .ok_or_else(|| Error::ParserError(format!("Missing '{}' field", value_column)))?;

            pairs.push((key.trim().to_lowercase(), value.trim().to_lowercase()));
        }

        Ok(pairs)
    }

    /// Parse the named column of a CSV-formatted string, trimmed and lowercased.
    pub fn read_column_from_string(csv_str: &str, column: &str) -> Result<Vec<String>, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(Cursor::new(csv_str));

        let index = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", column)))?;

        let mut values = Vec::new();
        for record in reader.records() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

            if let Some(value) = record.get(index) {
                values.push(value.trim().to_lowercase());
            }
        }

        Ok(values)
    }

    /// Decompress and parse one column of an embedded CSV list.
    pub fn extract_column_from_bytes(read_bytes: &[u8], column: &str) -> Result<Vec<String>, Error> {
        let csv_str = Self::decompress_to_string(read_bytes)?;
        Self::read_column_from_string(&csv_str, column)
    }

    /// Decompress and parse an embedded two-column CSV list.
    pub fn extract_pairs_from_bytes(
        read_bytes: &[u8],
        key_column: &str,
        value_column: &str,
    ) -> Result<Vec<(String, String)>, Error> {
        let csv_str = Self::decompress_to_string(read_bytes)?;
        Self::read_pairs_from_string(&csv_str, key_column, value_column)
    }
}
