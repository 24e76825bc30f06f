//! CSV Data Loader Module
//! Reads the counter table from a byte stream with Polars and extracts the
//! observation columns by name.

use super::{Observation, ObservationTable};
use polars::prelude::*;
use std::io::{Cursor, Read};
use thiserror::Error;
use tracing::{debug, info};

/// Column holding instructions executed so far
pub const EXECUTED_COL: &str = "executed";
/// Column counting addresses that contain a memory address
pub const ADDR_MEM_COL: &str = "addr_mem";
/// Column counting all addresses seen
pub const ADDR_ANY_COL: &str = "addr_any";

/// Rows shown by the preview
pub const PREVIEW_ROWS: usize = 5;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read input: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Input is empty, expected a CSV header")]
    Empty,
    #[error("No data loaded")]
    NoData,
    #[error("Missing required column '{0}'")]
    MissingColumn(String),
    #[error("Column '{column}' has a non-numeric value in data row {row}")]
    NonNumeric { column: String, row: usize },
}

/// Holds the parsed DataFrame for the lifetime of one run.
pub struct DataLoader {
    df: Option<DataFrame>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self { df: None }
    }

    /// Read the whole stream and parse it as CSV with a header row.
    pub fn load_reader<R: Read>(&mut self, mut reader: R) -> Result<&DataFrame, LoaderError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        debug!(bytes = bytes.len(), "read input");

        let df = Self::parse_csv(bytes)?;
        info!(rows = df.height(), columns = df.width(), "parsed CSV");

        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// Parse an in-memory CSV buffer.
    pub fn parse_csv(bytes: Vec<u8>) -> Result<DataFrame, LoaderError> {
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Err(LoaderError::Empty);
        }

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()?;

        Ok(df)
    }

    /// Text rendering of the first rows, for a quick look at the input.
    pub fn preview(&self) -> Result<String, LoaderError> {
        let df = self.df.as_ref().ok_or(LoaderError::NoData)?;
        Ok(df.head(Some(PREVIEW_ROWS)).to_string())
    }

    /// Build the observation table from the three required columns.
    /// Other columns are ignored.
    pub fn observations(&self) -> Result<ObservationTable, LoaderError> {
        let df = self.df.as_ref().ok_or(LoaderError::NoData)?;

        let executed = Self::numeric_column(df, EXECUTED_COL)?;
        let addr_mem = Self::numeric_column(df, ADDR_MEM_COL)?;
        let addr_any = Self::numeric_column(df, ADDR_ANY_COL)?;

        let rows = executed
            .into_iter()
            .zip(addr_mem)
            .zip(addr_any)
            .map(|((executed, addr_mem), addr_any)| Observation {
                executed,
                addr_mem,
                addr_any,
            })
            .collect();

        Ok(ObservationTable::new(rows))
    }

    /// Read a column as f64, failing on the first cell that is not a number.
    fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<f64>, LoaderError> {
        let column = df
            .column(name)
            .map_err(|_| LoaderError::MissingColumn(name.to_string()))?;
        // Padded numbers (`100, 2,5`) are inferred as text; trim before casting
        let values = match column.dtype() {
            DataType::String => {
                let trimmed: StringChunked = column
                    .str()?
                    .into_iter()
                    .map(|value| value.map(str::trim))
                    .collect();
                trimmed.into_series()
            }
            _ => column.as_materialized_series().clone(),
        };
        let value_f64 = values.cast(&DataType::Float64)?;
        let value_ca = value_f64.f64()?;

        value_ca
            .into_iter()
            .enumerate()
            .map(|(row, value)| {
                value.ok_or_else(|| LoaderError::NonNumeric {
                    column: name.to_string(),
                    row,
                })
            })
            .collect()
    }
}
