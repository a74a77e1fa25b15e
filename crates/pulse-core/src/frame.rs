//! Panel data frames and numeric series extraction
//!
//! The host hands the panel a list of frames, each a set of named, typed
//! columns. The insight engine only needs one ordered numeric series, taken
//! from the first frame:
//! - the first field declared as `number`, or failing that
//! - the first field whose first value is a JSON number
//!
//! Non-numeric and non-finite values in the chosen field are skipped.

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};

/// Declared column type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Number,
    String,
    Time,
    Boolean,
    #[serde(other)]
    Other,
}

/// A single named column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: FieldKind,
    #[serde(default)]
    pub values: Vec<Value>,
}

fn default_kind() -> FieldKind {
    FieldKind::Other
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            kind,
            values,
        }
    }

    /// Numeric column from plain floats (non-finite values become null)
    pub fn numbers(name: impl Into<String>, values: &[f64]) -> Self {
        let values = values.iter().map(|&v| number_value(v)).collect();
        Self::new(name, FieldKind::Number, values)
    }

    fn starts_with_number(&self) -> bool {
        self.values.first().is_some_and(Value::is_number)
    }

    /// Finite numeric values in order, skipping everything else
    pub fn finite_values(&self) -> Vec<f64> {
        self.values
            .iter()
            .filter_map(Value::as_f64)
            .filter(|v| v.is_finite())
            .collect()
    }
}

/// A set of columns returned by one query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Frame {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { name: None, fields }
    }

    /// Field the insight engine reads its series from
    pub fn numeric_field(&self) -> Option<&Field> {
        self.fields
            .iter()
            .find(|f| f.kind == FieldKind::Number)
            .or_else(|| self.fields.iter().find(|f| f.starts_with_number()))
    }

    /// Load a frame from CSV with a header row
    ///
    /// A column is typed `number` when every non-empty cell parses as a
    /// finite float and at least one cell is non-empty; otherwise `string`.
    /// Empty cells become null.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let mut columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

        for result in rdr.records() {
            let record = result?;
            for (i, column) in columns.iter_mut().enumerate() {
                column.push(record.get(i).unwrap_or_default().to_string());
            }
        }

        let fields: Vec<Field> = headers
            .iter()
            .zip(columns)
            .map(|(name, cells)| column_to_field(name, cells))
            .collect();

        debug!(
            columns = fields.len(),
            rows = fields.first().map(|f| f.values.len()).unwrap_or(0),
            "Parsed CSV frame"
        );
        Ok(Self::new(fields))
    }
}

fn column_to_field(name: &str, cells: Vec<String>) -> Field {
    let parsed: Vec<Option<f64>> = cells
        .iter()
        .map(|c| c.parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect();

    let is_numeric = cells.iter().any(|c| !c.is_empty())
        && cells
            .iter()
            .zip(&parsed)
            .all(|(cell, num)| cell.is_empty() || num.is_some());

    if is_numeric {
        let values = parsed
            .into_iter()
            .map(|v| v.map(number_value).unwrap_or(Value::Null))
            .collect();
        Field::new(name, FieldKind::Number, values)
    } else {
        let values = cells
            .into_iter()
            .map(|c| if c.is_empty() { Value::Null } else { Value::String(c) })
            .collect();
        Field::new(name, FieldKind::String, values)
    }
}

fn number_value(v: f64) -> Value {
    serde_json::Number::from_f64(v)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Everything a panel receives from one refresh
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelData {
    #[serde(default)]
    pub series: Vec<Frame>,
}

impl PanelData {
    pub fn new(series: Vec<Frame>) -> Self {
        Self { series }
    }

    /// Single-frame data holding one numeric column
    pub fn from_values(values: &[f64]) -> Self {
        Self::new(vec![Frame::new(vec![Field::numbers("value", values)])])
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(Self::new(vec![Frame::from_csv_reader(reader)?]))
    }

    /// Load from a `.json` or `.csv` file, chosen by extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("json") => Self::from_json_str(&fs::read_to_string(path)?),
            Some("csv") => Self::from_csv_reader(fs::File::open(path)?),
            _ => Err(Error::UnsupportedFormat(format!(
                "{} (expected .csv or .json)",
                path.display()
            ))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// The numeric series of the first frame, or empty if there is none
    pub fn numeric_values(&self) -> Vec<f64> {
        self.series
            .first()
            .and_then(Frame::numeric_field)
            .map(Field::finite_values)
            .unwrap_or_default()
    }
}
