use serde::Serialize;
use serde::Serializer;
use std::path::PathBuf;

/// The values rows are filled with, repeated endlessly: row `i` holds
/// `VALUES[i % 4]` in every column.
pub const VALUES: [CellValue; 4] = [
  CellValue::Int(1),
  CellValue::Empty,
  CellValue::Text("foobar"),
  CellValue::Float(2.32),
];

/// A single cell of the synthetic grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue {
  Int(i64),
  Empty,
  Text(&'static str),
  Float(f64),
}

impl Serialize for CellValue {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match *self {
      CellValue::Int(n) => serializer.serialize_i64(n),
      CellValue::Empty => serializer.serialize_str(""),
      CellValue::Text(s) => serializer.serialize_str(s),
      CellValue::Float(x) => serializer.serialize_f64(x),
    }
  }
}

/// Grid dimensions and artifact location, captured by every workload when
/// it is registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSpec {
  pub rows: u32,
  pub columns: u16,
  pub output_dir: PathBuf,
}

impl GridSpec {
  /// Zero-based row index paired with the value that fills the row.
  pub fn row_values(&self) -> impl Iterator<Item = (u32, CellValue)> + use<> {
    (0..self.rows).zip(VALUES.into_iter().cycle())
  }

  pub fn output_path(&self, file_name: &str) -> PathBuf {
    self.output_dir.join(file_name)
  }
}
