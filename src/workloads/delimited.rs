use super::CSV;
use super::grid::CellValue;
use super::grid::GridSpec;
use crate::error::WorkloadError;

pub const FILE_NAME: &str = "benchmark_csv.csv";

/// Writes the grid as CSV, one serialized record per row.
pub fn write(grid: &GridSpec) -> Result<(), WorkloadError> {
  let fail = |e: csv::Error| WorkloadError::failed(CSV, e);

  let mut writer = csv::Writer::from_path(grid.output_path(FILE_NAME)).map_err(fail)?;
  let mut record: Vec<CellValue> = Vec::with_capacity(grid.columns.into());

  for (_, value) in grid.row_values() {
    record.clear();
    record.resize(grid.columns.into(), value);
    writer.serialize(&record).map_err(fail)?;
  }

  writer
    .flush()
    .map_err(|e| WorkloadError::failed(CSV, e))
}
