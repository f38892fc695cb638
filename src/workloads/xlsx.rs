use super::XLSX_CELLS;
use super::XLSX_MATRIX;
use super::XLSX_ROWS;
use super::grid::CellValue;
use super::grid::GridSpec;
use crate::error::WorkloadError;
use rust_xlsxwriter::ColNum;
use rust_xlsxwriter::Format;
use rust_xlsxwriter::IntoExcelData;
use rust_xlsxwriter::RowNum;
use rust_xlsxwriter::Workbook;
use rust_xlsxwriter::Worksheet;
use rust_xlsxwriter::XlsxError;
use std::iter;

pub const SHEET_NAME: &str = "Sheet1";
pub const CELLS_FILE_NAME: &str = "benchmark_rust_xlsxwriter.xlsx";
pub const ROWS_FILE_NAME: &str = "benchmark_rust_xlsxwriter_rows.xlsx";
pub const MATRIX_FILE_NAME: &str = "benchmark_rust_xlsxwriter_matrix.xlsx";

/// Fills the sheet one `write_*` call per cell.
pub fn write_cells(grid: &GridSpec) -> Result<(), WorkloadError> {
  build_and_save(grid, CELLS_FILE_NAME, |sheet| {
    for (row, value) in grid.row_values() {
      for column in 0..grid.columns {
        sheet.write(row, column, value)?;
      }
    }
    Ok(())
  })
  .map_err(|e| WorkloadError::failed(XLSX_CELLS, e))
}

/// Fills the sheet with a single `write_row` call per row.
pub fn write_rows(grid: &GridSpec) -> Result<(), WorkloadError> {
  let columns = usize::from(grid.columns);

  build_and_save(grid, ROWS_FILE_NAME, |sheet| {
    for (row, value) in grid.row_values() {
      match value {
        CellValue::Int(n) => sheet.write_row(row, 0, iter::repeat_n(n as f64, columns))?,
        CellValue::Float(x) => sheet.write_row(row, 0, iter::repeat_n(x, columns))?,
        CellValue::Text(s) => sheet.write_row(row, 0, iter::repeat_n(s, columns))?,
        CellValue::Empty => continue,
      };
    }
    Ok(())
  })
  .map_err(|e| WorkloadError::failed(XLSX_ROWS, e))
}

/// Builds the whole grid in memory and hands it over in one
/// `write_row_matrix` call.
pub fn write_matrix(grid: &GridSpec) -> Result<(), WorkloadError> {
  let columns = usize::from(grid.columns);

  build_and_save(grid, MATRIX_FILE_NAME, |sheet| {
    let data: Vec<Vec<CellValue>> = grid
      .row_values()
      .map(|(_, value)| vec![value; columns])
      .collect();
    sheet.write_row_matrix(0, 0, data)?;
    Ok(())
  })
  .map_err(|e| WorkloadError::failed(XLSX_MATRIX, e))
}

fn build_and_save<F>(grid: &GridSpec, file_name: &str, fill: F) -> Result<(), XlsxError>
where
  F: FnOnce(&mut Worksheet) -> Result<(), XlsxError>,
{
  let mut workbook = Workbook::new();
  let sheet = workbook.add_worksheet().set_name(SHEET_NAME)?;
  fill(sheet)?;
  workbook.save(grid.output_path(file_name))
}

impl IntoExcelData for CellValue {
  fn write(
    self,
    worksheet: &mut Worksheet,
    row: RowNum,
    col: ColNum,
  ) -> Result<&mut Worksheet, XlsxError> {
    match self {
      CellValue::Int(n) => worksheet.write_number(row, col, n as f64),
      CellValue::Float(x) => worksheet.write_number(row, col, x),
      CellValue::Text(s) => worksheet.write_string(row, col, s),
      // Blank cells without a format are not stored at all.
      CellValue::Empty => Ok(worksheet),
    }
  }

  fn write_with_format<'a>(
    self,
    worksheet: &'a mut Worksheet,
    row: RowNum,
    col: ColNum,
    format: &Format,
  ) -> Result<&'a mut Worksheet, XlsxError> {
    match self {
      CellValue::Int(n) => worksheet.write_number_with_format(row, col, n as f64, format),
      CellValue::Float(x) => worksheet.write_number_with_format(row, col, x, format),
      CellValue::Text(s) => worksheet.write_string_with_format(row, col, s, format),
      CellValue::Empty => worksheet.write_blank(row, col, format),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use calamine::Data;
  use calamine::Range;
  use calamine::Reader;
  use calamine::Xlsx;
  use calamine::open_workbook;
  use std::path::Path;
  use tempfile::tempdir;

  fn grid(dir: &Path) -> GridSpec {
    GridSpec {
      rows: 8,
      columns: 4,
      output_dir: dir.to_path_buf(),
    }
  }

  fn read_sheet(path: &Path) -> Range<Data> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    assert_eq!(workbook.sheet_names(), [SHEET_NAME]);
    workbook.worksheet_range(SHEET_NAME).unwrap()
  }

  /// Every workload must produce the same 8 x 4 grid.
  fn assert_grid(path: &Path) {
    let range = read_sheet(path);

    assert_eq!(range.start(), Some((0, 0)));
    assert_eq!(range.end(), Some((7, 3)));
    for column in 0..4 {
      assert_eq!(range.get_value((0, column)), Some(&Data::Float(1.0)));
      assert_eq!(range.get_value((1, column)), Some(&Data::Empty));
      assert_eq!(
        range.get_value((2, column)),
        Some(&Data::String("foobar".to_string()))
      );
      assert_eq!(range.get_value((3, column)), Some(&Data::Float(2.32)));
      assert_eq!(range.get_value((7, column)), Some(&Data::Float(2.32)));
    }
  }

  #[test]
  fn test_write_cells_saves_workbook() {
    let dir = tempdir().unwrap();
    write_cells(&grid(dir.path())).unwrap();
    assert_grid(&dir.path().join(CELLS_FILE_NAME));
  }

  #[test]
  fn test_write_rows_saves_workbook() {
    let dir = tempdir().unwrap();
    write_rows(&grid(dir.path())).unwrap();
    assert_grid(&dir.path().join(ROWS_FILE_NAME));
  }

  #[test]
  fn test_write_matrix_saves_workbook() {
    let dir = tempdir().unwrap();
    write_matrix(&grid(dir.path())).unwrap();
    assert_grid(&dir.path().join(MATRIX_FILE_NAME));
  }

  #[test]
  fn test_unwritable_target_is_a_failure() {
    let dir = tempdir().unwrap();
    let grid = GridSpec {
      rows: 1,
      columns: 1,
      output_dir: dir.path().join("missing"),
    };

    let err = write_rows(&grid).unwrap_err();
    assert!(matches!(
      err,
      WorkloadError::Failed {
        workload: XLSX_ROWS,
        ..
      }
    ));

    let err = write_matrix(&grid).unwrap_err();
    assert!(matches!(
      err,
      WorkloadError::Failed {
        workload: XLSX_MATRIX,
        ..
      }
    ));
  }
}
