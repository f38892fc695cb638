// Copyright 2025 Chisomo Makombo Sakala
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The spreadsheet-writing workloads shipped with the `sheetbench` binary.
//!
//! Each library lives behind a Cargo feature. When a feature is compiled
//! out its workloads are still registered, marked unavailable, so a run
//! reports them as skipped instead of silently dropping them.

pub mod grid;

#[cfg(feature = "csv")]
pub mod delimited;
#[cfg(feature = "xlsx")]
pub mod xlsx;

use crate::error::RegistryError;
use crate::registry::Registry;
use crate::registry::Workload;
use grid::GridSpec;

pub const CSV: &str = "benchmark_csv";
pub const XLSX_CELLS: &str = "benchmark_rust_xlsxwriter";
pub const XLSX_ROWS: &str = "benchmark_rust_xlsxwriter_rows";
pub const XLSX_MATRIX: &str = "benchmark_rust_xlsxwriter_matrix";

/// Builds the registry of built-in workloads, each capturing its own copy
/// of `grid`.
pub fn builtin(grid: &GridSpec) -> Result<Registry, RegistryError> {
  let mut registry = Registry::new();

  #[cfg(feature = "csv")]
  {
    let grid = grid.clone();
    registry.register(Workload::new(CSV, move || delimited::write(&grid)))?;
  }
  #[cfg(not(feature = "csv"))]
  registry.register(Workload::unavailable(CSV, missing_feature("csv")))?;

  #[cfg(feature = "xlsx")]
  {
    let cells_grid = grid.clone();
    registry.register(Workload::new(XLSX_CELLS, move || {
      xlsx::write_cells(&cells_grid)
    }))?;
    let rows_grid = grid.clone();
    registry.register(Workload::new(XLSX_ROWS, move || {
      xlsx::write_rows(&rows_grid)
    }))?;
    let matrix_grid = grid.clone();
    registry.register(Workload::new(XLSX_MATRIX, move || {
      xlsx::write_matrix(&matrix_grid)
    }))?;
  }
  #[cfg(not(feature = "xlsx"))]
  {
    registry.register(Workload::unavailable(XLSX_CELLS, missing_feature("xlsx")))?;
    registry.register(Workload::unavailable(XLSX_ROWS, missing_feature("xlsx")))?;
    registry.register(Workload::unavailable(XLSX_MATRIX, missing_feature("xlsx")))?;
  }

  tracing::debug!(workloads = registry.len(), ?grid, "Built-in workloads registered");
  Ok(registry)
}

#[cfg_attr(all(feature = "csv", feature = "xlsx"), allow(dead_code))]
fn missing_feature(feature: &str) -> String {
  format!("built without the `{}` feature", feature)
}
