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
use std::path::PathBuf;
use thiserror::Error;

/// Boxed error returned by the libraries a workload wraps.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error enum for the sheetbench library.
#[derive(Error, Debug)]
pub enum SheetbenchError {
  #[error("Workload registration failed")]
  Registry(#[from] RegistryError),

  #[error("Configuration error")]
  Config(#[from] ConfigError),

  #[error("Benchmark run failed")]
  Run(#[from] RunError),
}

/// Errors related to workload registration (src/registry.rs).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
  #[error("A workload named '{name}' is already registered")]
  DuplicateName { name: String },
}

/// Errors related to configuration resolution (src/config.rs).
#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("Output directory does not exist or is not a directory: {path}")]
  OutputDir { path: PathBuf },
}

/// Failure reported by a single workload execution.
#[derive(Error, Debug)]
pub enum WorkloadError {
  /// The library the workload wraps is not available here.
  /// The runner reports this as a skip instead of aborting.
  #[error("{0}")]
  MissingDependency(String),

  #[error("Workload '{workload}' failed")]
  Failed {
    workload: &'static str,
    #[source]
    source: BoxError,
  },
}

impl WorkloadError {
  pub fn failed(workload: &'static str, source: impl Into<BoxError>) -> Self {
    WorkloadError::Failed {
      workload,
      source: source.into(),
    }
  }
}

/// Errors related to benchmark execution (src/runner.rs, src/benchmark.rs).
#[derive(Error, Debug)]
pub enum RunError {
  #[error("Workload '{name}' aborted the run")]
  Workload {
    name: String,
    #[source]
    source: WorkloadError,
  },

  #[error("Failed to write report line")]
  Report(#[from] std::io::Error),
}
