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

//! # Sheetbench
//!
//! `sheetbench` is a micro-benchmark harness for spreadsheet-writing libraries.
//! It fills a synthetic grid with each library, writes the result to disk, and
//! prints the average wall-clock time per library.
//!
//! This crate contains the main library logic for the `sheetbench` CLI. The
//! harness modules (`registry`, `selector`, `runner`, `report`) do not depend
//! on the built-in workloads and can be driven with any set of closures.
//!
//! ## Core Modules
//!
//! * [`registry`]: `Workload` and the explicit, name-unique `Registry`.
//! * [`selector`]: Regex filtering and name ordering of registered workloads.
//! * [`runner`]: Times a workload over N repetitions, or reports why it was skipped.
//! * [`report`]: Formats the one-line-per-workload output.
//! * [`benchmark`]: Contains the `run_benchmarks` function tying the above together.
//! * [`workloads`]: The built-in csv and xlsx workloads.
//! * [`cli`]: Defines the `clap`-based command-line interface.
//! * [`config`]: Resolves the parsed CLI into a validated `Config`.
//! * [`error`]: Defines the custom error types for the library.
//! * [`logging`]: Provides the `setup_tracing` utility.

pub mod benchmark;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod report;
pub mod runner;
pub mod selector;
pub mod workloads;
