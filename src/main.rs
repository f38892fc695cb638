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
use anyhow::Result;
use clap::Parser;
use sheetbench::benchmark::run_benchmarks;
use sheetbench::cli::Cli;
use sheetbench::config::Config;
use sheetbench::error::SheetbenchError;
use sheetbench::logging::setup_tracing;
use sheetbench::workloads;

fn main() -> Result<()> {
  let _log_guard = setup_tracing()?;

  let cli = Cli::parse();
  let main_span = tracing::info_span!("sheetbench");
  let _enter = main_span.enter();

  tracing::info!("Initializing Benchmark Run...");

  let config = Config::try_from(cli).map_err(SheetbenchError::from)?;
  let registry = workloads::builtin(&config.grid).map_err(SheetbenchError::from)?;

  run_benchmarks(&config, &registry, std::io::stdout().lock()).map_err(SheetbenchError::from)?;

  Ok(())
}
