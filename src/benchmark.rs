use crate::config::Config;
use crate::error::RunError;
use crate::registry::Registry;
use crate::report::Reporter;
use crate::runner;
use crate::selector::select;
use std::io::Write;

/// Main benchmark driver.
///
/// Selects the workloads matching `config.filter`, then times and reports
/// them one at a time in name order. The first workload failure that is not
/// a missing dependency stops the run; lines already written stay written.
pub fn run_benchmarks<W: Write>(config: &Config, registry: &Registry, out: W) -> Result<(), RunError> {
  let span = tracing::info_span!(
    "run_benchmarks",
    filter = %config.filter,
    repetitions = config.repetitions.get(),
    rows = config.grid.rows,
    columns = config.grid.columns
  );
  let _enter = span.enter();

  tracing::info!("--- Starting Benchmark Run ---");

  let selected = select(registry, &config.filter);
  if selected.is_empty() {
    tracing::warn!("No workload matches the filter");
  }

  let mut reporter = Reporter::new(out);
  for workload in selected {
    let outcome = runner::run(workload, config.repetitions)?;
    reporter.report(workload.name(), &outcome)?;
  }

  tracing::info!("--- Benchmark run complete ---");
  Ok(())
}
