use crate::cli::Cli;
use crate::error::ConfigError;
use crate::workloads::grid::GridSpec;
use regex::Regex;
use std::num::NonZeroU32;

/// Fully validated and resolved configuration for one run.
#[derive(Debug)]
pub struct Config {
  pub filter: Regex,
  pub repetitions: NonZeroU32,
  pub grid: GridSpec,
}

impl TryFrom<Cli> for Config {
  type Error = ConfigError;

  fn try_from(
    Cli {
      filter,
      tests,
      columns,
      rows,
      output_dir,
    }: Cli,
  ) -> Result<Self, Self::Error> {
    if !output_dir.is_dir() {
      return Err(ConfigError::OutputDir { path: output_dir });
    }

    Ok(Config {
      filter,
      repetitions: tests,
      grid: GridSpec {
        rows,
        columns,
        output_dir,
      },
    })
  }
}
