use clap::Parser;
use regex::Regex;
use std::num::NonZeroU32;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
  version,
  about = "Simple benchmark for various spreadsheet-writing libraries"
)]
pub struct Cli {
  /// Benchmark filter: only workloads whose name matches this regex run.
  #[arg(short, long, value_name = "regex", default_value = "")]
  pub filter: Regex,

  /// Number of test runs per workload.
  #[arg(short, long, value_name = "number", default_value = "10")]
  pub tests: NonZeroU32,

  /// Number of test spreadsheet columns.
  #[arg(
    short,
    long,
    value_name = "number",
    default_value_t = 100,
    value_parser = clap::value_parser!(u16).range(1..=16_384)
  )]
  pub columns: u16,

  /// Number of test spreadsheet rows.
  #[arg(
    short,
    long,
    value_name = "number",
    default_value_t = 1000,
    value_parser = clap::value_parser!(u32).range(1..=1_048_576)
  )]
  pub rows: u32,

  /// Directory the workloads write their output files to.
  #[arg(short, long, value_name = "dir", default_value = ".")]
  pub output_dir: PathBuf,
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::CommandFactory;

  #[test]
  fn test_cli_is_well_formed() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_defaults() {
    let cli = Cli::try_parse_from(["sheetbench"]).unwrap();
    assert_eq!(cli.filter.as_str(), "");
    assert_eq!(cli.tests.get(), 10);
    assert_eq!(cli.columns, 100);
    assert_eq!(cli.rows, 1000);
    assert_eq!(cli.output_dir, PathBuf::from("."));
  }

  #[test]
  fn test_short_flags() {
    let cli = Cli::try_parse_from([
      "sheetbench",
      "-f",
      "xlsx$",
      "-t",
      "3",
      "-c",
      "7",
      "-r",
      "11",
      "-o",
      "out",
    ])
    .unwrap();
    assert_eq!(cli.filter.as_str(), "xlsx$");
    assert_eq!(cli.tests.get(), 3);
    assert_eq!(cli.columns, 7);
    assert_eq!(cli.rows, 11);
    assert_eq!(cli.output_dir, PathBuf::from("out"));
  }

  #[test]
  fn test_rejects_bad_values() {
    for args in [
      ["sheetbench", "--tests", "0"],
      ["sheetbench", "--tests", "many"],
      ["sheetbench", "--filter", "("],
      ["sheetbench", "--columns", "0"],
      ["sheetbench", "--columns", "16385"],
      ["sheetbench", "--rows", "0"],
    ] {
      assert!(Cli::try_parse_from(args).is_err(), "accepted {:?}", args);
    }
  }
}
