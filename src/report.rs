use crate::runner::Outcome;
use std::io;
use std::io::Write;

/// Width the workload name is padded to on a timed line.
pub const NAME_WIDTH: usize = 30;

/// Formats the single output line for a workload's outcome.
pub fn format_line(name: &str, outcome: &Outcome) -> String {
  match outcome {
    Outcome::Skipped { reason } => format!("# SKIP {} ({})", name, reason),
    Outcome::Timed { average } => {
      format!("{:width$} {:.6}", name, average.as_secs_f64(), width = NAME_WIDTH)
    }
  }
}

/// Writes one line per outcome, in the order given.
pub struct Reporter<W: Write> {
  out: W,
}

impl<W: Write> Reporter<W> {
  pub fn new(out: W) -> Self {
    Reporter { out }
  }

  pub fn report(&mut self, name: &str, outcome: &Outcome) -> io::Result<()> {
    writeln!(self.out, "{}", format_line(name, outcome))?;
    // Each line should be visible as soon as its workload is done.
    self.out.flush()
  }

  /// Gives back the underlying writer.
  pub fn into_inner(self) -> W {
    self.out
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::time::Duration;

  #[test]
  fn test_skip_line() {
    let outcome = Outcome::Skipped {
      reason: "no lib".to_string(),
    };
    assert_eq!(format_line("B", &outcome), "# SKIP B (no lib)");
  }

  #[test]
  fn test_timed_line_is_padded_with_six_decimals() {
    let outcome = Outcome::Timed {
      average: Duration::from_micros(10_250),
    };
    let line = format_line("A", &outcome);
    assert_eq!(line, format!("A{} 0.010250", " ".repeat(NAME_WIDTH - 1)));
  }

  #[test]
  fn test_long_names_are_not_truncated() {
    let name = "benchmark_with_a_name_longer_than_thirty_columns";
    let outcome = Outcome::Timed {
      average: Duration::from_secs(2),
    };
    assert_eq!(format_line(name, &outcome), format!("{} 2.000000", name));
  }

  #[test]
  fn test_reporter_keeps_given_order() {
    let mut reporter = Reporter::new(Vec::new());
    reporter
      .report(
        "z",
        &Outcome::Skipped {
          reason: "first".into(),
        },
      )
      .unwrap();
    reporter
      .report(
        "a",
        &Outcome::Skipped {
          reason: "second".into(),
        },
      )
      .unwrap();

    let out = String::from_utf8(reporter.into_inner()).unwrap();
    assert_eq!(out, "# SKIP z (first)\n# SKIP a (second)\n");
  }
}
