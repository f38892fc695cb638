use crate::registry::Registry;
use crate::registry::Workload;
use regex::Regex;

/// Picks the workloads whose name contains a match for `pattern`,
/// ordered by name. An empty pattern selects everything.
pub fn select<'r>(registry: &'r Registry, pattern: &Regex) -> Vec<&'r Workload> {
  let mut selected: Vec<&Workload> = registry
    .all()
    .iter()
    .filter(|w| pattern.is_match(w.name()))
    .collect();

  selected.sort_by(|a, b| a.name().cmp(b.name()));

  tracing::debug!(
    pattern = %pattern,
    selected = selected.len(),
    registered = registry.len(),
    "Selected workloads"
  );
  selected
}

#[cfg(test)]
mod tests {
  use super::*;

  fn registry(names: &[&str]) -> Registry {
    let mut registry = Registry::new();
    for name in names {
      registry.register(Workload::new(*name, || Ok(()))).unwrap();
    }
    registry
  }

  fn names<'a>(selected: &[&'a Workload]) -> Vec<&'a str> {
    selected.iter().map(|&w| w.name()).collect()
  }

  #[test]
  fn test_empty_pattern_selects_all_sorted() {
    let registry = registry(&["zeta", "alpha", "mid"]);
    let selected = select(&registry, &Regex::new("").unwrap());
    assert_eq!(names(&selected), ["alpha", "mid", "zeta"]);
  }

  #[test]
  fn test_pattern_is_a_search_not_a_full_match() {
    let registry = registry(&["benchmark_csv", "benchmark_xlsx", "benchmark_xlsx_rows"]);
    let selected = select(&registry, &Regex::new("xlsx").unwrap());
    assert_eq!(names(&selected), ["benchmark_xlsx", "benchmark_xlsx_rows"]);

    let anchored = select(&registry, &Regex::new("rows$").unwrap());
    assert_eq!(names(&anchored), ["benchmark_xlsx_rows"]);
  }

  #[test]
  fn test_no_match_selects_nothing() {
    let registry = registry(&["X", "Y", "Z"]);
    assert!(select(&registry, &Regex::new("nope").unwrap()).is_empty());
  }

  #[test]
  fn test_selection_is_independent_of_registration_order() {
    let forward = registry(&["a", "b", "c"]);
    let backward = registry(&["c", "b", "a"]);
    let pattern = Regex::new("[ac]").unwrap();

    assert_eq!(
      names(&select(&forward, &pattern)),
      names(&select(&backward, &pattern))
    );
  }
}
