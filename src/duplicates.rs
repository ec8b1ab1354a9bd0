//! Duplicate check over the Slovenian column of raw lesson rows.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::domain::Unit;
use crate::util::normalize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Occurrence {
  pub unit: String,
  pub position: usize,
  pub row: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Duplicate {
  pub text: String,
  pub occurrences: Vec<Occurrence>,
}

/// Result of `find_duplicates`: duplicates sorted by text, plus the
/// number of distinct first-column texts seen.
#[derive(Debug, Default)]
pub struct DuplicateScan {
  pub unique: usize,
  pub duplicates: Vec<Duplicate>,
}

/// Report every Slovenian text that appears in more than one row.
///
/// Blank placeholder rows are ignored.
#[instrument(level = "debug", skip_all, fields(units = units.len()))]
pub fn find_duplicates(units: &[Unit]) -> DuplicateScan {
  let mut seen: BTreeMap<String, Vec<Occurrence>> = BTreeMap::new();
  for unit in units {
    for (position, row) in unit.rows.iter().enumerate() {
      let text = normalize(&row.slo.to_string());
      if text.is_empty() {
        continue;
      }
      seen.entry(text).or_default().push(Occurrence {
        unit: unit.name.clone(),
        position,
        row: row.to_string(),
      });
    }
  }

  let unique = seen.len();
  let duplicates: Vec<Duplicate> = seen
    .into_iter()
    .filter(|(_, occ)| occ.len() > 1)
    .map(|(text, occurrences)| Duplicate { text, occurrences })
    .collect();
  debug!(target: "vocab", unique, duplicates = duplicates.len(), "Duplicate scan finished");
  DuplicateScan { unique, duplicates }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Row;

  #[test]
  fn reports_repeats_across_units_with_positions() {
    let units = vec![
      Unit::new("1", vec![Row::new("kako si?", "come stai?"), Row::new("zdravo", "ciao")]),
      Unit::new("extra", vec![Row::new("", ""), Row::new("Kako si?", "come stai?"), Row::new("", "")]),
    ];
    let scan = find_duplicates(&units);
    assert_eq!(scan.unique, 2);
    assert_eq!(scan.duplicates.len(), 1);
    let dup = &scan.duplicates[0];
    assert_eq!(dup.text, "kako si?");
    assert_eq!(dup.occurrences[0].unit, "1");
    assert_eq!(dup.occurrences[1].unit, "extra");
    assert_eq!(dup.occurrences[1].position, 1);
  }

  #[test]
  fn variant_lists_compare_as_a_whole() {
    let units = vec![Unit::new(
      "time",
      vec![Row::new(["zdaj", "sedaj"], "ora"), Row::new("zdaj", "adesso"), Row::new(["zdaj", "sedaj"], "adesso")],
    )];
    let scan = find_duplicates(&units);
    assert_eq!(scan.duplicates.len(), 1);
    assert_eq!(scan.duplicates[0].text, "zdaj/sedaj");
  }

  #[test]
  fn clean_data_has_no_duplicates() {
    let scan = find_duplicates(&[Unit::new("1", vec![Row::new("a", "b"), Row::new("c", "d")])]);
    assert!(scan.duplicates.is_empty());
    assert_eq!(scan.unique, 2);
  }
}
