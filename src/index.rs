//! Vocabulary indexer.
//!
//! Flattens unit → rows data into two lookup tables:
//!   - Slovenian text → items
//!   - Italian text → items
//!
//! Rows holding several variants on one side expand into one item per
//! variant. Rows that cannot be indexed are logged and skipped.

use std::collections::BTreeMap;

use tracing::{debug, info, instrument, warn};

use crate::domain::{Direction, Item, ItemId, Row, Text, Unit};
use crate::error::SlovarError;
use crate::util::trunc_for_log;

pub type Table = BTreeMap<String, Vec<ItemId>>;

#[derive(Clone, Debug, Default)]
pub struct VocabularyIndex {
  items: Vec<Item>,
  by_slo: Table,
  by_ita: Table,
  groups: BTreeMap<String, Vec<ItemId>>,
}

/// Outcome of one `extend` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndexReport {
  pub indexed: usize,
  pub skipped_rows: usize,
}

impl VocabularyIndex {
  pub fn new() -> Self { Self::default() }

  pub fn from_units(units: &[Unit]) -> Self {
    let mut index = Self::new();
    index.extend(units);
    index
  }

  /// Index every row of `units`, appending to the existing tables.
  #[instrument(level = "debug", skip_all, fields(units = units.len()))]
  pub fn extend(&mut self, units: &[Unit]) -> IndexReport {
    let mut report = IndexReport::default();
    for unit in units {
      debug!(target: "vocab", unit = %unit.name, rows = unit.rows.len(), "Processing unit");
      for row in &unit.rows {
        match expand_row(row) {
          Ok(pairs) => {
            if pairs.is_empty() {
              report.skipped_rows += 1;
            }
            for (slo, ita) in pairs {
              self.insert(Item::new(ItemId(self.items.len()), &slo, &ita, &unit.name, row.meta.clone()));
              report.indexed += 1;
            }
          }
          Err(e) => {
            warn!(target: "vocab", unit = %unit.name, row = %trunc_for_log(&row.to_string(), 120), error = %e, "Skipping malformed row");
            report.skipped_rows += 1;
          }
        }
      }
    }
    info!(target: "vocab", indexed = report.indexed, skipped = report.skipped_rows, slo_keys = self.by_slo.len(), ita_keys = self.by_ita.len(), "Vocabulary indexed");
    report
  }

  fn insert(&mut self, item: Item) {
    let id = item.id;
    self.by_slo.entry(item.slo.clone()).or_default().push(id);
    self.by_ita.entry(item.ita.clone()).or_default().push(id);
    for g in &item.meta.groups {
      self.groups.entry(g.clone()).or_default().push(id);
    }
    self.items.push(item);
  }

  /// Lookup table whose keys are the question texts for `direction`.
  pub fn table(&self, direction: Direction) -> &Table {
    match direction {
      Direction::SloToIta => &self.by_slo,
      Direction::ItaToSlo => &self.by_ita,
    }
  }

  pub fn entries(&self, direction: Direction, key: &str) -> Option<&[ItemId]> {
    self.table(direction).get(key).map(Vec::as_slice)
  }

  pub fn item(&self, id: ItemId) -> &Item {
    &self.items[id.0]
  }

  pub fn len(&self) -> usize { self.items.len() }
  pub fn is_empty(&self) -> bool { self.items.is_empty() }

  /// Items whose Slovenian text is a question.
  pub fn questions(&self) -> impl Iterator<Item = &Item> {
    self.items.iter().filter(|it| it.is_question)
  }

  pub fn groups(&self) -> &BTreeMap<String, Vec<ItemId>> {
    &self.groups
  }

  pub fn group_members(&self, name: &str) -> &[ItemId] {
    self.groups.get(name).map(Vec::as_slice).unwrap_or(&[])
  }
}

/// Expand a row into (slovensko, italiano) pairs.
///
/// Empty variants and pairs with a blank side are dropped, so placeholder
/// rows yield no pairs at all.
pub fn expand_row(row: &Row) -> Result<Vec<(String, String)>, SlovarError> {
  let pairs: Vec<(String, String)> = match (&row.slo, &row.ita) {
    (Text::Many(_), Text::Many(_)) => return Err(SlovarError::BothVariants(row.to_string())),
    (Text::Many(slos), Text::One(ita)) => slos.iter().map(|s| (s.clone(), ita.clone())).collect(),
    (Text::One(slo), Text::Many(itas)) => itas.iter().map(|i| (slo.clone(), i.clone())).collect(),
    (Text::One(slo), Text::One(ita)) => vec![(slo.clone(), ita.clone())],
  };
  Ok(
    pairs
      .into_iter()
      .filter(|(s, i)| !s.trim().is_empty() && !i.trim().is_empty())
      .collect(),
  )
}
