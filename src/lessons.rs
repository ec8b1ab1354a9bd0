//! Lesson sources: TOML lesson files and the unit filter.
//!
//! A lesson file holds one or more units:
//!
//! ```toml
//! [[unit]]
//! name = "1"
//! rows = [
//!   { slo = "dober dan", ita = "buongiorno", page = 7 },
//!   { slo = "in", ita = "e", word_type = "conjunction", level = "easy" },
//!   { slo = "pozdravljeni", ita = ["piacere", "io vi saluto"] },
//!   { slo = "kako si?", ita = "come stai?", groups = ["kako"] },
//! ]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::domain::Unit;
use crate::error::SlovarError;
use crate::seeds::seed_units;

#[derive(Debug, Deserialize)]
struct LessonFile {
  #[serde(default, rename = "unit")]
  units: Vec<Unit>,
}

/// Keys a lesson row may carry; anything else is ignored by the parser.
const ROW_KEYS: &[&str] = &[
  "slo", "ita", "word_type", "sentence_category", "level", "gender",
  "page", "weblink", "audio", "note", "pron", "groups",
];

/// Parse lesson units from TOML text. `path` is only used in errors and logs.
pub fn parse_lesson(text: &str, path: &Path) -> Result<Vec<Unit>, SlovarError> {
  let file: LessonFile = toml::from_str(text).map_err(|source| SlovarError::Parse {
    path: path.to_path_buf(),
    source,
  })?;
  for (unit, position, key) in unknown_row_keys(text) {
    warn!(target: "slovar", path = %path.display(), %unit, position, %key, "Unknown row key ignored");
  }
  Ok(file.units)
}

/// Row keys outside `ROW_KEYS`, as (unit name, row position, key).
pub fn unknown_row_keys(text: &str) -> Vec<(String, usize, String)> {
  let mut found = Vec::new();
  let Ok(table) = text.parse::<toml::Table>() else { return found };
  let Some(units) = table.get("unit").and_then(toml::Value::as_array) else { return found };
  for unit in units {
    let name = unit.get("name").and_then(toml::Value::as_str).unwrap_or("?");
    let Some(rows) = unit.get("rows").and_then(toml::Value::as_array) else { continue };
    for (position, row) in rows.iter().enumerate() {
      let Some(row) = row.as_table() else { continue };
      for key in row.keys().filter(|k| !ROW_KEYS.contains(&k.as_str())) {
        found.push((name.to_string(), position, key.clone()));
      }
    }
  }
  found
}

#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn load_lesson_file(path: &Path) -> Result<Vec<Unit>, SlovarError> {
  let text = std::fs::read_to_string(path).map_err(|source| SlovarError::Read {
    path: path.to_path_buf(),
    source,
  })?;
  let units = parse_lesson(&text, path)?;
  let rows: usize = units.iter().map(|u| u.rows.len()).sum();
  info!(target: "slovar", path = %path.display(), units = units.len(), rows, "Loaded lesson file");
  Ok(units)
}

/// Units from every file in order, or the built-in units when `paths` is empty.
pub fn load_units(paths: &[PathBuf]) -> Result<Vec<Unit>, SlovarError> {
  if paths.is_empty() {
    info!(target: "slovar", "No lesson files given; using built-in units");
    return Ok(seed_units());
  }
  let mut units = Vec::new();
  for p in paths {
    units.extend(load_lesson_file(p)?);
  }
  Ok(units)
}

/// Keep only units whose name is in `names`; an empty filter keeps all.
pub fn filter_units(units: Vec<Unit>, names: &[String]) -> Vec<Unit> {
  if names.is_empty() {
    return units;
  }
  let kept: Vec<Unit> = units.into_iter().filter(|u| names.contains(&u.name)).collect();
  if kept.is_empty() {
    warn!(target: "slovar", ?names, "Unit filter matched nothing");
  }
  kept
}
