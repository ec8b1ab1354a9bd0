//! Domain models: lesson rows, vocabulary items and their descriptive metadata.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Grammatical classification of a vocabulary item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordType {
  Nop,
  Verb,
  Sentence,
  Adverb,
  Pronoun,
  Conjunction,
  Number,
  Noun,
  Adjective,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceCategory {
  Nop,
  Interrogative,
  Sentence,
}

/// Difficulty level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
  Nop,
  Easy,
  Medium,
  Difficult,
}

/// Grammatical gender (moški / ženski / srednji spol).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
  Neutral,
  Male,
  Female,
}

/// Quiz direction: which language the question is asked in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
  /// Slovenian question, Italian answers.
  #[default]
  SloToIta,
  /// Italian question, Slovenian answers.
  ItaToSlo,
}

impl Direction {
  /// Text the question is keyed by.
  pub fn question_text<'a>(&self, item: &'a Item) -> &'a str {
    match self {
      Direction::SloToIta => &item.slo,
      Direction::ItaToSlo => &item.ita,
    }
  }

  /// Text shown for an item among the multiple-choice options.
  pub fn answer_text<'a>(&self, item: &'a Item) -> &'a str {
    match self {
      Direction::SloToIta => &item.ita,
      Direction::ItaToSlo => &item.slo,
    }
  }

  pub fn answer_has_multiple_words(&self, item: &Item) -> bool {
    match self {
      Direction::SloToIta => item.ita_multiple_words(),
      Direction::ItaToSlo => item.slo_multiple_words(),
    }
  }
}

/// Descriptive data attached to a row. None of it affects indexing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
  #[serde(default)] pub word_type: Option<WordType>,
  #[serde(default)] pub sentence_category: Option<SentenceCategory>,
  #[serde(default)] pub level: Option<Level>,
  #[serde(default)] pub gender: Option<Gender>,
  #[serde(default)] pub page: Option<u32>,
  #[serde(default)] pub weblink: Option<String>,
  #[serde(default)] pub audio: Option<String>,
  #[serde(default)] pub note: Option<String>,
  #[serde(default)] pub pron: Option<String>,
  #[serde(default)] pub groups: Vec<String>,
}

/// A single metadata element, as written after the two texts of a lesson row.
#[derive(Clone, Debug, PartialEq)]
pub enum Tag {
  Kind(WordType),
  Level(Level),
  Gender(Gender),
  Page(u32),
  Note(String),
  Pron(String),
  Group(String),
}

impl Metadata {
  pub fn apply(&mut self, tag: Tag) {
    match tag {
      Tag::Kind(t) => self.word_type = Some(t),
      Tag::Level(l) => self.level = Some(l),
      Tag::Gender(g) => self.gender = Some(g),
      Tag::Page(p) => self.page = Some(p),
      Tag::Note(text) => self.note = Some(text),
      Tag::Pron(text) => self.pron = Some(text),
      Tag::Group(id) => {
        if !self.groups.contains(&id) {
          self.groups.push(id);
        }
      }
    }
  }
}

/// One side of a row: a single text or several translation variants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Text {
  One(String),
  Many(Vec<String>),
}

impl From<&str> for Text {
  fn from(s: &str) -> Self { Text::One(s.to_string()) }
}

impl<const N: usize> From<[&str; N]> for Text {
  fn from(variants: [&str; N]) -> Self {
    Text::Many(variants.iter().map(|s| s.to_string()).collect())
  }
}

impl fmt::Display for Text {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Text::One(s) => write!(f, "{s}"),
      Text::Many(v) => write!(f, "{}", v.join("/")),
    }
  }
}

/// Raw lesson row: Slovenian text, Italian text, metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Row {
  pub slo: Text,
  pub ita: Text,
  #[serde(flatten)]
  pub meta: Metadata,
}

impl Row {
  pub fn new(slo: impl Into<Text>, ita: impl Into<Text>) -> Self {
    Self { slo: slo.into(), ita: ita.into(), meta: Metadata::default() }
  }

  pub fn with(mut self, tag: Tag) -> Self {
    self.meta.apply(tag);
    self
  }
}

impl fmt::Display for Row {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "('{}', '{}')", self.slo, self.ita)
  }
}

/// Lesson unit ("enota"): a named group of rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Unit {
  pub name: String,
  #[serde(default)]
  pub rows: Vec<Row>,
}

impl Unit {
  pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
    Self { name: name.into(), rows }
  }
}

/// Position of an item inside its `VocabularyIndex`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ItemId(pub usize);

/// Indexed vocabulary entry with its derived features.
#[derive(Clone, Debug, Serialize)]
pub struct Item {
  pub id: ItemId,
  pub slo: String,
  pub ita: String,
  pub unit: String,
  pub meta: Metadata,

  pub slo_num_words: usize,
  pub ita_num_words: usize,
  pub is_question: bool,
  pub ends_with_ite: bool,
}

impl Item {
  /// Build an item, normalizing both texts and computing features.
  pub fn new(id: ItemId, slo: &str, ita: &str, unit: &str, meta: Metadata) -> Self {
    let slo = slo.trim().to_lowercase();
    let ita = ita.trim().to_lowercase();
    let is_question = slo.ends_with('?');
    let mut meta = meta;
    let mut seen = HashSet::new();
    meta.groups.retain(|g| seen.insert(g.clone()));
    if is_question && meta.sentence_category.is_none() {
      meta.sentence_category = Some(SentenceCategory::Interrogative);
    }
    Self {
      id,
      slo_num_words: slo.split_whitespace().count(),
      ita_num_words: ita.split_whitespace().count(),
      ends_with_ite: slo.ends_with("ite"),
      is_question,
      slo,
      ita,
      unit: unit.to_string(),
      meta,
    }
  }

  pub fn slo_multiple_words(&self) -> bool { self.slo_num_words > 1 }
  pub fn ita_multiple_words(&self) -> bool { self.ita_num_words > 1 }
}

impl fmt::Display for Item {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "slovensko='{}' italiano='{}'", self.slo, self.ita)?;
    let m = &self.meta;
    if let Some(p) = m.page { write!(f, " bookpage={p}")?; }
    if let Some(t) = m.word_type { write!(f, " wordtype={t:?}")?; }
    if let Some(c) = m.sentence_category { write!(f, " sentence_category={c:?}")?; }
    if let Some(l) = m.level { write!(f, " level={l:?}")?; }
    if let Some(g) = m.gender { write!(f, " gender={g:?}")?; }
    if let Some(w) = &m.weblink { write!(f, " weblink=url={w}")?; }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn item_normalizes_and_derives_features() {
    let it = Item::new(ItemId(0), "  Kako si? ", "Come stai?", "1", Metadata::default());
    assert_eq!(it.slo, "kako si?");
    assert_eq!(it.ita, "come stai?");
    assert!(it.is_question);
    assert!(it.slo_multiple_words());
    assert_eq!(it.meta.sentence_category, Some(SentenceCategory::Interrogative));
  }

  #[test]
  fn explicit_sentence_category_is_kept() {
    let meta = Metadata { sentence_category: Some(SentenceCategory::Sentence), ..Metadata::default() };
    let it = Item::new(ItemId(0), "a veste?", "lo sapete?", "1", meta);
    assert!(it.is_question);
    assert_eq!(it.meta.sentence_category, Some(SentenceCategory::Sentence));
  }

  #[test]
  fn plural_imperative_is_detected() {
    let it = Item::new(ItemId(3), "Napišite", "scrivete", "1", Metadata::default());
    assert!(it.ends_with_ite);
    assert!(!it.slo_multiple_words());
    assert!(!it.is_question);
  }

  #[test]
  fn display_lists_only_set_metadata() {
    let row = Row::new("in", "e")
      .with(Tag::Kind(WordType::Conjunction))
      .with(Tag::Page(7));
    let it = Item::new(ItemId(1), "in", "e", "1", row.meta);
    assert_eq!(it.to_string(), "slovensko='in' italiano='e' bookpage=7 wordtype=Conjunction");
  }

  #[test]
  fn direction_picks_sides() {
    let it = Item::new(ItemId(0), "dober dan", "buongiorno", "1", Metadata::default());
    assert_eq!(Direction::SloToIta.question_text(&it), "dober dan");
    assert_eq!(Direction::SloToIta.answer_text(&it), "buongiorno");
    assert!(!Direction::SloToIta.answer_has_multiple_words(&it));
    assert!(Direction::ItaToSlo.answer_has_multiple_words(&it));
  }

  #[test]
  fn group_tags_are_not_duplicated() {
    let row = Row::new("kaj", "cosa")
      .with(Tag::Group("vprasanja".into()))
      .with(Tag::Group("vprasanja".into()));
    assert_eq!(row.meta.groups, vec!["vprasanja".to_string()]);
  }

  #[test]
  fn deserialized_group_lists_are_deduplicated() {
    let meta = Metadata { groups: vec!["kako".into(), "kako".into(), "kaj".into()], ..Metadata::default() };
    let it = Item::new(ItemId(0), "kako si?", "come stai?", "1", meta);
    assert_eq!(it.meta.groups, vec!["kako".to_string(), "kaj".to_string()]);
  }
}
