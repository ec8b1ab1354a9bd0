//! Loading quiz configuration (settings + user-facing messages) from TOML.
//!
//! See `AppConfig`, `QuizSettings` and `Messages` for the expected schema.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::Direction;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
  #[serde(default)]
  pub quiz: QuizSettings,
  #[serde(default)]
  pub messages: Messages,
  /// Lesson files to load instead of the built-in units.
  #[serde(default)]
  pub lessons: Vec<PathBuf>,
  /// Restrict the quiz to these unit names (empty = all).
  #[serde(default)]
  pub units: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
  /// Options per question, correct answer included.
  pub number_of_answers: usize,
  /// 0 asks every key of the table once.
  pub max_questions: usize,
  pub max_attempts: usize,
  /// 0 = random seed on every run.
  pub seed: u64,
  pub direction: Direction,
}

impl Default for QuizSettings {
  fn default() -> Self {
    Self {
      number_of_answers: 5,
      max_questions: 0,
      max_attempts: 1000,
      seed: 0,
      direction: Direction::SloToIta,
    }
  }
}

/// Messages printed by the interactive session. Defaults are in Italian,
/// the learner's language. `{placeholders}` are filled at print time.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Messages {
  pub quiz_header: String,
  pub question: String,
  pub choice: String,
  pub answer_prompt: String,
  pub invalid_input: String,
  pub correct: String,
  pub correct_detail: String,
  pub wrong: String,
  pub wrong_detail: String,
  pub interrupted: String,
  pub results_title: String,
  pub results_total: String,
  pub results_correct: String,
  pub results_score: String,
  pub results_wrong: String,
  pub results_wrong_item: String,
  pub results_none: String,
  pub menu_groups: String,
  pub menu_group_line: String,
  pub menu_counts: String,
  pub menu_options: String,
  pub menu_prompt: String,
  pub menu_invalid: String,
  pub stats: String,
}

impl Default for Messages {
  fn default() -> Self {
    Self {
      quiz_header: "\nQuiz #{current} / {total}".into(),
      question: "Cosa significa '{question}' ?".into(),
      choice: "{label}: {text}".into(),
      answer_prompt: "Risposta (q per uscire): ".into(),
      invalid_input: "Input non valido. Per favore scegli un input valido (a, b, c, etc.).".into(),
      correct: "✓ Corretto!".into(),
      correct_detail: "Risposta: {answer}".into(),
      wrong: "✗ Sbagliato".into(),
      wrong_detail: "Risposta corretta: {answer}".into(),
      interrupted: "\nQuiz interrotto dall'utente.".into(),
      results_title: "QUIZ COMPLETATO!".into(),
      results_total: "Numero di quiz: {total}".into(),
      results_correct: "Risposte corrette: {correct}".into(),
      results_score: "Punteggio: {score}%".into(),
      results_wrong: "\nRisposte sbagliate ({count}):".into(),
      results_wrong_item: "  • {answer}".into(),
      results_none: "Nessuna risposta è stata data.".into(),
      menu_groups: "Gruppi di domande (numero totale quiz: {items}):".into(),
      menu_group_line: "'{group}': {count} quiz".into(),
      menu_counts: "slo items: {slo}\nita items: {ita}".into(),
      menu_options: "1 - test da sloveno a italiano\n2 - test da italiano a sloveno".into(),
      menu_prompt: "risposta (q per uscire, s per statistiche): ".into(),
      menu_invalid: "risposta non valida".into(),
      stats: "numero di istanze di Item: {items}\nnumero di domande: {questions}".into(),
    }
  }
}

/// Load `AppConfig` from `path`, or from SLOVAR_CONFIG_PATH when no path is given.
/// On any parsing/IO error, logs it and returns the defaults.
pub fn load_config(path: Option<&Path>) -> AppConfig {
  let path = match path {
    Some(p) => p.to_path_buf(),
    None => match std::env::var("SLOVAR_CONFIG_PATH") {
      Ok(p) => PathBuf::from(p),
      Err(_) => return AppConfig::default(),
    },
  };
  let shown = path.display();
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<AppConfig>(&s) {
      Ok(cfg) => {
        info!(target: "slovar", path = %shown, "Loaded quiz config (TOML)");
        cfg
      }
      Err(e) => {
        error!(target: "slovar", path = %shown, error = %e, "Failed to parse TOML config");
        AppConfig::default()
      }
    },
    Err(e) => {
      error!(target: "slovar", path = %shown, error = %e, "Failed to read TOML config file");
      AppConfig::default()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  #[test]
  fn partial_file_keeps_defaults() {
    let mut f = tempfile::NamedTempFile::new().expect("tempfile");
    write!(
      f,
      r#"
lessons = ["enota1.toml"]

[quiz]
number_of_answers = 4
direction = "ita_to_slo"

[messages]
correct = "Bravo!"
"#
    )
    .expect("write");
    let cfg = load_config(Some(f.path()));
    assert_eq!(cfg.quiz.number_of_answers, 4);
    assert_eq!(cfg.quiz.max_attempts, 1000);
    assert_eq!(cfg.quiz.direction, Direction::ItaToSlo);
    assert_eq!(cfg.messages.correct, "Bravo!");
    assert_eq!(cfg.messages.wrong, "✗ Sbagliato");
    assert_eq!(cfg.lessons, vec![PathBuf::from("enota1.toml")]);
  }

  #[test]
  fn unreadable_file_falls_back_to_defaults() {
    let cfg = load_config(Some(Path::new("/nonexistent/slovar.toml")));
    assert_eq!(cfg.quiz.number_of_answers, 5);
    assert!(cfg.lessons.is_empty());
  }

  #[test]
  fn invalid_toml_falls_back_to_defaults() {
    let mut f = tempfile::NamedTempFile::new().expect("tempfile");
    write!(f, "[quiz\nseed = ").expect("write");
    let cfg = load_config(Some(f.path()));
    assert_eq!(cfg.quiz.seed, 0);
  }
}
