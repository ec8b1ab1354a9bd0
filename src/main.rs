//! Slovar · Slovenian/Italian vocabulary quiz
//!
//! - Lesson units from TOML files (or the built-in units)
//! - Multiple-choice quiz in both directions
//! - Statistics, duplicate check and lookup helpers
//!
//! Important env variables:
//!   SLOVAR_CONFIG_PATH : path to TOML config (quiz settings, messages, lessons)
//!   LOG_LEVEL          : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT         : "pretty" (default) or "json"

mod config;
mod domain;
mod duplicates;
mod error;
mod index;
mod lessons;
mod quiz;
mod report;
mod seeds;
mod session;
mod telemetry;
mod util;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, instrument};

use crate::config::{load_config, AppConfig};
use crate::domain::{Direction, Unit};
use crate::duplicates::find_duplicates;
use crate::error::SlovarError;
use crate::index::VocabularyIndex;
use crate::lessons::{filter_units, load_units};
use crate::report::{summary, to_out, DuplicatesOut, LookupOut};
use crate::session::Session;

#[derive(Parser)]
#[command(name = "slovar")]
#[command(about = "Slovenian/Italian vocabulary quiz")]
#[command(version)]
struct Cli {
  /// TOML config file (defaults to $SLOVAR_CONFIG_PATH)
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  /// Lesson file to load; repeatable. Built-in units are used when omitted
  #[arg(long = "lesson", global = true)]
  lessons: Vec<PathBuf>,

  /// Only quiz on this unit; repeatable
  #[arg(long = "unit", global = true)]
  units: Vec<String>,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
  /// Slovenian question, Italian answers
  #[value(name = "slo2ita")]
  SloToIta,
  /// Italian question, Slovenian answers
  #[value(name = "ita2slo")]
  ItaToSlo,
}

impl From<DirectionArg> for Direction {
  fn from(d: DirectionArg) -> Self {
    match d {
      DirectionArg::SloToIta => Direction::SloToIta,
      DirectionArg::ItaToSlo => Direction::ItaToSlo,
    }
  }
}

#[derive(Subcommand)]
enum Commands {
  /// Show the vocabulary summary and choose a quiz interactively (default)
  Menu,

  /// Run a quiz directly
  Quiz {
    #[arg(long, value_enum)]
    direction: Option<DirectionArg>,

    /// Number of questions (0 = every entry once)
    #[arg(long)]
    max_questions: Option<usize>,

    /// Options per question, correct answer included
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=util::MAX_CHOICES as i64))]
    answers: Option<u8>,

    /// Random seed (0 = different every run)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the results as JSON after the quiz
    #[arg(long)]
    json: bool,
  },

  /// Print table sizes, question count and question groups
  Stats {
    #[arg(long)]
    json: bool,
  },

  /// Report Slovenian texts that appear in more than one row
  Duplicates {
    #[arg(long)]
    json: bool,
  },

  /// Show every entry indexed under a text
  Lookup {
    text: String,

    #[arg(long, value_enum, default_value = "slo2ita")]
    direction: DirectionArg,

    #[arg(long)]
    json: bool,
  },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();
  let cli = Cli::parse();

  let cfg = load_config(cli.config.as_deref());
  let lesson_paths = if cli.lessons.is_empty() { cfg.lessons.clone() } else { cli.lessons };
  let unit_names = if cli.units.is_empty() { cfg.units.clone() } else { cli.units };
  let units = filter_units(load_units(&lesson_paths)?, &unit_names);
  info!(target: "slovar", units = units.len(), "Lesson units ready");

  match cli.command.unwrap_or(Commands::Menu) {
    Commands::Duplicates { json } => print_duplicates(&units, json)?,
    Commands::Menu => {
      let index = build_index(&units)?;
      let stdin = io::stdin();
      Session::new(&index, &cfg.messages, stdin.lock(), io::stdout()).run_menu(&cfg.quiz)?;
    }
    Commands::Quiz { direction, max_questions, answers, seed, json } => {
      let index = build_index(&units)?;
      let mut settings = cfg.quiz.clone();
      if let Some(d) = direction { settings.direction = d.into(); }
      if let Some(n) = max_questions { settings.max_questions = n; }
      if let Some(n) = answers { settings.number_of_answers = usize::from(n); }
      if let Some(s) = seed { settings.seed = s; }
      run_quiz(&index, &cfg, settings, json)?;
    }
    Commands::Stats { json } => {
      let index = build_index(&units)?;
      let s = summary(&index);
      if json {
        println!("{}", serde_json::to_string_pretty(&s)?);
      } else {
        println!("items: {}", s.items);
        println!("slo items: {}", s.slo_entries);
        println!("ita items: {}", s.ita_entries);
        println!("domande: {}", s.questions);
        for g in &s.groups {
          println!("'{}': {} quiz", g.name, g.count);
        }
      }
    }
    Commands::Lookup { text, direction, json } => {
      let index = build_index(&units)?;
      let direction: Direction = direction.into();
      let key = util::normalize(&text);
      let entries: Vec<_> = index
        .entries(direction, &key)
        .unwrap_or(&[])
        .iter()
        .map(|id| index.item(*id))
        .collect();
      if json {
        let out = LookupOut { direction, key, entries: entries.iter().map(|it| to_out(it)).collect() };
        println!("{}", serde_json::to_string_pretty(&out)?);
      } else if entries.is_empty() {
        println!("'{key}': nessun risultato");
      } else {
        for it in entries {
          println!("{it}");
        }
      }
    }
  }
  Ok(())
}

fn build_index(units: &[Unit]) -> Result<VocabularyIndex, SlovarError> {
  let index = VocabularyIndex::from_units(units);
  if index.is_empty() {
    return Err(SlovarError::EmptyVocabulary);
  }
  Ok(index)
}

#[instrument(level = "info", skip_all, fields(direction = ?settings.direction))]
fn run_quiz(
  index: &VocabularyIndex,
  cfg: &AppConfig,
  settings: config::QuizSettings,
  json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
  let direction = settings.direction;
  let mut engine = quiz::QuizEngine::new(index, settings);
  let questions = engine.prepare_questions(direction);

  let stdin = io::stdin();
  let board = Session::new(index, &cfg.messages, stdin.lock(), io::stdout()).run_quiz(direction, &questions)?;
  if json {
    println!("{}", serde_json::to_string_pretty(&board.results(index))?);
  }
  Ok(())
}

fn print_duplicates(units: &[Unit], json: bool) -> Result<(), Box<dyn std::error::Error>> {
  let scan = find_duplicates(units);
  if json {
    let out = DuplicatesOut { unique: scan.unique, duplicates: scan.duplicates };
    println!("{}", serde_json::to_string_pretty(&out)?);
    return Ok(());
  }

  if scan.duplicates.is_empty() {
    println!("✅ NESSUN DOPPIONE trovato nella prima colonna!");
    println!("   Totale elementi unici: {}", scan.unique);
    return Ok(());
  }
  println!("🔍 TROVATI {} DOPPIONI nella prima colonna:", scan.duplicates.len());
  println!("{}", "=".repeat(50));
  for dup in &scan.duplicates {
    println!("❌ '{}' appare più volte", dup.text);
    println!("   Occorrenze ({}):", dup.occurrences.len());
    for occ in &dup.occurrences {
      println!("     - {}, posizione {}: {}", occ.unit, occ.position, occ.row);
    }
    println!();
  }
  Ok(())
}
