//! Interactive quiz session over any line-based input/output.
//!
//! Stdin/stdout in the binary, in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use tracing::{info, instrument};

use crate::config::{Messages, QuizSettings};
use crate::domain::Direction;
use crate::index::VocabularyIndex;
use crate::quiz::{Question, QuizEngine, Scoreboard};
use crate::util::{choice_label, fill_template};

/// What a line typed at the answer prompt means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
  Quit,
  Pick(usize),
  Empty,
  Invalid,
}

/// Interpret one answer line for a question with `options` choices.
pub fn parse_choice(line: &str, options: usize) -> Choice {
  let data = line.trim().to_lowercase();
  if data.is_empty() {
    return Choice::Empty;
  }
  if data == "q" {
    return Choice::Quit;
  }
  let mut chars = data.chars();
  match (chars.next(), chars.next()) {
    (Some(c), None) if c.is_ascii_lowercase() => {
      let pos = (c as u8 - b'a') as usize;
      if pos < options { Choice::Pick(pos) } else { Choice::Invalid }
    }
    _ => Choice::Invalid,
  }
}

pub struct Session<'a, R, W> {
  index: &'a VocabularyIndex,
  messages: &'a Messages,
  input: R,
  output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
  pub fn new(index: &'a VocabularyIndex, messages: &'a Messages, input: R, output: W) -> Self {
    Self { index, messages, input, output }
  }

  fn say(&mut self, tpl: &str, pairs: &[(&str, &str)]) -> io::Result<()> {
    writeln!(self.output, "{}", fill_template(tpl, pairs))
  }

  /// Prompt and read one line; `None` on end of input.
  fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
    write!(self.output, "{prompt}")?;
    self.output.flush()?;
    let mut line = String::new();
    if self.input.read_line(&mut line)? == 0 {
      return Ok(None);
    }
    Ok(Some(line))
  }

  /// Ask every question in order, stopping early on quit or end of input.
  #[instrument(level = "info", skip(self, questions), fields(questions = questions.len()))]
  pub fn run_quiz(&mut self, direction: Direction, questions: &[Question]) -> io::Result<Scoreboard> {
    let mut board = Scoreboard::new(direction);
    let total = questions.len().to_string();
    let (index, m) = (self.index, self.messages);

    for (n, q) in questions.iter().enumerate() {
      self.say(&m.quiz_header, &[("current", &(n + 1).to_string()), ("total", &total)])?;
      self.say(&m.question, &[("question", &q.prompt)])?;
      for (pos, id) in q.choices.iter().enumerate() {
        let text = direction.answer_text(index.item(*id));
        self.say(&m.choice, &[("label", &choice_label(pos).to_string()), ("text", text)])?;
      }

      let Some(pos) = self.read_pick(q.choices.len())? else { break };
      let correct = index.item(q.correct).to_string();
      if board.record(q, q.choices[pos]) {
        self.say(&m.correct, &[])?;
        self.say(&m.correct_detail, &[("answer", &correct)])?;
      } else {
        self.say(&m.wrong, &[])?;
        self.say(&m.wrong_detail, &[("answer", &correct)])?;
      }
    }

    info!(target: "quiz", session = %board.session_id, answered = board.number_of_questions, correct = board.correct_answers, "Quiz finished");
    self.print_results(&board)?;
    Ok(board)
  }

  /// Read until a valid option; `None` when the user quits or input ends.
  fn read_pick(&mut self, options: usize) -> io::Result<Option<usize>> {
    let m = self.messages;
    loop {
      let Some(line) = self.ask(&m.answer_prompt)? else {
        self.say(&m.interrupted, &[])?;
        return Ok(None);
      };
      match parse_choice(&line, options) {
        Choice::Pick(pos) => return Ok(Some(pos)),
        Choice::Quit => return Ok(None),
        Choice::Empty => continue,
        Choice::Invalid => self.say(&m.invalid_input, &[])?,
      }
    }
  }

  pub fn print_results(&mut self, board: &Scoreboard) -> io::Result<()> {
    let m = self.messages;
    let rule = "=".repeat(50);
    writeln!(self.output, "\n{rule}")?;
    self.say(&m.results_title, &[])?;
    writeln!(self.output, "{rule}")?;

    if board.number_of_questions == 0 {
      return self.say(&m.results_none, &[]);
    }
    self.say(&m.results_total, &[("total", &board.number_of_questions.to_string())])?;
    self.say(&m.results_correct, &[("correct", &board.correct_answers.to_string())])?;
    self.say(&m.results_score, &[("score", &format!("{:.1}", board.score_percentage()))])?;
    if !board.wrong_answers.is_empty() {
      self.say(&m.results_wrong, &[("count", &board.wrong_answers.len().to_string())])?;
      for id in &board.wrong_answers {
        let answer = self.index.item(*id).to_string();
        self.say(&m.results_wrong_item, &[("answer", &answer)])?;
      }
    }
    Ok(())
  }

  /// One-shot menu: show table sizes, then run a quiz or print statistics.
  pub fn run_menu(&mut self, settings: &QuizSettings) -> io::Result<Option<Scoreboard>> {
    let m = self.messages;
    let index = self.index;

    if !index.groups().is_empty() {
      writeln!(self.output)?;
      self.say(&m.menu_groups, &[("items", &index.len().to_string())])?;
      for (name, ids) in index.groups() {
        self.say(&m.menu_group_line, &[("group", name), ("count", &ids.len().to_string())])?;
      }
      writeln!(self.output)?;
    }
    let slo = index.table(Direction::SloToIta).len().to_string();
    let ita = index.table(Direction::ItaToSlo).len().to_string();
    self.say(&m.menu_counts, &[("slo", &slo), ("ita", &ita)])?;
    writeln!(self.output)?;
    self.say(&m.menu_options, &[])?;

    let Some(line) = self.ask(&m.menu_prompt)? else { return Ok(None) };
    let direction = match line.trim() {
      "1" => Direction::SloToIta,
      "2" => Direction::ItaToSlo,
      "q" => return Ok(None),
      "s" => {
        let questions = index.questions().count().to_string();
        self.say(&m.stats, &[("items", &slo), ("questions", &questions)])?;
        return Ok(None);
      }
      _ => {
        self.say(&m.menu_invalid, &[])?;
        return Ok(None);
      }
    };

    let mut engine = QuizEngine::new(index, settings.clone());
    let questions = engine.prepare_questions(direction);
    self.run_quiz(direction, &questions).map(Some)
  }
}
