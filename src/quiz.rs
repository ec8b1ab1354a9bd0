//! Quiz engine: decoy selection, question preparation and scoring.
//!
//! Decoys are drawn at random from the other keys of the lookup table.
//! For the first part of the attempt budget a candidate must look like the
//! correct answer (question vs. statement, single word vs. phrase, plural
//! imperative); later attempts accept anything that is not a duplicate.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::config::QuizSettings;
use crate::domain::{Direction, ItemId};
use crate::index::VocabularyIndex;
use crate::report::{to_out, QuizResults};
use crate::util::MAX_CHOICES;

/// One prepared multiple-choice question.
#[derive(Clone, Debug)]
pub struct Question {
  /// Key text the user is asked about.
  pub prompt: String,
  pub correct: ItemId,
  /// Shuffled options, always containing `correct`.
  pub choices: Vec<ItemId>,
}

/// Pick `number_of_answers` items: the correct one first, then decoys.
///
/// Returns fewer items when the attempt budget runs out.
#[instrument(level = "debug", skip(index, rng))]
pub fn find_random_answers<R: Rng + ?Sized>(
  index: &VocabularyIndex,
  direction: Direction,
  question: &str,
  correct: ItemId,
  number_of_answers: usize,
  max_attempts: usize,
  rng: &mut R,
) -> Vec<ItemId> {
  let table = index.table(direction);
  let current = index.item(correct);
  let mut answers = vec![correct];

  let available_keys: Vec<&str> = table
    .keys()
    .map(String::as_str)
    .filter(|k| *k != question)
    .collect();

  let mut attempts = 0usize;
  while answers.len() < number_of_answers && attempts < max_attempts {
    attempts += 1;
    let strict = attempts * 5 < max_attempts;

    let candidate_id = if !current.meta.groups.is_empty() && attempts * 2 < max_attempts {
      let Some(group) = current.meta.groups.choose(rng) else { continue };
      let Some(&id) = index.group_members(group).choose(rng) else { continue };
      if id == correct {
        continue;
      }
      id
    } else {
      let Some(key) = available_keys.choose(rng) else { continue };
      let Some(&id) = table.get(*key).and_then(|ids| ids.choose(rng)) else { continue };
      let candidate = index.item(id);

      if current.is_question && !candidate.is_question && strict {
        continue;
      }
      if current.ends_with_ite && !candidate.ends_with_ite && attempts * 3 < max_attempts {
        continue;
      }
      if !current.is_question {
        if candidate.is_question && strict {
          continue;
        }
        if direction.answer_has_multiple_words(candidate) != direction.answer_has_multiple_words(current) && strict {
          continue;
        }
      }
      id
    };

    if answers.contains(&candidate_id) {
      continue;
    }
    let text = direction.answer_text(index.item(candidate_id));
    if answers.iter().any(|a| direction.answer_text(index.item(*a)) == text) {
      continue;
    }
    answers.push(candidate_id);
  }

  if answers.len() < number_of_answers {
    warn!(target: "quiz", found = answers.len(), requested = number_of_answers, %question, "Could not find enough answers");
  } else {
    debug!(target: "quiz", attempts, %question, "Answers selected");
  }
  answers
}

/// Question preparation over one index, with its own RNG.
pub struct QuizEngine<'a> {
  index: &'a VocabularyIndex,
  settings: QuizSettings,
  rng: StdRng,
}

impl<'a> QuizEngine<'a> {
  /// Seed 0 draws from OS entropy; any other seed is reproducible.
  /// `number_of_answers` is clamped to `1..=MAX_CHOICES`.
  pub fn new(index: &'a VocabularyIndex, mut settings: QuizSettings) -> Self {
    let answers = settings.number_of_answers.clamp(1, MAX_CHOICES);
    if answers != settings.number_of_answers {
      warn!(target: "quiz", requested = settings.number_of_answers, used = answers, "number_of_answers out of range; clamped");
      settings.number_of_answers = answers;
    }
    let rng = if settings.seed == 0 {
      StdRng::from_entropy()
    } else {
      StdRng::seed_from_u64(settings.seed)
    };
    Self { index, settings, rng }
  }

  /// Draw keys without replacement and build a question for each.
  #[instrument(level = "info", skip(self), fields(max_questions = self.settings.max_questions, answers = self.settings.number_of_answers))]
  pub fn prepare_questions(&mut self, direction: Direction) -> Vec<Question> {
    let index = self.index;
    let table = index.table(direction);
    let max_questions = match self.settings.max_questions {
      0 => table.len(),
      n => n,
    };

    let mut keys: Vec<&String> = table.keys().collect();
    let mut questions = Vec::new();
    while !keys.is_empty() && questions.len() < max_questions {
      let pos = self.rng.gen_range(0..keys.len());
      let key = keys.swap_remove(pos);
      let Some(&correct) = table[key].choose(&mut self.rng) else { continue };

      let mut choices = find_random_answers(
        index,
        direction,
        key,
        correct,
        self.settings.number_of_answers,
        self.settings.max_attempts,
        &mut self.rng,
      );
      choices.shuffle(&mut self.rng);
      let prompt = direction.question_text(index.item(correct)).to_string();
      questions.push(Question { prompt, correct, choices });
    }
    info!(target: "quiz", ?direction, prepared = questions.len(), "Questions prepared");
    questions
  }
}

/// Running tally of a quiz session.
#[derive(Clone, Debug)]
pub struct Scoreboard {
  pub session_id: Uuid,
  pub direction: Direction,
  pub number_of_questions: usize,
  pub correct_answers: usize,
  pub wrong_answers: Vec<ItemId>,
}

impl Scoreboard {
  pub fn new(direction: Direction) -> Self {
    Self {
      session_id: Uuid::new_v4(),
      direction,
      number_of_questions: 0,
      correct_answers: 0,
      wrong_answers: Vec::new(),
    }
  }

  /// Record the user's pick; returns whether it was correct.
  pub fn record(&mut self, question: &Question, picked: ItemId) -> bool {
    self.number_of_questions += 1;
    let ok = picked == question.correct;
    if ok {
      self.correct_answers += 1;
    } else {
      self.wrong_answers.push(question.correct);
    }
    debug!(target: "quiz", session = %self.session_id, prompt = %question.prompt, correct = ok, "Answer recorded");
    ok
  }

  pub fn score_percentage(&self) -> f64 {
    if self.number_of_questions == 0 {
      0.0
    } else {
      self.correct_answers as f64 / self.number_of_questions as f64 * 100.0
    }
  }

  pub fn results(&self, index: &VocabularyIndex) -> QuizResults {
    QuizResults {
      session_id: self.session_id.to_string(),
      direction: self.direction,
      total_questions: self.number_of_questions,
      correct_answers: self.correct_answers,
      score_percentage: self.score_percentage(),
      wrong_answers: self.wrong_answers.iter().map(|id| to_out(index.item(*id))).collect(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{Row, Tag, Unit};
  use std::collections::HashSet;

  fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
  }

  fn settings(number_of_answers: usize, max_questions: usize) -> QuizSettings {
    QuizSettings { number_of_answers, max_questions, max_attempts: 1000, seed: 42, ..QuizSettings::default() }
  }

  fn mixed_index() -> VocabularyIndex {
    VocabularyIndex::from_units(&[Unit::new(
      "mixed",
      vec![
        Row::new("kako si?", "come stai?"),
        Row::new("od kod si?", "di dove sei?"),
        Row::new("kam greš?", "dove vai?"),
        Row::new("kakšna je kava?", "com'è il caffè?"),
        Row::new("kako se reče?", "come si dice?"),
        Row::new("kako se piše?", "come si scrive?"),
        Row::new("beseda", "parola"),
        Row::new("slovar", "dizionario"),
        Row::new("svet", "mondo"),
        Row::new("kriza", "crisi"),
        Row::new("plača", "stipendio"),
        Row::new("dnevne novice", "notizie del giorno"),
        Row::new("lep dan", "buona giornata"),
        Row::new("dober večer", "buonasera"),
      ],
    )])
  }

  fn id_of(index: &VocabularyIndex, slo: &str) -> ItemId {
    index.entries(Direction::SloToIta, slo).expect("key")[0]
  }

  #[test]
  fn answers_start_with_correct_and_have_no_duplicate_texts() {
    let index = mixed_index();
    let correct = id_of(&index, "beseda");
    let answers = find_random_answers(&index, Direction::SloToIta, "beseda", correct, 5, 1000, &mut rng());
    assert_eq!(answers.len(), 5);
    assert_eq!(answers[0], correct);
    let texts: HashSet<&str> = answers.iter().map(|a| index.item(*a).ita.as_str()).collect();
    assert_eq!(texts.len(), 5);
  }

  #[test]
  fn question_decoys_are_questions() {
    let index = mixed_index();
    let correct = id_of(&index, "kako si?");
    let answers = find_random_answers(&index, Direction::SloToIta, "kako si?", correct, 4, 1000, &mut rng());
    assert_eq!(answers.len(), 4);
    assert!(answers.iter().all(|a| index.item(*a).is_question));
  }

  #[test]
  fn single_word_decoys_match_word_count() {
    let index = mixed_index();
    let correct = id_of(&index, "svet");
    let answers = find_random_answers(&index, Direction::SloToIta, "svet", correct, 4, 1000, &mut rng());
    assert_eq!(answers.len(), 4);
    for a in &answers {
      let it = index.item(*a);
      assert!(!it.is_question);
      assert!(!it.ita_multiple_words(), "unexpected phrase decoy {it}");
    }
  }

  #[test]
  fn group_members_are_preferred() {
    let mut rows: Vec<Row> = ["ena", "dve", "tri", "štiri", "pet"]
      .iter()
      .zip(["uno", "due", "tre", "quattro", "cinque"])
      .map(|(s, i)| Row::new(*s, i).with(Tag::Group("stevila".into())))
      .collect();
    rows.extend(["pes", "mačka", "hiša", "miza", "stol", "okno"].iter().zip(["cane", "gatto", "casa", "tavolo", "sedia", "finestra"]).map(|(s, i)| Row::new(*s, i)));
    let index = VocabularyIndex::from_units(&[Unit::new("numbers", rows)]);
    let correct = id_of(&index, "tri");
    let answers = find_random_answers(&index, Direction::SloToIta, "tri", correct, 5, 1000, &mut rng());
    assert_eq!(answers.len(), 5);
    assert!(answers.iter().all(|a| index.item(*a).meta.groups.contains(&"stevila".to_string())));
  }

  #[test]
  fn small_pool_returns_what_exists() {
    let index = VocabularyIndex::from_units(&[Unit::new("tiny", vec![Row::new("da", "sì"), Row::new("ne", "no")])]);
    let correct = id_of(&index, "da");
    let answers = find_random_answers(&index, Direction::SloToIta, "da", correct, 5, 100, &mut rng());
    assert_eq!(answers.len(), 2);
  }

  #[test]
  fn single_entry_pool_never_panics() {
    let index = VocabularyIndex::from_units(&[Unit::new("one", vec![Row::new("da", "sì")])]);
    let correct = id_of(&index, "da");
    let answers = find_random_answers(&index, Direction::ItaToSlo, "sì", correct, 5, 50, &mut rng());
    assert_eq!(answers, vec![correct]);
  }

  #[test]
  fn reverse_direction_dedups_on_slovenian() {
    let index = VocabularyIndex::from_units(&[Unit::new(
      "ciao",
      vec![Row::new("živjo", "ciao"), Row::new("adijo", "ciao"), Row::new("živjo", "salve"), Row::new("hvala", "grazie")],
    )]);
    let correct = index.entries(Direction::ItaToSlo, "grazie").expect("key")[0];
    let answers = find_random_answers(&index, Direction::ItaToSlo, "grazie", correct, 4, 1000, &mut rng());
    let texts: HashSet<&str> = answers.iter().map(|a| index.item(*a).slo.as_str()).collect();
    assert_eq!(texts.len(), answers.len());
    assert_eq!(answers.len(), 3);
  }

  #[test]
  fn prepare_covers_every_key_once() {
    let index = mixed_index();
    let mut engine = QuizEngine::new(&index, settings(4, 0));
    let questions = engine.prepare_questions(Direction::SloToIta);
    assert_eq!(questions.len(), index.table(Direction::SloToIta).len());
    let prompts: HashSet<&str> = questions.iter().map(|q| q.prompt.as_str()).collect();
    assert_eq!(prompts.len(), questions.len());
    for q in &questions {
      assert!(q.choices.contains(&q.correct));
      assert_eq!(index.item(q.correct).slo, q.prompt);
    }
  }

  #[test]
  fn prepare_respects_max_questions_and_seed() {
    let index = mixed_index();
    let a: Vec<String> = QuizEngine::new(&index, settings(3, 5)).prepare_questions(Direction::ItaToSlo).into_iter().map(|q| q.prompt).collect();
    let b: Vec<String> = QuizEngine::new(&index, settings(3, 5)).prepare_questions(Direction::ItaToSlo).into_iter().map(|q| q.prompt).collect();
    assert_eq!(a.len(), 5);
    assert_eq!(a, b);
  }

  #[test]
  fn plural_imperatives_get_plural_imperative_decoys() {
    let index = VocabularyIndex::from_units(&crate::seeds::seed_units());
    let correct = id_of(&index, "napišite");
    let answers = find_random_answers(&index, Direction::SloToIta, "napišite", correct, 5, 3000, &mut rng());
    assert_eq!(answers.len(), 5);
    for a in &answers {
      let it = index.item(*a);
      assert!(it.ends_with_ite, "unexpected decoy {it}");
    }
  }

  #[test]
  fn small_group_falls_back_to_whole_table() {
    let mut rows = vec![
      Row::new("kdo?", "chi?").with(Tag::Group("kdo".into())),
      Row::new("kdo je to?", "chi è?").with(Tag::Group("kdo".into())),
    ];
    rows.extend(["kje?", "kdaj?", "zakaj?", "kam?", "koliko?"].iter().zip(["dove?", "quando?", "perché?", "verso dove?", "quanto?"]).map(|(s, i)| Row::new(*s, i)));
    let index = VocabularyIndex::from_units(&[Unit::new("vprasanja", rows)]);
    let correct = id_of(&index, "kdo?");
    let answers = find_random_answers(&index, Direction::SloToIta, "kdo?", correct, 5, 1000, &mut rng());
    assert_eq!(answers.len(), 5);
    assert!(answers.contains(&id_of(&index, "kdo je to?")));
  }

  #[test]
  fn word_count_filter_relaxes_when_pool_runs_out() {
    let index = VocabularyIndex::from_units(&[Unit::new(
      "phrases",
      vec![
        Row::new("svet", "mondo"),
        Row::new("dnevne novice", "notizie del giorno"),
        Row::new("lep dan", "buona giornata"),
        Row::new("lahko noč", "buona notte"),
        Row::new("se vidimo", "ci vediamo"),
        Row::new("tako tako", "così così"),
      ],
    )]);
    let correct = id_of(&index, "svet");
    let answers = find_random_answers(&index, Direction::SloToIta, "svet", correct, 5, 1000, &mut rng());
    assert_eq!(answers.len(), 5);
    assert!(answers[1..].iter().all(|a| index.item(*a).ita_multiple_words()));
  }

  #[test]
  fn answer_count_is_capped_at_the_alphabet() {
    let rows: Vec<Row> = (0..40).map(|n| Row::new(format!("s{n}").as_str(), format!("i{n}").as_str())).collect();
    let index = VocabularyIndex::from_units(&[Unit::new("many", rows)]);
    let mut engine = QuizEngine::new(&index, settings(30, 3));
    for q in engine.prepare_questions(Direction::SloToIta) {
      assert_eq!(q.choices.len(), MAX_CHOICES);
      assert!(q.choices.contains(&q.correct));
    }

    let mut engine = QuizEngine::new(&index, settings(0, 1));
    let q = &engine.prepare_questions(Direction::SloToIta)[0];
    assert_eq!(q.choices, vec![q.correct]);
  }

  #[test]
  fn scoreboard_tracks_results() {
    let index = mixed_index();
    let mut engine = QuizEngine::new(&index, settings(3, 2));
    let questions = engine.prepare_questions(Direction::SloToIta);
    let mut board = Scoreboard::new(Direction::SloToIta);
    assert_eq!(board.score_percentage(), 0.0);

    assert!(board.record(&questions[0], questions[0].correct));
    let wrong = *questions[1].choices.iter().find(|c| **c != questions[1].correct).expect("decoy");
    assert!(!board.record(&questions[1], wrong));

    let results = board.results(&index);
    assert_eq!(results.total_questions, 2);
    assert_eq!(results.correct_answers, 1);
    assert_eq!(results.score_percentage, 50.0);
    assert_eq!(results.wrong_answers.len(), 1);
    assert_eq!(results.wrong_answers[0].slo, questions[1].prompt);
  }
}
