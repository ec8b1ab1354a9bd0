//! Serializable outputs for `--json` mode.
//! Keep these small and stable so scripts can consume them.

use serde::Serialize;

use crate::domain::{Direction, Item, Metadata};
use crate::duplicates::Duplicate;
use crate::index::VocabularyIndex;

/// Public view of an indexed item.
#[derive(Debug, Clone, Serialize)]
pub struct ItemOut {
    pub id: usize,
    pub slo: String,
    pub ita: String,
    pub unit: String,
    pub is_question: bool,
    #[serde(flatten)]
    pub meta: Metadata,
}

/// Convert an internal `Item` to its public DTO.
pub fn to_out(it: &Item) -> ItemOut {
    ItemOut {
        id: it.id.0,
        slo: it.slo.clone(),
        ita: it.ita.clone(),
        unit: it.unit.clone(),
        is_question: it.is_question,
        meta: it.meta.clone(),
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResults {
    pub session_id: String,
    pub direction: Direction,
    pub total_questions: usize,
    pub correct_answers: usize,
    pub score_percentage: f64,
    pub wrong_answers: Vec<ItemOut>,
}

#[derive(Debug, Serialize)]
pub struct GroupOut {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct SummaryOut {
    pub items: usize,
    pub slo_entries: usize,
    pub ita_entries: usize,
    pub questions: usize,
    pub groups: Vec<GroupOut>,
}

pub fn summary(index: &VocabularyIndex) -> SummaryOut {
    SummaryOut {
        items: index.len(),
        slo_entries: index.table(Direction::SloToIta).len(),
        ita_entries: index.table(Direction::ItaToSlo).len(),
        questions: index.questions().count(),
        groups: index
            .groups()
            .iter()
            .map(|(name, ids)| GroupOut { name: name.clone(), count: ids.len() })
            .collect(),
    }
}

#[derive(Debug, Serialize)]
pub struct LookupOut {
    pub direction: Direction,
    pub key: String,
    pub entries: Vec<ItemOut>,
}

#[derive(Debug, Serialize)]
pub struct DuplicatesOut {
    pub unique: usize,
    pub duplicates: Vec<Duplicate>,
}
