//! Built-in lesson units used when no lesson files are given.

use crate::domain::{Gender, Level, Row, Tag, Unit, WordType};

macro_rules! row {
  ($slo:expr, $ita:expr $(, $tag:expr)* $(,)?) => {
    Row::new($slo, $ita)$(.with($tag))*
  };
}

fn note(text: &str) -> Tag { Tag::Note(text.into()) }
fn group(id: &str) -> Tag { Tag::Group(id.into()) }

/// Units shipped with the binary: a sample of the first lessons plus
/// the time adverbs, pronouns and question phrases.
pub fn seed_units() -> Vec<Unit> {
  vec![
    Unit::new("1", enota_1()),
    Unit::new("extra", extra()),
    Unit::new("adverbs", time_adverbs()),
    Unit::new("pronomi", pronouns()),
  ]
}

fn enota_1() -> Vec<Row> {
  vec![
    row!("enota", "unità"),
    row!("dober dan", "buongiorno", Tag::Page(7)),
    row!("in", "e", Tag::Kind(WordType::Conjunction), Tag::Level(Level::Easy)),
    row!("črkujte", "sillabare", Tag::Kind(WordType::Verb), Tag::Level(Level::Difficult)),
    row!("dopolnite", "completate", Tag::Kind(WordType::Verb), Tag::Level(Level::Difficult)),
    row!("napišite", "scrivete", Tag::Kind(WordType::Verb), Tag::Level(Level::Difficult)),
    row!("odgovorite", "rispondete", Tag::Kind(WordType::Verb), Tag::Level(Level::Difficult)),
    row!("poslušajte", "ascoltate", Tag::Kind(WordType::Verb), Tag::Level(Level::Difficult)),
    row!("ponovite", "ripetete", Tag::Kind(WordType::Verb), Tag::Level(Level::Difficult)),
    row!("preberite", "leggete", Tag::Kind(WordType::Verb), Tag::Level(Level::Difficult)),
    row!("vstavite", "inserite", Tag::Kind(WordType::Verb), Tag::Level(Level::Difficult)),
    row!("sestavite besede", "compilate le parole", Tag::Kind(WordType::Verb), Tag::Level(Level::Difficult)),
    row!("besedišče", "vocabolario"),
    row!("beseda", "parola"),
    row!("besede", "parole"),
    row!("črko", "lettera"),
    row!("eno črko lahko uporabite večkrat", "puoi usare una lettera più di una volta"),
    row!("večkrat", "parecchie volte"),
    row!("identiteta", "identità"),
    row!("abeceda", "alfabeto"),
    row!("številka", "numero"),
    row!("številke", "numeri"),
    row!("poklici", "professioni"),
    row!("jeziki", "le lingue"),
    row!("slovnica", "grammatica"),
    row!("biti", "essere", Tag::Kind(WordType::Verb), note("infinito")),
    row!("govoriti", "parlare", Tag::Kind(WordType::Verb), note("infinito")),
    row!("jaz sem Marco", "io sono Marco", Tag::Kind(WordType::Sentence)),
    row!("me veseli!", "piacere", Tag::Kind(WordType::Sentence)),
    row!("živjo", "ciao"),
    row!("adijo", "ciao"),
    row!("dober večer", "buonasera"),
    row!("lahko noč", "buona notte"),
    row!("se vidimo", "ci vediamo"),
    row!("dobro jutro", "buon mattino"),
    row!("nasvidenje", "arrivederci"),
    row!("lep dan", "buona giornata"),
    row!("pozdravljeni", ["piacere", "io vi saluto"], note("dober dan in pozdravljeni")),
    row!("kako si?", "come stai? (come sei?)", note("letterale: come sei?")),
    row!("dobro", "bene", Tag::Kind(WordType::Adverb)),
    row!("odlično", "eccellente", note("kako si? odlično!")),
    row!("slabo", "male", note("kako si? slabo")),
    row!("tako tako", "così così"),
    row!("v redu", "ok"),
    row!("zelo dobro", "molto bene", Tag::Kind(WordType::Adverb)),
    row!("zelo", "molto"),
    row!("jaz nisem", "io non sono"),
    row!("ti nisi", "tu non sei"),
    row!("on, ona ni", "lui, lei non è"),
    row!("mi nismo", "noi non siamo"),
    row!("vi niste", "voi non siete"),
    row!("oni, one niso", "loro/esse non sono"),
    row!("jaz govorim", "io parlo/sto parlando"),
    row!("ti govoriš", "tu parli"),
    row!("on, ona govori", "lui/lei parla"),
    row!("mi govorimo", "noi parliamo"),
    row!("vi govorite", "voi parlate"),
    row!("oni, one govorijo", "loro/esse parlano"),
    row!("a ti govoriš slovensko?", "tu parli sloveno?"),
    row!("mobitel", "telefono cellulare", Tag::Gender(Gender::Male)),
    row!("starost", "età"),
    row!("marec", "marzo", Tag::Pron("c finale come z".into())),
    row!("", ""),
  ]
}

fn extra() -> Vec<Row> {
  vec![
    row!("Kako ti je ime?", "Come è il tuo nome?", group("kako")),
    row!("Kako se reče?", "Come si dice?", group("kako")),
    row!("Kako se piše?", "Come si scrive?", group("kako")),
    row!("Kako greš v službo?", "Come vai al lavoro?", group("kako")),
    row!("Kako prideš?", "Come vieni?", group("kako")),
    row!("Kakšen je tvoj prijatelj?", "Com'è il tuo amico?", group("kakšen")),
    row!("Kakšna je kava?", "Com'è il caffè?", group("kakšen")),
    row!("Kakšna je hiša?", "Com'è la casa?", group("kakšen")),
    row!("Kakšno je vreme?", "Com'è il tempo?", group("kakšen")),
    row!("Delam kot natakar", "Lavoro come cameriere"),
    row!("Velik je kot oče", "È grande come il padre"),
    row!("Danes je vreme lepo kot včeraj", "Oggi il tempo è bello come ieri"),
    row!("dober prijatelj", "buon amico"),
    row!("dobra prijateljica", "buona amica"),
    row!("dobro pivo", "buona birra"),
    row!("dobro sem!", "sto bene"),
    row!("dobro govorim italijansko", "parlo bene l'italiano"),
    row!("kako govoriš italijansko?", "come parli italiano?"),
    row!("lep pozdrav", "saluti"),
    row!("zdravo", "ciao"),
    row!("dobrodošli", "benvenuto"),
    row!("od kod si?", ["da dove vieni?", "di dove sei?"]),
    row!("sem iz Trsta", "sono di Trieste", Tag::Gender(Gender::Male)),
    row!("sem iz Rima", "sono di Roma", Tag::Gender(Gender::Male)),
    row!("sem iz Italije", "vengo dall'Italia", Tag::Gender(Gender::Female)),
    row!("sem iz Ljubljane", "vengo da Lubiana", Tag::Gender(Gender::Female)),
    row!("kam greš?", "dove vai?"),
    row!("a veste?", "lo sapete?"),
  ]
}

fn time_adverbs() -> Vec<Row> {
  vec![
    row!("dan", "(il) giorno", Tag::Page(27)),
    row!("podnevi", "di giorno", Tag::Kind(WordType::Adverb)),
    row!("jutro", "(il) mattino"),
    row!("večer", "(la) sera"),
    row!("leto", "(l') anno"),
    row!("danes", "oggi", Tag::Kind(WordType::Adverb)),
    row!("jutri", "domani", Tag::Kind(WordType::Adverb)),
    row!("včeraj", "ieri", Tag::Kind(WordType::Adverb)),
    row!("zjutraj", "di mattina", Tag::Kind(WordType::Adverb)),
    row!("zvečer", "di sera", Tag::Kind(WordType::Adverb)),
    row!("letos", "quest'anno", Tag::Kind(WordType::Adverb)),
    row!(["zdaj", "sedaj"], "ora", Tag::Kind(WordType::Adverb)),
    row!("prej", "prima", Tag::Kind(WordType::Adverb)),
    row!("najprej", "prima (di tutto)", Tag::Kind(WordType::Adverb)),
    row!("potem", "dopo", Tag::Kind(WordType::Adverb)),
    row!("takoj", "subito", Tag::Kind(WordType::Adverb)),
    row!("zgodaj", "presto", Tag::Kind(WordType::Adverb)),
    row!("popoldne", "di pomeriggio", Tag::Kind(WordType::Adverb)),
    row!("zima", "inverno"),
    row!("pozimi", "d'inverno"),
    row!("poletje", "estate"),
    row!("poleti", ["in estate", "d'estate"]),
    row!("noč", "notte"),
    row!("ponoči", "di notte"),
    row!("pomlad", "primavera"),
    row!("spomladi", "in primavera"),
    row!("jesen", "autunno"),
    row!("jeseni", ["in autunno", "d'autunno"]),
    row!("kolikokrat?", "quante volte?"),
    row!("enkrat", "una volta", Tag::Kind(WordType::Number)),
    row!("dvakrat", "due volte", Tag::Kind(WordType::Number)),
    row!("trikrat", "tre volte", Tag::Kind(WordType::Number)),
    row!("tukaj", "qua"),
    row!(["tam", "tja"], "là"),
    row!("spodaj", "sotto"),
    row!("zgoraj", "sopra"),
    row!("noter", "dentro"),
    row!("zunaj", "fuori"),
    row!("spredaj", "davanti"),
    row!("zadaj", "dietro"),
    row!("daleč", "lontano"),
    row!("pridi sem!", "vieni qua"),
    row!("pojdi tja!", "vai là"),
  ]
}

fn pronouns() -> Vec<Row> {
  vec![
    row!("jaz", "io", Tag::Kind(WordType::Pronoun)),
    row!("ti", "tu", Tag::Kind(WordType::Pronoun)),
    row!("on", "lui", Tag::Kind(WordType::Pronoun)),
    row!("ona", "lei", Tag::Kind(WordType::Pronoun)),
    row!("mi", "noi", Tag::Kind(WordType::Pronoun)),
    row!("me", "noi (f)", Tag::Kind(WordType::Pronoun)),
    row!("vi", "voi", Tag::Kind(WordType::Pronoun)),
    row!("ve", "voi (f)", Tag::Kind(WordType::Pronoun)),
    row!("oni", "essi", Tag::Kind(WordType::Pronoun)),
    row!("one", "esse", Tag::Kind(WordType::Pronoun)),
    row!("", ""),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::index::VocabularyIndex;
  use crate::duplicates::find_duplicates;

  #[test]
  fn seeds_index_cleanly() {
    let units = seed_units();
    let mut index = VocabularyIndex::new();
    let report = index.extend(&units);
    assert!(report.indexed > 100);
    // only the blank placeholder rows are skipped
    assert_eq!(report.skipped_rows, 2);
    assert!(index.questions().count() >= 10);
    assert_eq!(index.group_members("kako").len(), 5);
  }

  #[test]
  fn seeds_have_no_duplicate_slovenian_rows() {
    assert!(find_duplicates(&seed_units()).duplicates.is_empty());
  }
}
