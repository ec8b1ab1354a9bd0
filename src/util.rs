//! Small utility helpers used across modules.

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

/// Key form of a vocabulary text: trimmed and lowercased.
pub fn normalize(s: &str) -> String {
  s.trim().to_lowercase()
}

/// Options per question are capped so every one gets its own letter.
pub const MAX_CHOICES: usize = 26;

/// Letter shown in front of the option at `pos` (a, b, c, ...).
/// `pos` must be below `MAX_CHOICES`.
pub fn choice_label(pos: usize) -> char {
  debug_assert!(pos < MAX_CHOICES);
  char::from(b'a' + pos.min(MAX_CHOICES - 1) as u8)
}

/// Log-safe truncation for large strings.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.chars().count() <= max {
    s.to_string()
  } else {
    let head: String = s.chars().take(max).collect();
    format!("{}… ({} bytes total)", head, s.len())
  }
}
