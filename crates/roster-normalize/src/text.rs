//! Text normalization for comparing labels.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Lower-cases, trims, and removes diacritics, keeping every other character.
///
/// `"  Função "` becomes `"funcao"`, `"Data de Nascimento"` becomes
/// `"data de nascimento"`.
pub fn fold_diacritics(raw: &str) -> String {
    raw.trim()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Builds the comparison key for a header or synonym label.
///
/// The key keeps only `[a-z0-9]` after diacritics are folded, so
/// `"E-mail"`, `"email"` and `" EMAIL "` all share the key `"email"`.
pub fn normalize_key(raw: &str) -> String {
    fold_diacritics(raw)
        .chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
        .collect()
}
