//! Canonical text form used for every title comparison.
//!
//! Upstream task titles arrive with inconsistent casing, stray whitespace
//! and Portuguese diacritics ("Discussão de Minuta", "discussao de minuta",
//! " DISCUSSÃO DE MINUTA "). All of them must compare equal, so every
//! comparison in the engine goes through [`normalize`] first. Comparing raw
//! titles anywhere is a defect.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Produces the canonical comparison form of a label.
///
/// Applies Unicode canonical decomposition (NFD), drops combining marks,
/// lowercases and trims. Total function: never fails, empty input yields
/// an empty string.
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// [`normalize`] lifted over optional input; `None` normalizes to `""`.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_diacritics_and_case() {
        assert_eq!(normalize("Discussão de Minuta"), "discussao de minuta");
        assert_eq!(normalize("Avaliação Técnica"), "avaliacao tecnica");
        assert_eq!(normalize("ELABORAÇÃO DE CONTRATO (ELAW)"), "elaboracao de contrato (elaw)");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize("  Assinatura \t"), "assinatura");
    }

    #[test]
    fn empty_and_none_normalize_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize_opt(None), "");
        assert_eq!(normalize_opt(Some("  ")), "");
    }

    proptest! {
        #[test]
        fn idempotent(s in "\\PC{0,40}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }
    }
}
