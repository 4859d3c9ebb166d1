//! Synonym resolution for task titles.
//!
//! A handful of upstream titles are known variants of catalog steps
//! ("Análise Técnica" for "Avaliação Técnica"). The alias table maps the
//! normalized variant onto the normalized canonical form; unknown titles
//! pass through unchanged. Resolution must happen before any catalog
//! membership test, otherwise those variants silently under-classify.

use std::collections::HashMap;

use crate::domain::foundation::normalize;

/// Maps normalized variant titles onto normalized canonical titles.
///
/// Every value is itself a fully normalized form and never appears as a
/// key, which makes [`AliasTable::resolve`] idempotent.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    /// Builds a table from (variant, canonical) pairs, normalizing both
    /// sides. A pair whose variant equals its canonical form is dropped.
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let entries = pairs
            .into_iter()
            .map(|(variant, canonical)| (normalize(variant.as_ref()), normalize(canonical.as_ref())))
            .filter(|(variant, canonical)| !variant.is_empty() && variant != canonical)
            .collect();
        Self { entries }
    }

    /// Resolves a raw title to its canonical comparison form.
    ///
    /// Normalizes, then applies the alias mapping if one exists; otherwise
    /// the normalized form itself is the canonical form.
    pub fn resolve(&self, title: &str) -> String {
        let norm = normalize(title);
        self.entries.get(&norm).cloned().unwrap_or(norm)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The alias table shipped with the service.
    ///
    /// Domain-owner configuration: variants observed in the upstream feed
    /// mapped onto catalog steps. The "Award supplier" mapping folds a
    /// duplicate Suprimentos title onto the "Overall" step it duplicates.
    pub fn default_table() -> Self {
        Self::new([
            ("Análise Técnica", "Avaliação Técnica"),
            ("Avaliacao tecnica das propostas", "Avaliação das propostas técnicas revisadas"),
            ("Award supplier", "Overall"),
            ("Discussão Minuta", "Discussão de Minuta"),
            ("Negociação Comercial", "Análise Comercial / Negociação"),
        ])
    }
}
