//! Workflow categories and their SLA targets.
//!
//! The catalog is static configuration: built once at startup, shared
//! read-only for the lifetime of the process, and injected into the engine
//! by reference. Membership tests always take an already alias-resolved
//! canonical title.

use serde::Serialize;

use crate::domain::foundation::normalize;

/// A single workflow step belonging to a category.
///
/// `label` keeps the display form supplied by the domain owner; `canonical`
/// is its normalized comparison form. By construction
/// `normalize(label) == canonical`, which is what makes label lookup
/// reversible by normalization.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowStep {
    pub label: String,
    pub canonical: String,
}

impl WorkflowStep {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            canonical: normalize(label),
        }
    }
}

/// A workflow category with its SLA target in business days.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub name: String,
    pub sla_target_days: u32,
    pub steps: Vec<WorkflowStep>,
}

impl Category {
    /// Builds a category, normalizing every step label at construction.
    pub fn new(name: impl Into<String>, sla_target_days: u32, step_labels: &[&str]) -> Self {
        Self {
            name: name.into(),
            sla_target_days,
            steps: step_labels.iter().map(|l| WorkflowStep::new(l)).collect(),
        }
    }

    /// Whether the canonical title belongs to this category.
    pub fn contains(&self, canonical: &str) -> bool {
        self.steps.iter().any(|s| s.canonical == canonical)
    }
}

/// Static table of workflow categories.
///
/// Canonical step names are intended to be disjoint across categories;
/// the catalog does not enforce that, it simply returns the first match.
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The category owning the given canonical step title, if any.
    pub fn category_of(&self, canonical: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.contains(canonical))
    }

    /// Whether any category contains the canonical title.
    pub fn contains_step(&self, canonical: &str) -> bool {
        self.category_of(canonical).is_some()
    }

    /// Display label for a canonical step, when the catalog knows one.
    ///
    /// Normalizing the returned label reproduces the canonical form.
    pub fn step_label(&self, canonical: &str) -> Option<&str> {
        self.categories
            .iter()
            .flat_map(|c| c.steps.iter())
            .find(|s| s.canonical == canonical)
            .map(|s| s.label.as_str())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Sum of all category SLA targets, the expected duration of a full
    /// process run.
    pub fn total_target_days(&self) -> u32 {
        self.categories.iter().map(|c| c.sla_target_days).sum()
    }

    /// The catalog shipped with the service.
    ///
    /// Step lists and targets come from the procurement domain owner and
    /// are treated as configuration, not business rules.
    pub fn default_catalog() -> Self {
        Self::new(vec![
            Category::new(
                "Juridico",
                3,
                &[
                    "Elaboração de Minuta",
                    "Discussão de Minuta",
                    "Assinatura",
                    "Elaboração de Contrato (ELAW)",
                    "Contrato em Chancela (ELAW)",
                    "Contrato em discussão Jurídica (ELAW)",
                    "Contrato em Aprovação (ELAW)",
                    "Carry out Legal steps (If it is a Contract)",
                ],
            ),
            Category::new(
                "Suprimentos",
                25,
                &[
                    "RFT",
                    "Definição de Estratégia de compras",
                    "Conexão do Fornecedor",
                    "Solicitação de propostas técnicas revisadas",
                    "Análise Comercial / Negociação",
                    "Emissão do Contrato SAP",
                    "Overall",
                    "Analysis and Data Collection and Strategy Definition",
                    "Finalize Sourcing Project  no Ariba - Mudar o Status do Projeto para Concluído",
                    "Contrato em Assinatura (Docusign)",
                    "Evaluate Scenario for Awards",
                    "Preencher na Capa do Projeto  o campo valor final da negociação",
                    "Award supplier",
                    "Top Signed contract",
                    "Operating Contract",
                    "Gerar Pedido no Buying - Enviar Cotações ao Sistema Externo",
                    "Finalização do Projeto",
                    "Elaborar Plano de Ação",
                    "Discussão do Plano de Ação",
                    "Atualizar Equipe do Projeto",
                    "Preparar Solicitação de Sourcing e Verificar Documentos Adicionais",
                    "Alternative Procurement Method",
                ],
            ),
            Category::new(
                "Tecnico",
                7,
                &[
                    "Avaliação Técnica",
                    "Avaliação das propostas técnicas revisadas",
                ],
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_of_matches_normalized_steps() {
        let catalog = CategoryCatalog::default_catalog();
        let juridico = catalog.category_of("discussao de minuta").unwrap();
        assert_eq!(juridico.name, "Juridico");
        assert_eq!(juridico.sla_target_days, 3);

        let tecnico = catalog.category_of("avaliacao tecnica").unwrap();
        assert_eq!(tecnico.name, "Tecnico");
        assert_eq!(tecnico.sla_target_days, 7);
    }

    #[test]
    fn unknown_step_has_no_category() {
        let catalog = CategoryCatalog::default_catalog();
        assert!(catalog.category_of("passeio no parque").is_none());
        assert!(!catalog.contains_step(""));
    }

    #[test]
    fn step_label_round_trips_through_normalize() {
        let catalog = CategoryCatalog::default_catalog();
        for category in catalog.categories() {
            for step in &category.steps {
                let label = catalog.step_label(&step.canonical).unwrap();
                assert_eq!(normalize(label), step.canonical);
            }
        }
    }

    #[test]
    fn total_target_sums_all_categories() {
        let catalog = CategoryCatalog::default_catalog();
        assert_eq!(catalog.total_target_days(), 3 + 25 + 7);
    }
}
