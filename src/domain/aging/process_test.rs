use chrono::{DateTime, NaiveDateTime, Utc};

use crate::domain::catalog::{AliasTable, CategoryCatalog};
use crate::domain::tasks::WorkflowTask;

use super::AgingCalculator;

fn instant(s: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .unwrap()
        .and_utc()
}

fn task(title: &str, begin: Option<&str>, end: Option<&str>) -> WorkflowTask {
    WorkflowTask {
        title: Some(title.to_string()),
        workspace_id: Some("WS1".to_string()),
        begin: begin.map(instant),
        end: end.map(instant),
    }
}

fn calculator_fixtures() -> (CategoryCatalog, AliasTable) {
    (CategoryCatalog::default_catalog(), AliasTable::default_table())
}

#[test]
fn finished_task_accumulates_closed_inclusive_days() {
    let (catalog, aliases) = calculator_fixtures();
    let calc = AgingCalculator::new(&catalog, &aliases);
    let now = instant("2024-06-28T12:00:00");

    // Mon 3rd .. Fri 7th = 5 business days, both endpoints counted.
    let tasks = vec![task("Assinatura", Some("2024-06-03T08:00:00"), Some("2024-06-07T18:00:00"))];
    let rows = calc.category_aging(&tasks, now);

    let juridico = rows.iter().find(|r| r.category == "Juridico").unwrap();
    assert_eq!(juridico.elapsed_days, 5);
    assert_eq!(juridico.target_days, 3);

    // Other categories report zero against their targets.
    let suprimentos = rows.iter().find(|r| r.category == "Suprimentos").unwrap();
    assert_eq!(suprimentos.elapsed_days, 0);
    assert_eq!(suprimentos.target_days, 25);
}

#[test]
fn open_task_ages_against_now_excluding_its_start_day() {
    let (catalog, aliases) = calculator_fixtures();
    let calc = AgingCalculator::new(&catalog, &aliases);
    // Open since Mon 3rd, now Mon 10th: Tue..Fri + Mon = 5.
    let now = instant("2024-06-10T12:00:00");
    let tasks = vec![task("RFT", Some("2024-06-03T08:00:00"), None)];

    let rows = calc.category_aging(&tasks, now);
    let suprimentos = rows.iter().find(|r| r.category == "Suprimentos").unwrap();
    assert_eq!(suprimentos.elapsed_days, 5);
}

#[test]
fn started_step_contributes_at_least_one_day() {
    let (catalog, aliases) = calculator_fixtures();
    let calc = AgingCalculator::new(&catalog, &aliases);
    // Began and finished over a weekend.
    let tasks = vec![task("RFT", Some("2024-06-08T08:00:00"), Some("2024-06-09T18:00:00"))];
    let rows = calc.category_aging(&tasks, instant("2024-06-28T12:00:00"));
    let suprimentos = rows.iter().find(|r| r.category == "Suprimentos").unwrap();
    assert_eq!(suprimentos.elapsed_days, 1);
}

#[test]
fn pending_task_never_contributes_to_category_aging() {
    let (catalog, aliases) = calculator_fixtures();
    let calc = AgingCalculator::new(&catalog, &aliases);
    let tasks = vec![task("RFT", None, None), task("Assinatura", None, None)];
    let rows = calc.category_aging(&tasks, instant("2024-06-28T12:00:00"));
    assert!(rows.iter().all(|r| r.elapsed_days == 0));
}

#[test]
fn aliased_title_lands_in_the_canonical_category() {
    let (catalog, aliases) = calculator_fixtures();
    let calc = AgingCalculator::new(&catalog, &aliases);
    let tasks = vec![task("Análise Técnica", Some("2024-06-03T08:00:00"), Some("2024-06-04T18:00:00"))];
    let rows = calc.category_aging(&tasks, instant("2024-06-28T12:00:00"));
    let tecnico = rows.iter().find(|r| r.category == "Tecnico").unwrap();
    assert_eq!(tecnico.elapsed_days, 2);
    assert_eq!(tecnico.target_days, 7);
}

#[test]
fn uncategorized_titles_are_skipped() {
    let (catalog, aliases) = calculator_fixtures();
    let calc = AgingCalculator::new(&catalog, &aliases);
    let tasks = vec![task("Reunião de alinhamento", Some("2024-06-03T08:00:00"), None)];
    let rows = calc.category_aging(&tasks, instant("2024-06-28T12:00:00"));
    assert!(rows.iter().all(|r| r.elapsed_days == 0));
}

#[test]
fn total_aging_spans_earliest_begin_to_latest_end() {
    let (catalog, aliases) = calculator_fixtures();
    let calc = AgingCalculator::new(&catalog, &aliases);
    let tasks = vec![
        task("RFT", Some("2024-06-03T08:00:00"), Some("2024-06-05T18:00:00")),
        task("Assinatura", Some("2024-06-06T08:00:00"), Some("2024-06-07T18:00:00")),
    ];
    // Mon 3rd .. Fri 7th inclusive = 5. All tasks finished, now is ignored.
    let total = calc.total_process_aging(&tasks, instant("2024-07-29T12:00:00"));
    assert_eq!(total, 5);
}

#[test]
fn open_task_extends_total_to_now() {
    let (catalog, aliases) = calculator_fixtures();
    let calc = AgingCalculator::new(&catalog, &aliases);
    let tasks = vec![
        task("RFT", Some("2024-06-03T08:00:00"), Some("2024-06-05T18:00:00")),
        task("Assinatura", Some("2024-06-06T08:00:00"), None),
    ];
    // Mon 3rd .. Mon 10th inclusive = 6 business days.
    let total = calc.total_process_aging(&tasks, instant("2024-06-10T12:00:00"));
    assert_eq!(total, 6);
}

#[test]
fn pending_task_keeps_the_process_unfinished() {
    let (catalog, aliases) = calculator_fixtures();
    let calc = AgingCalculator::new(&catalog, &aliases);
    let tasks = vec![
        task("RFT", Some("2024-06-03T08:00:00"), Some("2024-06-05T18:00:00")),
        task("Overall", None, None),
    ];
    let total = calc.total_process_aging(&tasks, instant("2024-06-10T12:00:00"));
    assert_eq!(total, 6);
}

#[test]
fn no_begun_task_means_zero_total() {
    let (catalog, aliases) = calculator_fixtures();
    let calc = AgingCalculator::new(&catalog, &aliases);
    assert_eq!(calc.total_process_aging(&[], instant("2024-06-10T12:00:00")), 0);

    let tasks = vec![task("RFT", None, None)];
    assert_eq!(calc.total_process_aging(&tasks, instant("2024-06-10T12:00:00")), 0);
}

#[test]
fn process_aging_combines_categories_and_total() {
    let (catalog, aliases) = calculator_fixtures();
    let calc = AgingCalculator::new(&catalog, &aliases);
    let tasks = vec![task("Assinatura", Some("2024-06-03T08:00:00"), Some("2024-06-07T18:00:00"))];
    let aging = calc.process_aging(&tasks, instant("2024-06-28T12:00:00"));

    assert_eq!(aging.categories.len(), 3);
    assert_eq!(aging.total_elapsed_days, 5);
    assert_eq!(aging.total_target_days, 35);
}
