//! 텍스트, CSV, PDF 내보내기 통합 테스트

mod common;

use common::*;
use taskboard_report::model::{EntitySnapshot, TaskStatus};
use taskboard_report::renderer::document::{layout_document, PageKind};
use taskboard_report::{export, render_csv, render_text, DocumentConfig, ExportFormat, ReportBuilder};

fn scenario_report() -> taskboard_report::Report {
    ReportBuilder::build(&scenario_snapshot(), now())
}

#[test]
fn csv_title_with_comma_and_quotes_parses_back() {
    let csv_text = render_csv(&scenario_report()).unwrap();
    assert!(csv_text.contains("\"Acme, \"\"Phase 2\"\"\""));

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(csv_text.as_bytes());
    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

    let acme = records
        .iter()
        .find(|r| r.get(0) == Some("p3"))
        .expect("project row for p3");
    assert_eq!(acme.get(1), Some("Acme, \"Phase 2\""));
    assert_eq!(acme.get(5), Some("5"));

    // 작업 블록의 프로젝트 열도 같은 제목을 그대로 돌려준다
    let task = records
        .iter()
        .find(|r| r.get(0) == Some("c1"))
        .expect("task row for c1");
    assert_eq!(task.get(5), Some("Acme, \"Phase 2\""));
}

#[test]
fn csv_blocks_are_separated_by_blank_lines() {
    let csv_text = render_csv(&scenario_report()).unwrap();

    let blocks: Vec<&str> = csv_text.split("\n\n").collect();
    assert_eq!(blocks.len(), 3);
    assert!(blocks[0].starts_with("PROJECTS\nID,Title,"));
    assert!(blocks[1].starts_with("USERS\nID,Name,"));
    assert!(blocks[2].starts_with("TASKS\nID,Name,"));
}

#[test]
fn text_report_lists_sections_in_order() {
    let text = render_text(&scenario_report());

    let sections = [
        "PROJECTS SUMMARY",
        "USERS SUMMARY",
        "TASKS SUMMARY",
        "PROJECT DETAILS",
        "USER DETAILS",
        "TASK DETAILS",
    ];
    let positions: Vec<usize> = sections
        .iter()
        .map(|s| text.find(s).unwrap_or_else(|| panic!("missing section {s}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(text.contains("Mina Park"));
    assert!(text.contains("2026-10-19 12:00:00 UTC"));
}

#[test]
fn text_output_is_deterministic() {
    let report = scenario_report();
    assert_eq!(render_text(&report), render_text(&report));
}

#[test]
fn csv_output_is_deterministic() {
    let mut snapshot = scenario_snapshot();
    snapshot.tasks.push(in_project(task("x1", TaskStatus::parse("blocked")), "p2"));
    let report = ReportBuilder::build(&snapshot, now());

    let first = render_csv(&report).unwrap();
    assert_eq!(first, render_csv(&report).unwrap());
    assert!(first.contains(",blocked,"));
}

#[test]
fn empty_report_renders_in_every_format() {
    let report = ReportBuilder::build(&EntitySnapshot::default(), now());
    let config = DocumentConfig::default();

    let text = export(&report, ExportFormat::Text, &config).unwrap();
    assert!(String::from_utf8(text).unwrap().contains("(none)"));

    let csv_bytes = export(&report, ExportFormat::Csv, &config).unwrap();
    assert!(String::from_utf8(csv_bytes).unwrap().starts_with("PROJECTS\n"));

    let pdf = export(&report, ExportFormat::Pdf, &config).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[test]
fn project_details_overflow_onto_more_pages() {
    let snapshot = EntitySnapshot {
        projects: (0..25)
            .map(|i| project(&format!("p{i}"), &format!("Project {i}")))
            .collect(),
        ..Default::default()
    };
    let report = ReportBuilder::build(&snapshot, now());
    let config = DocumentConfig::default();

    let layout = layout_document(&report, &config);
    let pages: Vec<_> = layout.pages_of(PageKind::ProjectDetails).collect();
    assert!(pages.len() > 1, "expected overflow, got {} page(s)", pages.len());

    let bottom_limit = config.page_height - config.margin;
    for page in &pages {
        for element in &page.elements {
            assert!(
                element.bounds().bottom <= bottom_limit,
                "element {:?} crosses the bottom margin",
                element
            );
        }
    }
}

#[test]
fn pdf_export_of_scenario_produces_document() {
    let pdf = export(&scenario_report(), ExportFormat::Pdf, &DocumentConfig::default()).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
    assert!(pdf.len() > 1000);
}
