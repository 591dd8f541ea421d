//! End-to-end tests running the full rule set over host-exported symbol
//! graphs.

use actor_lint_core::{Analyzer, Config, LintResult, Severity, SymbolGraph};
use actor_lint_rules::{all_rules, minimal_rules, Preset};
use std::path::PathBuf;

fn fixture(name: &str) -> SymbolGraph {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    SymbolGraph::from_file(&path).expect("fixture should load")
}

fn analyze_with(graph: &SymbolGraph, config: Config) -> LintResult {
    Analyzer::builder()
        .rules(all_rules())
        .config(config)
        .build()
        .expect("analyzer should build")
        .analyze(graph)
}

fn analyze(graph: &SymbolGraph) -> LintResult {
    analyze_with(graph, Config::default())
}

fn sequential() -> Config {
    let mut config = Config::default();
    config.analyzer.concurrent = false;
    config
}

fn summary(result: &LintResult) -> String {
    result
        .violations
        .iter()
        .map(|v| format!("{} {}", v.location, v.code))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_order_actor_findings() {
    let result = analyze(&fixture("order_actor.json"));

    assert_eq!(result.declarations_checked, 5);
    insta::assert_snapshot!(summary(&result), @r"
    Actors/LegacyActor.cs:3:18 DAPR1405
    Actors/LegacyActor.cs:5:14 DAPR1413
    Actors/OrderActor.cs:10:16 DAPR1407
    Actors/OrderActor.cs:14:29 DAPR1410
    Actors/OrderActor.cs:14:42 DAPR1409
    Actors/OrderActor.cs:20:39 DAPR1411
    Actors/OrderActor.cs:20:39 DAPR1414
    Actors/OrderActor.cs:26:35 DAPR1412
    Models/Line.cs:5:19 DAPR1412
    Models/Order.cs:3:18 DAPR1408
    Models/Status.cs:6:5 DAPR1406
    ");
    assert_eq!(result.count_by_severity(), (3, 7, 1));
    assert!(result.has_errors());
}

#[test]
fn test_unmarked_interface_reported_exactly_once() {
    let result = analyze(&fixture("order_actor.json"));

    let r1 = result.by_code("DAPR1405");
    assert_eq!(r1.len(), 1);
    assert!(r1[0].message.contains("ILegacyActor"));

    // The class implementing it still lacks a conforming interface.
    let r9 = result.by_code("DAPR1413");
    assert_eq!(r9.len(), 1);
    assert!(r9[0].message.contains("LegacyActor"));
}

#[test]
fn test_collection_message_names_both_types() {
    let result = analyze(&fixture("order_actor.json"));
    let r7 = result.by_code("DAPR1411");
    assert_eq!(r7.len(), 1);
    assert!(r7[0].message.contains("List"));
    assert!(r7[0].message.contains("Item"));
}

#[test]
fn test_record_findings_are_independent() {
    let result = analyze(&fixture("order_actor.json"));
    let r8 = result.by_code("DAPR1412");
    assert_eq!(r8.len(), 2);
    assert!(r8.iter().all(|v| v.message.contains("LineRecord")));
    // The member finding points back at the method that reaches the record.
    assert_eq!(r8[1].labels.len(), 1);
    assert_eq!(r8[1].labels[0].message, "used by 'AddLine'");
}

#[test]
fn test_annotated_actor_is_clean() {
    let result = analyze(&fixture("annotated_actor.json"));
    assert!(
        result.violations.is_empty(),
        "unexpected findings:\n{}",
        summary(&result)
    );
    assert_eq!(result.declarations_checked, 2);
}

#[test]
fn test_generated_declarations_are_opt_in() {
    let graph = fixture("annotated_actor.json");
    let mut config = Config::default();
    config.analyzer.exclude_generated = false;

    let result = analyze_with(&graph, config);
    assert_eq!(result.declarations_checked, 3);
    let r9 = result.by_code("DAPR1413");
    assert_eq!(r9.len(), 1);
    assert!(r9[0].message.contains("OrderActorGenerated"));
}

#[test]
fn test_idempotent() {
    let graph = fixture("order_actor.json");
    let analyzer = Analyzer::builder()
        .rules(all_rules())
        .build()
        .expect("analyzer should build");
    let first = analyzer.analyze(&graph);
    let second = analyzer.analyze(&graph);
    assert_eq!(first.violations, second.violations);
}

#[test]
fn test_concurrency_does_not_change_findings() {
    let graph = fixture("order_actor.json");
    let concurrent = analyze(&graph);
    let serial = analyze_with(&graph, sequential());

    let mut pooled = Config::default();
    pooled.analyzer.parallelism = Some(3);
    let pooled = analyze_with(&graph, pooled);

    assert_eq!(concurrent.violations, serial.violations);
    assert_eq!(concurrent.violations, pooled.violations);
}

#[test]
fn test_exclude_by_declaration_file() {
    let graph = fixture("order_actor.json");
    let mut config = sequential();
    config.analyzer.exclude = vec!["**/LegacyActor.cs".to_string()];

    let result = analyze_with(&graph, config);
    assert_eq!(result.declarations_checked, 3);
    assert!(result.by_code("DAPR1405").is_empty());
    assert!(result.by_code("DAPR1413").is_empty());
    assert_eq!(result.violations.len(), 9);
}

#[test]
fn test_rule_config_overrides() {
    let config = Config::parse(
        r#"
[rules.property-wire-name]
enabled = false

[rules.DAPR1412]
severity = "error"
"#,
    )
    .expect("config should parse");

    let result = analyze_with(&fixture("order_actor.json"), config);
    assert!(result.by_code("DAPR1407").is_empty());
    assert!(result
        .by_code("DAPR1412")
        .iter()
        .all(|v| v.severity == Severity::Error));
}

#[test]
fn test_minimal_preset_reports_errors_only() {
    let graph = fixture("order_actor.json");
    let result = Analyzer::builder()
        .rules(minimal_rules())
        .build()
        .expect("analyzer should build")
        .analyze(&graph);

    assert_eq!(result.violations.len(), 3);
    assert!(result
        .violations
        .iter()
        .all(|v| v.severity == Severity::Error));
}

#[test]
fn test_strict_preset_fails_on_warnings() {
    let graph = fixture("order_actor.json");
    let result = Analyzer::builder()
        .rules(Preset::Strict.rules())
        .build()
        .expect("analyzer should build")
        .analyze(&graph);

    let (errors, warnings, infos) = result.count_by_severity();
    assert_eq!((errors, warnings, infos), (10, 0, 1));
}

#[test]
fn test_result_serializes_to_json() {
    let result = analyze(&fixture("order_actor.json"));
    let json = serde_json::to_value(&result).expect("result should serialize");
    assert_eq!(json["declarations_checked"], 5);
    assert_eq!(json["violations"][0]["code"], "DAPR1405");
    assert_eq!(json["violations"][0]["severity"], "error");
}
