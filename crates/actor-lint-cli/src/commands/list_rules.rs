//! List rules command implementation.

use actor_lint_core::RuleDescriptor;
use actor_lint_rules::all_rules;
use anyhow::Result;

/// Runs the list-rules command.
pub fn run(json: bool) -> Result<()> {
    let descriptors: Vec<RuleDescriptor> = all_rules().iter().map(|r| r.descriptor()).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&descriptors)?);
        return Ok(());
    }

    println!("Available rules:\n");
    println!(
        "{:<10} {:<38} {:<9} Description",
        "Code", "Name", "Severity"
    );
    println!("{}", "-".repeat(110));

    for rule in &descriptors {
        println!(
            "{:<10} {:<38} {:<9} {}",
            rule.code,
            rule.name,
            rule.default_severity.to_string(),
            rule.description
        );
    }

    println!("\nPresets:");
    println!("  recommended  - All rules at default severity (default)");
    println!("  strict       - All rules, warnings escalated to errors");
    println!("  minimal      - DAPR1405, DAPR1413, DAPR1414 (for gradual adoption)");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  actor-lint check --rules record-needs-contract,actor-missing-capability symbols.json");
    println!("  actor-lint check --rules DAPR1405,DAPR1413 symbols.json");

    Ok(())
}
