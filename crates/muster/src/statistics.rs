use colored::Colorize;
use muster_core::diagnostic::Diagnostic;
use std::{collections::HashMap, path::PathBuf};

use crate::status::ExitStatus;

pub fn print_statistics(
    diagnostics: &[&Diagnostic],
    parent_config_path: Option<PathBuf>,
) -> anyhow::Result<ExitStatus> {
    if diagnostics.is_empty() {
        println!("All checks passed!");
        return Ok(ExitStatus::Success);
    }

    // Hashmap with rule name as key, and (number of occurrences, has_fix) as
    // value.
    let mut hm: HashMap<&str, (usize, bool)> = HashMap::new();

    for diagnostic in diagnostics {
        let entry = hm.entry(diagnostic.message.name.as_str()).or_default();
        entry.0 += 1;
        entry.1 |= diagnostic.has_safe_fix();
    }

    // Most frequent rules first, ties broken by name so that the output is
    // stable.
    let mut sorted: Vec<_> = hm.into_iter().collect();
    sorted.sort_by(|a, b| b.1.0.cmp(&a.1.0).then_with(|| a.0.cmp(b.0)));

    for (key, value) in sorted {
        let star = if value.1 { "*" } else { " " };
        println!(
            "{:>5} [{}] {}",
            value.0.to_string().bold(),
            star,
            key.bold().red()
        );
    }

    println!("\nRules with `[*]` have an automatic fix.");

    // Inform the user if the config file used comes from a parent directory.
    if let Some(config_path) = parent_config_path {
        println!("\nUsed '{}'", config_path.display());
    }

    Ok(ExitStatus::Failure)
}
