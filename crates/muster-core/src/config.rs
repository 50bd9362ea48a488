use crate::{
    discovery::DiscoveredSettings,
    rule_set::{Category, Rule, RuleSet},
    settings::Settings,
};
use anyhow::Result;
use rustc_hash::FxHashSet;
use std::path::PathBuf;

#[derive(Clone, Debug, Default)]
/// Arguments provided in the CLI.
pub struct ArgsConfig {
    /// Paths to files to lint.
    pub files: Vec<PathBuf>,
    /// Did the user pass the --fix flag?
    pub fix: bool,
    /// Did the user pass the --unsafe-fixes flag?
    pub unsafe_fixes: bool,
    /// Did the user pass the --fix-only flag?
    pub fix_only: bool,
    /// Names of rules to use. A single string with commas between rule names.
    pub select: String,
    /// Names of rules to ignore. A single string with commas between rule names.
    pub ignore: String,
    /// Apply fixes even if the Git branch still has uncommitted files?
    pub allow_dirty: bool,
    /// Apply fixes even if there is no version control system?
    pub allow_no_vcs: bool,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Paths to files to lint.
    pub paths: Vec<PathBuf>,
    /// Rules selected by the user and/or recovered from the config file.
    pub rules: RuleSet,
    /// Rules to run. This is `rules` unless `--fix-only` drops the rules that
    /// cannot fix anything.
    pub rules_to_apply: RuleSet,
    /// Rules whose fixes may be written to disk: safe fixes with `--fix`,
    /// safe and unsafe ones with `--unsafe-fixes`.
    pub rules_to_fix: RuleSet,
    /// Did the user pass `--fix`, `--unsafe-fixes` or `--fix-only`?
    pub apply_fixes: bool,
    /// Did the user pass the --unsafe-fixes flag?
    pub apply_unsafe_fixes: bool,
    /// Apply fixes even if the Git branch still has uncommitted files?
    pub allow_dirty: bool,
    /// Apply fixes even if there is no version control system?
    pub allow_no_vcs: bool,
}

pub fn build_config(
    check_config: &ArgsConfig,
    discovered: Option<&DiscoveredSettings>,
    paths: Vec<PathBuf>,
) -> Result<Config> {
    let toml_settings = discovered.map(|x| &x.settings);

    let rules_cli = parse_rules_cli(&check_config.select, &check_config.ignore)?;
    let rules_toml = parse_rules_toml(toml_settings)?;
    let rules = reconcile_rules(rules_cli, rules_toml);

    // Using --unsafe-fixes or --fix-only implies using --fix, but the
    // opposite is not true.
    let apply_unsafe_fixes = check_config.unsafe_fixes;
    let apply_fixes = check_config.fix || apply_unsafe_fixes || check_config.fix_only;

    let rules_to_fix = match (apply_fixes, apply_unsafe_fixes) {
        (false, _) => RuleSet::empty(),
        (true, false) => rules.filter(|r| r.has_safe_fix()),
        (true, true) => rules.filter(|r| r.has_safe_fix() || r.has_unsafe_fix()),
    };

    let rules_to_apply = if check_config.fix_only {
        rules.filter(|r| !r.has_no_fix())
    } else {
        rules.clone()
    };

    tracing::debug!(
        "Selected rules: {}",
        rules.iter().map(|r| r.name()).collect::<Vec<_>>().join(", ")
    );

    Ok(Config {
        paths,
        rules,
        rules_to_apply,
        rules_to_fix,
        apply_fixes,
        apply_unsafe_fixes,
        allow_dirty: check_config.allow_dirty,
        allow_no_vcs: check_config.allow_no_vcs,
    })
}

type SelectedAndIgnored = (Option<FxHashSet<Rule>>, FxHashSet<Rule>);

/// Parse CLI rule arguments and return (selected_rules, ignored_rules).
///
/// Returns None for selected_rules if no --select was specified.
/// Returns empty set for ignored_rules if no --ignore was specified.
pub fn parse_rules_cli(select: &str, ignore: &str) -> Result<SelectedAndIgnored> {
    let selected_rules = if select.is_empty() {
        None
    } else {
        let passed_by_user: Vec<&str> = select.split(',').collect();
        Some(resolve_rule_names(&passed_by_user, "`--select`")?)
    };

    let ignored_rules = if ignore.is_empty() {
        FxHashSet::default()
    } else {
        let passed_by_user: Vec<&str> = ignore.split(',').collect();
        resolve_rule_names(&passed_by_user, "`--ignore`")?
    };

    Ok((selected_rules, ignored_rules))
}

/// Parse TOML configuration and return (selected_rules, ignored_rules).
///
/// Returns None for selected_rules if no TOML select was specified (meaning use all rules).
/// Returns empty set for ignored_rules if no TOML ignore was specified.
pub fn parse_rules_toml(toml_settings: Option<&Settings>) -> Result<SelectedAndIgnored> {
    let Some(settings) = toml_settings else {
        return Ok((None, FxHashSet::default()));
    };

    let linter_settings = &settings.linter;

    let selected_rules = match &linter_settings.select {
        Some(select) => {
            let passed_by_user: Vec<&str> = select.iter().map(String::as_str).collect();
            Some(resolve_rule_names(
                &passed_by_user,
                "field `select` in 'muster.toml'",
            )?)
        }
        None => None,
    };

    let ignored_rules = match &linter_settings.ignore {
        Some(ignore) => {
            let passed_by_user: Vec<&str> = ignore.iter().map(String::as_str).collect();
            resolve_rule_names(&passed_by_user, "field `ignore` in 'muster.toml'")?
        }
        None => FxHashSet::default(),
    };

    Ok((selected_rules, ignored_rules))
}

// Expand group names (e.g. "SUGG") to their rules and resolve rule names.
// Every invalid entry is collected so that the error lists all of them at
// once.
fn resolve_rule_names(passed_by_user: &[&str], origin: &str) -> Result<FxHashSet<Rule>> {
    let mut rules = FxHashSet::default();
    let mut invalid_rules: Vec<String> = Vec::new();

    for rule_or_group in passed_by_user {
        let trimmed = rule_or_group.trim();

        if let Ok(category) = trimmed.parse::<Category>() {
            rules.extend(Rule::by_category(category));
        } else if let Some(rule) = Rule::from_name(trimmed) {
            rules.insert(rule);
        } else if trimmed.is_empty() {
            invalid_rules.push(format!(
                "\"{rule_or_group}\" (empty or whitespace-only not allowed)"
            ));
        } else {
            invalid_rules.push(rule_or_group.to_string());
        }
    }

    if !invalid_rules.is_empty() {
        return Err(anyhow::anyhow!(
            "Unknown rules in {origin}: {}",
            invalid_rules.join(", ")
        ));
    }

    Ok(rules)
}

/// Reconcile rules from CLI and TOML configuration.
///
/// - CLI select takes precedence over TOML select
/// - CLI ignore and TOML ignore are combined (both applied)
/// - If neither CLI nor TOML specify select, start with all rules enabled by
///   default
fn reconcile_rules(rules_cli: SelectedAndIgnored, rules_toml: SelectedAndIgnored) -> RuleSet {
    let (cli_selected, cli_ignored) = rules_cli;
    let (toml_selected, toml_ignored) = rules_toml;

    let base_selected: FxHashSet<Rule> = cli_selected
        .or(toml_selected)
        .unwrap_or_else(|| Rule::enabled_by_default().collect());

    // Keep the declaration order so that output is stable.
    Rule::all()
        .iter()
        .filter(|r| base_selected.contains(*r))
        .filter(|r| !cli_ignored.contains(*r) && !toml_ignored.contains(*r))
        .collect()
}
