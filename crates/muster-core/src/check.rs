use crate::error::ParseError;
use crate::fs::relativize_path;
use crate::vcs::check_version_control;
use anyhow::{Context, Result};
use oxc_allocator::Allocator;
use oxc_ast::ast::{ImportDeclaration, JSXOpeningElement, ObjectExpression, Statement};
use oxc_ast_visit::{Visit, walk};
use oxc_parser::Parser;
use oxc_span::SourceType;
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::analyze;
use crate::config::Config;
use crate::diagnostic::*;
use crate::fix::*;
use crate::imports::ImportAliasTracker;
use crate::location::{find_new_lines, find_row_col};
use crate::rule_set::{Rule, RuleSet};

pub fn check(config: Config) -> Vec<(String, Result<Vec<Diagnostic>, anyhow::Error>)> {
    // Ensure that all paths are covered by VCS. This is conservative because
    // technically we could apply fixes on those that are covered by VCS and
    // error for the others, but it is safer to force the user to deal with
    // that before applying any fixes.
    if config.apply_fixes && !config.paths.is_empty() {
        let path_strings: Vec<String> = config.paths.iter().map(relativize_path).collect();
        if let Err(e) = check_version_control(&path_strings, &config) {
            let first_path = path_strings[0].clone();
            return vec![(first_path, Err(e))];
        }
    }

    // Wrap config in Arc to avoid expensive clones in parallel execution
    let config = Arc::new(config);

    config
        .paths
        .par_iter()
        .map(|file| {
            let res = check_path(file, Arc::clone(&config));
            (relativize_path(file), res)
        })
        .collect()
}

pub fn check_path(path: &PathBuf, config: Arc<Config>) -> Result<Vec<Diagnostic>, anyhow::Error> {
    if config.apply_fixes {
        lint_fix(path, config)
    } else {
        lint_only(path, config)
    }
}

pub fn lint_only(path: &PathBuf, config: Arc<Config>) -> Result<Vec<Diagnostic>, anyhow::Error> {
    let path = relativize_path(path);
    let contents = fs::read_to_string(Path::new(&path))
        .with_context(|| format!("Failed to read file: {path}"))?;

    let checks = get_checks(&contents, &PathBuf::from(&path), &config)
        .with_context(|| format!("Failed to get checks for file: {path}"))?;

    Ok(checks)
}

pub fn lint_fix(path: &PathBuf, config: Arc<Config>) -> Result<Vec<Diagnostic>, anyhow::Error> {
    let path = relativize_path(path);

    let mut has_skipped_fixes = true;
    let mut checks: Vec<Diagnostic>;

    loop {
        let contents = fs::read_to_string(Path::new(&path))
            .with_context(|| format!("Failed to read file: {path}",))?;

        checks = get_checks(&contents, &PathBuf::from(&path), &config)
            .with_context(|| format!("Failed to get checks for file: {path}",))?;

        if !has_skipped_fixes {
            break;
        }

        // Diagnostics of every selected rule are reported, but only the fixes
        // of `rules_to_fix` are written.
        let fixable: Vec<Diagnostic> = checks
            .iter()
            .filter(|d| {
                Rule::from_name(&d.message.name).is_some_and(|r| config.rules_to_fix.contains(&r))
            })
            .cloned()
            .collect();

        let (new_has_skipped_fixes, fixed_text) = apply_fixes(&fixable, &contents);
        has_skipped_fixes = new_has_skipped_fixes;

        if fixed_text == contents {
            break;
        }

        fs::write(&path, fixed_text).with_context(|| format!("Failed to write file: {path}",))?;
    }

    Ok(checks)
}

#[derive(Debug)]
// The object that collects diagnostics while walking the tree of one file.
// Everything it holds is dropped once the file is done, so nothing leaks from
// one file to the next.
pub struct Checker<'s> {
    // The diagnostics to report (possibly empty).
    pub diagnostics: Vec<Diagnostic>,
    // The rules to run on this file.
    pub rules: RuleSet,
    // The full text of the file, used by rules that look at the raw source
    // between nodes.
    pub source_text: &'s str,
    // Names bound by imports from the component library.
    pub imports: ImportAliasTracker,
}

impl<'s> Checker<'s> {
    fn new(source_text: &'s str, rules: RuleSet) -> Self {
        Self {
            diagnostics: vec![],
            rules,
            source_text,
            imports: ImportAliasTracker::new(),
        }
    }

    // This takes an Option<Diagnostic> because each lint rule reports a
    // Some(Diagnostic) or None.
    pub(crate) fn report_diagnostic(&mut self, diagnostic: Option<Diagnostic>) {
        if let Some(diagnostic) = diagnostic {
            self.diagnostics.push(diagnostic);
        }
    }

    pub(crate) fn report_diagnostics(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    pub(crate) fn is_rule_enabled(&self, rule: Rule) -> bool {
        self.rules.contains(&rule)
    }
}

impl<'a> Visit<'a> for Checker<'_> {
    fn visit_import_declaration(&mut self, it: &ImportDeclaration<'a>) {
        analyze::import_declaration::import_declaration(it, self);
        walk::walk_import_declaration(self, it);
    }

    fn visit_jsx_opening_element(&mut self, it: &JSXOpeningElement<'a>) {
        analyze::jsx_opening_element::jsx_opening_element(it, self);
        walk::walk_jsx_opening_element(self, it);
    }

    fn visit_object_expression(&mut self, it: &ObjectExpression<'a>) {
        analyze::object_expression::object_expression(it, self);
        walk::walk_object_expression(self, it);
    }
}

// Takes the code as a string, parses it, and obtains a (possibly empty)
// vector of `Diagnostic`s.
//
// If there are diagnostics to report, this is also where their range in the
// string is converted to their location (row, column).
pub fn get_checks(contents: &str, file: &Path, config: &Config) -> Result<Vec<Diagnostic>> {
    let start = Instant::now();

    let source_type = SourceType::from_path(file).unwrap_or_else(|_| SourceType::tsx());
    let allocator = Allocator::default();
    let parsed = Parser::new(&allocator, contents, source_type).parse();

    if parsed.panicked || !parsed.errors.is_empty() {
        return Err(ParseError { filename: file.to_path_buf() }.into());
    }

    let program = &parsed.program;
    let mut checker = Checker::new(contents, config.rules_to_apply.clone());

    // Imports are hoisted: a component can be used above the line that
    // imports it, so bindings are collected before the walk.
    for stmt in &program.body {
        if let Statement::ImportDeclaration(decl) = stmt {
            checker.imports.observe(decl);
        }
    }

    checker.visit_program(program);
    analyze::comments::comments(&program.comments, &mut checker);

    let loc_new_lines = find_new_lines(contents);
    let mut diagnostics: Vec<Diagnostic> = checker
        .diagnostics
        .into_iter()
        .map(|mut x| {
            x.filename = file.to_path_buf();
            x.location = Some(find_row_col(x.range.start, &loc_new_lines));
            x
        })
        .collect();
    diagnostics.sort();

    tracing::debug!(
        "Checked {} in {:?}: {} diagnostic(s)",
        file.display(),
        start.elapsed(),
        diagnostics.len()
    );

    Ok(diagnostics)
}
