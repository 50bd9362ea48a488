use annotate_snippets::{Level, Renderer, Snippet};
use clap::ValueEnum;
use colored::Colorize;
use muster_core::diagnostic::Diagnostic;
use muster_core::error::ParseError;
use muster_core::fs::relativize_path;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

fn use_colors() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}

fn show_hint_statistics(total_diagnostics: usize) {
    let n_violations = std::env::var("MUSTER_N_VIOLATIONS_HINT_STAT")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(15);
    if total_diagnostics > n_violations {
        println!(
            "\nMore than {n_violations} errors reported, use `--statistics` to get the count by rule."
        );
    }
}

// Parse errors are reported with their own message, other errors with their
// whole chain of causes.
pub fn print_errors(errors: &[(String, anyhow::Error)]) {
    for (_path, err) in errors {
        match err.chain().last() {
            Some(root_cause) if root_cause.is::<ParseError>() => {
                eprintln!("{}: {}", "Error".red().bold(), root_cause);
            }
            _ => eprintln!("{}: {:#}", "Error".red().bold(), err),
        }
    }
}

// Number of errors found and how many of them can be fixed.
fn print_summary(diagnostics: &[&Diagnostic], has_errors: bool, leading_newline: bool) {
    let total_diagnostics = diagnostics.len();
    let n_diagnostic_with_fixes = diagnostics.iter().filter(|d| d.has_safe_fix()).count();
    let n_diagnostic_with_unsafe_fixes = diagnostics.iter().filter(|d| d.has_unsafe_fix()).count();

    if total_diagnostics == 0 {
        if !has_errors {
            println!("All checks passed!");
        }
        return;
    }

    let prefix = if leading_newline { "\n" } else { "" };
    if total_diagnostics > 1 {
        println!("{prefix}Found {total_diagnostics} errors.");
    } else {
        println!("{prefix}Found 1 error.");
    }

    if n_diagnostic_with_fixes > 0 {
        let msg = if n_diagnostic_with_unsafe_fixes == 0 {
            format!("{n_diagnostic_with_fixes} fixable with the `--fix` option.")
        } else {
            let unsafe_label = if n_diagnostic_with_unsafe_fixes == 1 {
                "1 hidden fix".to_string()
            } else {
                format!("{n_diagnostic_with_unsafe_fixes} hidden fixes")
            };
            format!(
                "{n_diagnostic_with_fixes} fixable with the `--fix` option ({unsafe_label} can be enabled with the `--unsafe-fixes` option)."
            )
        };
        println!("{msg}");
    } else if n_diagnostic_with_unsafe_fixes > 0 {
        let label = if n_diagnostic_with_unsafe_fixes == 1 {
            "1 fix is".to_string()
        } else {
            format!("{n_diagnostic_with_unsafe_fixes} fixes are")
        };
        println!("{label} available with the `--fix --unsafe-fixes` option.");
    }

    show_hint_statistics(total_diagnostics);
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    diagnostics: Vec<&'a Diagnostic>,
    errors: Vec<JsonError>,
}

#[derive(Debug, Serialize)]
struct JsonError {
    file: String,
    error: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    /// Print diagnostics with full context using annotated code snippets
    Full,
    /// Print diagnostics in a concise format, one per line
    Concise,
    /// Print diagnostics as GitHub format
    Github,
    /// Print diagnostics as JSON
    Json,
}

/// Takes the diagnostics and parsing errors in each file and then displays
/// them in different ways depending on the `--output-format` provided by the
/// user.
pub trait Emitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        errors: &[(String, anyhow::Error)],
    ) -> anyhow::Result<()>;
}

pub struct ConciseEmitter;

impl Emitter for ConciseEmitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        errors: &[(String, anyhow::Error)],
    ) -> anyhow::Result<()> {
        let mut writer = BufWriter::new(writer);

        // First, print all parsing errors
        if !errors.is_empty() {
            writer.flush()?; // Flush before writing to stderr
            print_errors(errors);
        }

        // Cache relativized paths to avoid repeated filesystem operations
        let mut path_cache = HashMap::new();

        // Then, print the diagnostics.
        for diagnostic in diagnostics {
            let Some(loc) = diagnostic.location else {
                continue;
            };
            // Convert to 1-based for display
            let (row, col) = (loc.row(), loc.column() + 1);

            let relative_path = path_cache
                .entry(&diagnostic.filename)
                .or_insert_with(|| relativize_path(&diagnostic.filename));

            writeln!(
                writer,
                "{} [{}:{}] {} {}",
                relative_path.white(),
                row,
                col,
                diagnostic.message.name.red(),
                diagnostic.message.full_message()
            )?;
        }

        writer.flush()?; // Ensure all diagnostics are written before summary

        print_summary(diagnostics, !errors.is_empty(), true);

        Ok(())
    }
}

pub struct JsonEmitter;

impl Emitter for JsonEmitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        errors: &[(String, anyhow::Error)],
    ) -> anyhow::Result<()> {
        let mut writer = BufWriter::new(writer);

        // Convert errors to a serializable format
        let json_errors: Vec<JsonError> = errors
            .iter()
            .map(|(path, err)| JsonError { file: path.clone(), error: format!("{err:#}") })
            .collect();

        let output = JsonOutput {
            diagnostics: diagnostics.to_vec(),
            errors: json_errors,
        };

        serde_json::to_writer_pretty(&mut writer, &output)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

pub struct GithubEmitter;

impl Emitter for GithubEmitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        _errors: &[(String, anyhow::Error)],
    ) -> anyhow::Result<()> {
        let mut writer = BufWriter::new(writer);
        for diagnostic in diagnostics {
            let Some(loc) = diagnostic.location else {
                continue;
            };
            let (row, col) = (loc.row(), loc.column() + 1);

            // We want a message like this:
            // ::warning title=Muster (no-box-flex),file=src/App.tsx,line=4,col=5::src/App.tsx:4:5: [no-box-flex] Avoid etc.
            //
            // The location appears twice:
            // - one between the "::" markers: this is for the annotation to
            //   appear when we browse changed files in Github PR;
            // - one after the "::" marker: this is so that the workflow shows
            //   the location of diagnostics when we inspect the workflow itself,
            //   without the Github annotations.
            write!(
                writer,
                "::warning title=Muster ({}),file={file},line={row},col={col}::{file}:{row}:{col} ",
                diagnostic.message.name,
                file = diagnostic.filename.to_string_lossy()
            )?;

            writeln!(
                writer,
                "[{}] {}",
                diagnostic.message.name,
                diagnostic.message.full_message()
            )?;
        }

        writer.flush()?;
        Ok(())
    }
}

pub struct FullEmitter;

impl Emitter for FullEmitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        errors: &[(String, anyhow::Error)],
    ) -> anyhow::Result<()> {
        let mut writer = BufWriter::new(writer);
        let renderer = if use_colors() {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        // First, print all parsing errors
        if !errors.is_empty() {
            writer.flush()?; // Flush before writing to stderr
            print_errors(errors);
            if !diagnostics.is_empty() {
                eprintln!(); // Add separator between errors and diagnostics
            }
        }

        // Cache file contents and relativized paths
        let mut file_cache: HashMap<&Path, String> = HashMap::new();
        let mut path_cache = HashMap::new();

        // Pre-load all files into cache
        for diagnostic in diagnostics {
            if file_cache.contains_key(diagnostic.filename.as_path()) {
                continue;
            }
            match fs::read_to_string(&diagnostic.filename) {
                Ok(content) => {
                    file_cache.insert(diagnostic.filename.as_path(), content);
                }
                Err(err) => {
                    writer.flush()?; // Flush before writing to stderr
                    eprintln!(
                        "Warning: Could not read source file {}: {}",
                        diagnostic.filename.display(),
                        err
                    );
                }
            }
        }

        for diagnostic in diagnostics {
            // Get the source file from cache
            let Some(source) = file_cache.get(diagnostic.filename.as_path()) else {
                continue; // Skip if file couldn't be read
            };

            let file_path = path_cache
                .entry(&diagnostic.filename)
                .or_insert_with(|| relativize_path(&diagnostic.filename));

            let snippet = Snippet::source(source)
                .origin(file_path)
                .fold(true)
                .annotation(
                    Level::Warning
                        .span(diagnostic.range.start..diagnostic.range.end)
                        .label(&diagnostic.message.body),
                );

            let mut message = Level::Warning
                .title(&diagnostic.message.name)
                .snippet(snippet);

            // Add suggestion as a footer message if present
            if let Some(suggestion_text) = &diagnostic.message.suggestion {
                message = message.footer(Level::Help.title(suggestion_text));
            }

            let rendered = renderer.render(message);
            writeln!(writer, "{rendered}\n")?;
        }

        writer.flush()?; // Ensure all diagnostics are written before summary

        print_summary(diagnostics, !errors.is_empty(), false);

        Ok(())
    }
}
