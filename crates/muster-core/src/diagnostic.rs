use oxc_span::Span;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::PathBuf;

use crate::location::Location;
use crate::rule_set::{FixStatus, Rule};

/// Byte range in the source text, `start..end`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Span> for TextRange {
    fn from(span: Span) -> Self {
        Self::new(span.start as usize, span.end as usize)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
// The edit to apply to the violation: replace `start..end` with `content`.
pub struct Fix {
    pub content: String,
    pub start: usize,
    pub end: usize,
}

impl Fix {
    pub fn new(content: impl Into<String>, range: TextRange) -> Self {
        Self { content: content.into(), start: range.start, end: range.end }
    }

    /// Remove the text covered by `range`.
    pub fn deletion(range: TextRange) -> Self {
        Self::new("", range)
    }
}

/// Details on the violated rule.
pub trait Violation {
    /// Name of the rule.
    fn name(&self) -> String;
    /// Explanation of the rule.
    fn body(&self) -> String;
    /// Optional suggestion for how to fix the violation.
    fn suggestion(&self) -> Option<String> {
        None
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ViolationData {
    pub name: String,
    pub body: String,
    pub suggestion: Option<String>,
}

impl<T: Violation> From<T> for ViolationData {
    fn from(value: T) -> Self {
        Self {
            name: Violation::name(&value),
            body: Violation::body(&value),
            suggestion: Violation::suggestion(&value),
        }
    }
}

impl ViolationData {
    pub fn new(name: String, body: String, suggestion: Option<String>) -> Self {
        Self { name, body, suggestion }
    }

    /// The body followed by the suggestion, if any.
    pub fn full_message(&self) -> String {
        match &self.suggestion {
            Some(suggestion) => format!("{} {}", self.body, suggestion),
            None => self.body.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
// The object that is eventually reported and printed in the console.
pub struct Diagnostic {
    // The name and description of the violated rule.
    pub message: ViolationData,
    // Location of the violated rule.
    pub filename: PathBuf,
    pub range: TextRange,
    pub location: Option<Location>,
    // Edit to apply if the user passed `--fix`.
    pub fix: Option<Fix>,
}

impl Diagnostic {
    pub fn new<T: Into<ViolationData>>(message: T, range: TextRange, fix: Option<Fix>) -> Self {
        Self {
            message: message.into(),
            range,
            location: None,
            fix,
            filename: "".into(),
        }
    }

    fn fix_status(&self) -> FixStatus {
        Rule::from_name(&self.message.name)
            .map(Rule::fix_status)
            .unwrap_or_default()
    }

    pub fn has_safe_fix(&self) -> bool {
        self.fix.is_some() && self.fix_status() == FixStatus::Safe
    }
    pub fn has_unsafe_fix(&self) -> bool {
        self.fix.is_some() && self.fix_status() == FixStatus::Unsafe
    }
    pub fn has_no_fix(&self) -> bool {
        self.fix.is_none() || self.fix_status() == FixStatus::None
    }
}

impl Ord for Diagnostic {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare first by filename, then by range
        match self.filename.cmp(&other.filename) {
            Ordering::Equal => self.range.cmp(&other.range),
            other => other,
        }
    }
}

impl PartialOrd for Diagnostic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
