use regex::Regex;
use serde::{Serialize, Deserialize};

use crate::utils::error::{BoxResult, TocError};

/// A single heading extracted from a rendered document, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level (h1 = 1, h2 = 2, etc.)
    pub depth: usize,
    /// Display text of the heading
    pub value: String,
    /// In-page anchor reference, e.g. "#installation"
    pub url: String,
}

impl Heading {
    pub fn new(depth: usize, value: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            depth,
            value: value.into(),
            url: url.into(),
        }
    }
}

/// A heading paired with its nested child headings.
///
/// Built fresh on every render from the current heading sequence; never
/// cached or mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocNode {
    pub heading: Heading,
    pub children: Vec<TocNode>,
}

impl TocNode {
    pub fn new(heading: Heading) -> Self {
        Self {
            heading,
            children: Vec::new(),
        }
    }
}

/// Heading-text exclusion patterns: a single pattern or a list of patterns
/// joined with `|` into one alternation.
///
/// Entries are used verbatim as regex alternatives. Metacharacters are not
/// escaped, so a caller supplying them gets regex semantics, not
/// literal-string semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Exclude {
    Single(String),
    Many(Vec<String>),
}

impl Default for Exclude {
    fn default() -> Self {
        Exclude::Single(String::new())
    }
}

impl Exclude {
    /// Body of the alternation, before anchoring
    pub fn pattern_body(&self) -> String {
        match self {
            Exclude::Single(pattern) => pattern.clone(),
            Exclude::Many(patterns) => patterns.join("|"),
        }
    }

    /// Compile to a case-insensitive, whole-string-anchored matcher.
    ///
    /// The empty default compiles to a pattern matching only the empty
    /// string, so no heading is excluded.
    pub fn to_regex(&self) -> BoxResult<Regex> {
        let pattern = format!("(?i)^(?:{})$", self.pattern_body());
        let regex = Regex::new(&pattern).map_err(|e| {
            TocError::Pattern(format!("invalid exclude pattern {:?}: {}", pattern, e))
        })?;
        Ok(regex)
    }
}

/// Options for table of contents generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocOptions {
    /// Minimum heading depth to include
    #[serde(default = "default_from_heading")]
    pub from_heading: usize,

    /// Maximum heading depth to include
    #[serde(default = "default_to_heading")]
    pub to_heading: usize,

    /// Accepted for compatibility with existing caller configs; indentation
    /// is currently computed from heading depth alone and this value is not
    /// consulted.
    #[serde(default = "default_indent_depth")]
    pub indent_depth: usize,

    /// Wrap the rendered list in a collapsible, default-open container
    #[serde(default)]
    pub as_disclosure: bool,

    /// Heading-text exclusion pattern(s)
    #[serde(default)]
    pub exclude: Exclude,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            from_heading: default_from_heading(),
            to_heading: default_to_heading(),
            indent_depth: default_indent_depth(),
            as_disclosure: false,
            exclude: Exclude::default(),
        }
    }
}

fn default_from_heading() -> usize {
    1
}

fn default_to_heading() -> usize {
    6
}

fn default_indent_depth() -> usize {
    3
}
