//! The options bag accepted by [`KeepConsole::new`](crate::KeepConsole::new).

use std::{collections::HashSet, fmt};

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Marker used when no `keepComments` are configured.
pub const DEFAULT_KEEP_COMMENT: &str = "keep-console";

/// Console members browsers and Node expose. Used to flag likely typos in `includes`.
pub const KNOWN_CONSOLE_METHODS: &[&str] = &[
    "debug",
    "error",
    "info",
    "log",
    "warn",
    "dir",
    "dirxml",
    "table",
    "trace",
    "group",
    "groupCollapsed",
    "groupEnd",
    "clear",
    "count",
    "countReset",
    "assert",
    "profile",
    "profileEnd",
    "time",
    "timeLog",
    "timeEnd",
    "timeStamp",
    "context",
    "createTask",
    "memory",
];

/// Options controlling which calls are stripped and which files are touched.
///
/// Every field is optional when deserialized:
///
/// ```json
/// {
///   "includes": ["log", "debug"],
///   "external": ["src/components", { "pattern": "pages/.*\\.tsx$" }],
///   "keepComments": ["keep-console", "preserve-log"]
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeepConsoleOptions {
    /// Console members to act on. Empty means every member.
    #[serde(default)]
    pub includes: Vec<String>,
    /// Paths to process. Empty means every supported file.
    #[serde(default)]
    pub external: Vec<PathFilter>,
    /// Comment substrings that keep a call.
    #[serde(default = "default_keep_comments")]
    pub keep_comments: Vec<String>,
}

fn default_keep_comments() -> Vec<String> {
    vec![DEFAULT_KEEP_COMMENT.to_string()]
}

impl Default for KeepConsoleOptions {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            external: Vec::new(),
            keep_comments: default_keep_comments(),
        }
    }
}

impl KeepConsoleOptions {
    /// Names in `includes` that are not known console members.
    pub fn unknown_includes(&self) -> Vec<&str> {
        self.includes
            .iter()
            .map(String::as_str)
            .filter(|name| !KNOWN_CONSOLE_METHODS.contains(name))
            .collect()
    }
}

/// Restricts the transform to matching file paths.
#[derive(Clone, Deserialize, Serialize)]
#[serde(try_from = "RawPathFilter", into = "RawPathFilter")]
pub enum PathFilter {
    /// Substring match after normalizing `\` to `/` on both sides.
    Literal(String),
    /// Regular expression tested against the raw path.
    Pattern(Regex),
}

impl PathFilter {
    pub fn literal(value: impl Into<String>) -> Self {
        PathFilter::Literal(value.into())
    }

    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(PathFilter::Pattern)
    }

    /// Parse the CLI form: `re:<regex>` is a pattern, anything else a literal.
    pub fn parse_cli(value: &str) -> Result<Self, regex::Error> {
        match value.strip_prefix("re:") {
            Some(pattern) => Self::pattern(pattern),
            None => Ok(Self::literal(value)),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathFilter::Literal(literal) => {
                normalize_separators(path).contains(&normalize_separators(literal))
            }
            PathFilter::Pattern(regex) => regex.is_match(path),
        }
    }
}

impl fmt::Debug for PathFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathFilter::Literal(literal) => f.debug_tuple("Literal").field(literal).finish(),
            PathFilter::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
        }
    }
}

impl PartialEq for PathFilter {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PathFilter::Literal(a), PathFilter::Literal(b)) => a == b,
            (PathFilter::Pattern(a), PathFilter::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

/// Serialized shape of [`PathFilter`]: a bare string or `{ "pattern": "..." }`.
#[derive(Deserialize, Serialize)]
#[serde(untagged)]
enum RawPathFilter {
    Literal(String),
    Pattern { pattern: String },
}

impl TryFrom<RawPathFilter> for PathFilter {
    type Error = regex::Error;

    fn try_from(raw: RawPathFilter) -> Result<Self, Self::Error> {
        match raw {
            RawPathFilter::Literal(literal) => Ok(PathFilter::Literal(literal)),
            RawPathFilter::Pattern { pattern } => PathFilter::pattern(&pattern),
        }
    }
}

impl From<PathFilter> for RawPathFilter {
    fn from(filter: PathFilter) -> Self {
        match filter {
            PathFilter::Literal(literal) => RawPathFilter::Literal(literal),
            PathFilter::Pattern(regex) => RawPathFilter::Pattern {
                pattern: regex.as_str().to_string(),
            },
        }
    }
}

fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// The configured keep markers. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeepMarkers(Vec<String>);

impl KeepMarkers {
    /// Build from configured markers, falling back to [`DEFAULT_KEEP_COMMENT`] when empty.
    pub fn new(markers: Vec<String>) -> Self {
        if markers.is_empty() {
            Self(default_keep_comments())
        } else {
            Self(markers)
        }
    }

    /// True if `text` contains any marker (case-sensitive substring).
    pub fn matches(&self, text: &str) -> bool {
        self.0.iter().any(|marker| text.contains(marker.as_str()))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for KeepMarkers {
    fn default() -> Self {
        Self(default_keep_comments())
    }
}

/// Immutable, validated form of [`KeepConsoleOptions`].
#[derive(Debug, Clone)]
pub(crate) struct ResolvedOptions {
    pub includes: HashSet<String>,
    pub external: Vec<PathFilter>,
    pub markers: KeepMarkers,
}

impl From<KeepConsoleOptions> for ResolvedOptions {
    fn from(options: KeepConsoleOptions) -> Self {
        Self {
            includes: options.includes.into_iter().collect(),
            external: options.external,
            markers: KeepMarkers::new(options.keep_comments),
        }
    }
}

impl ResolvedOptions {
    /// True if `path` passes the `external` filters (always true when none are set).
    pub fn accepts_path(&self, path: &str) -> bool {
        self.external.is_empty() || self.external.iter().any(|filter| filter.matches(path))
    }
}
