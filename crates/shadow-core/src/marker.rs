//! Sentinel delimiter conventions
//!
//! A sentinel is a comment whose text starts with `@`: `#@+node:...` for a
//! single-line delimiter, `<!--@+node:...-->` for a block pair.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::language::{self, Delims, UNKNOWN_LANGUAGE};

/// Payload of the escape sentinel.
pub const VERBATIM: &str = "verbatim";

/// How many leading lines may precede the `@+leo` header (`@first` lines).
const HEADER_SCAN_LIMIT: usize = 10;

/// Matches the `@+leo` header and captures the surrounding comment delimiters.
static LEO_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?P<open>\S+?)@\+leo(?:-ver=[0-9.]+)?(?:-thin)?(?:-encoding=[^,.\s]*(?:,\.|\.))?(?P<close>\S*)\s*$",
    )
    .expect("Invalid leo header regex")
});

/// The comment-delimiter convention used to recognize sentinel lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Single-line delimiter such as `#` or `//`.
    Line { delim: String },
    /// Block pair such as `<!--` / `-->`.
    Block { open: String, close: String },
}

impl Marker {
    pub fn line(delim: impl Into<String>) -> Self {
        Self::Line {
            delim: delim.into(),
        }
    }

    pub fn block(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self::Block {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Recover the marker from an `@+leo` header line.
    ///
    /// Returns `None` if `line` is not a header.
    pub fn from_sentinel_line(line: &str) -> Option<Self> {
        let caps = LEO_HEADER.captures(line)?;
        let open = caps.name("open")?.as_str();
        let close = caps.name("close").map(|m| m.as_str()).unwrap_or("");

        if close.is_empty() {
            Some(Self::line(open))
        } else {
            Some(Self::block(open, close))
        }
    }

    /// Find the header among the first lines of an annotated file.
    pub fn scan<S: AsRef<str>>(lines: &[S]) -> Option<Self> {
        lines
            .iter()
            .take(HEADER_SCAN_LIMIT)
            .find_map(|line| Self::from_sentinel_line(line.as_ref()))
    }

    /// Build a marker from parsed delimiters, preferring the single-line form.
    pub fn from_delims(delims: &Delims) -> Option<Self> {
        match (&delims.line, &delims.block) {
            (Some(delim), _) => Some(Self::line(delim.clone())),
            (None, Some((open, close))) => Some(Self::block(open.clone(), close.clone())),
            (None, None) => None,
        }
    }

    /// Marker for a language from the built-in table.
    ///
    /// Falls back to `default`, then to the unknown-language marker.
    pub fn from_language(language: &str, default: &str) -> Self {
        [language, default, UNKNOWN_LANGUAGE]
            .into_iter()
            .filter_map(language::comment_delims)
            .find_map(|d| Self::from_delims(&d))
            .unwrap_or_else(|| Self::line("#--unknown-language--"))
    }

    /// `(delim, "")` for single-line markers, `(open, close)` for block markers.
    pub fn get_delims(&self) -> (&str, &str) {
        match self {
            Self::Line { delim } => (delim, ""),
            Self::Block { open, close } => (open, close),
        }
    }

    /// Is `line` a sentinel whose payload starts with `suffix`?
    pub fn is_sentinel(&self, line: &str, suffix: &str) -> bool {
        let trimmed = line.trim();
        let (open, close) = self.get_delims();

        let Some(rest) = trimmed.strip_prefix(open).and_then(|r| r.strip_prefix('@')) else {
            return false;
        };
        rest.starts_with(suffix) && trimmed.ends_with(close)
    }

    /// Is `line` the escape sentinel?
    pub fn is_verbatim_sentinel(&self, line: &str) -> bool {
        self.is_sentinel(line, VERBATIM) && self.payload(line) == Some(VERBATIM)
    }

    /// Text between `delim@` (or `open@`) and the end (or `close`).
    pub fn payload<'a>(&self, line: &'a str) -> Option<&'a str> {
        let trimmed = line.trim();
        let (open, close) = self.get_delims();
        let rest = trimmed.strip_prefix(open)?.strip_prefix('@')?;
        let rest = rest.strip_suffix(close)?;
        Some(rest.trim_end())
    }

    /// The escape line written before content that looks like a sentinel.
    pub fn verbatim_line(&self) -> String {
        let (open, close) = self.get_delims();
        format!("{open}@{VERBATIM}{close}\n")
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line { delim } => write!(f, "{delim}@"),
            Self::Block { open, close } => write!(f, "{open}@ ... {close}"),
        }
    }
}
