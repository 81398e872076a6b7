//! Filename filtering for archive creation.
//!
//! Patterns are shell-style globs (`*`, `?`, `[seq]`, `[!seq]`) and are
//! always matched against a file's base name, never against its directory
//! segments.

use glob::MatchOptions;
use glob::Pattern;

/// Include/exclude pattern pair governing which files enter an archive.
///
/// An empty include list matches every name. Exclude patterns always win
/// over include patterns.
///
/// # Examples
///
/// ```
/// use zipstamp_core::creation::FilterSpec;
///
/// let filter = FilterSpec::default()
///     .with_include(vec!["*.txt".to_string()])
///     .with_exclude(vec!["secret*".to_string()]);
///
/// assert!(filter.matches("notes.txt"));
/// assert!(!filter.matches("secret.txt"));
/// assert!(!filter.matches("build.log"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Glob patterns a name must match (any of) to be included.
    pub include: Vec<String>,

    /// Glob patterns that exclude a name when any of them match.
    pub exclude: Vec<String>,
}

impl FilterSpec {
    /// Creates a filter that accepts every file name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the include patterns.
    #[must_use]
    pub fn with_include(mut self, patterns: Vec<String>) -> Self {
        self.include = patterns;
        self
    }

    /// Sets the exclude patterns.
    #[must_use]
    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = patterns;
        self
    }

    /// Returns `true` if a file with this base name belongs in the archive.
    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        should_include(file_name, &self.include, &self.exclude)
    }
}

/// Decides whether a file enters the archive.
///
/// - With a non-empty `include`, the name must match at least one pattern.
/// - A match against any `exclude` pattern rejects the name.
/// - Otherwise the name is accepted.
///
/// # Examples
///
/// ```
/// use zipstamp_core::creation::filters::should_include;
///
/// let txt = vec!["*.txt".to_string()];
/// let secret = vec!["secret*".to_string()];
///
/// assert!(should_include("file.txt", &txt, &[]));
/// assert!(!should_include("file.log", &txt, &[]));
/// assert!(!should_include("secret.txt", &txt, &secret));
/// assert!(should_include::<&str>("data.csv", &[], &[]));
/// ```
#[must_use]
pub fn should_include<S: AsRef<str>>(file_name: &str, include: &[S], exclude: &[S]) -> bool {
    if !include.is_empty() && !include.iter().any(|p| matches_pattern(file_name, p.as_ref())) {
        return false;
    }

    !exclude.iter().any(|p| matches_pattern(file_name, p.as_ref()))
}

/// Matches a base name against one shell-style glob pattern.
///
/// Runs of `*` behave like a single `*`, since names carry no separators
/// for a recursive wildcard to cross. A pattern that still fails to compile
/// (for example an unclosed `[`) is matched as a literal string instead.
///
/// # Examples
///
/// ```
/// use zipstamp_core::creation::filters::matches_pattern;
///
/// assert!(matches_pattern("report.txt", "*.txt"));
/// assert!(matches_pattern("file1.log", "file?.log"));
/// assert!(matches_pattern("b.txt", "[abc].txt"));
/// assert!(!matches_pattern("d.txt", "[abc].txt"));
///
/// // Malformed pattern: literal comparison
/// assert!(matches_pattern("a[b", "a[b"));
/// assert!(!matches_pattern("ab", "a[b"));
/// ```
#[must_use]
pub fn matches_pattern(file_name: &str, pattern: &str) -> bool {
    match Pattern::new(&collapse_stars(pattern)) {
        Ok(compiled) => compiled.matches_with(file_name, match_options()),
        Err(_) => file_name == pattern,
    }
}

fn collapse_stars(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if c == '*' && out.ends_with('*') {
            continue;
        }
        out.push(c);
    }
    out
}

/// Case sensitivity follows the host filesystem convention.
const fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: !cfg!(windows),
        require_literal_separator: false,
        require_literal_leading_dot: false,
    }
}
