//! Rule-based extraction of responsibilities, requirements, nice-to-haves and
//! work type from a raw job description.
//!
//! Everything here only selects or trims text that is already in the input.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::composer::text::{split_sentences, trimmed_lines, truncate};

/// Max sentence-derived responsibilities. Bulleted lists are not capped.
pub const MAX_SENTENCE_RESPONSIBILITIES: usize = 6;
pub const RAW_RESPONSIBILITY_MAX_CHARS: usize = 300;
pub const MAX_REQUIREMENT_CLAUSES: usize = 4;
pub const MAX_REQUIREMENTS: usize = 12;
pub const MAX_FALLBACK_REQUIREMENTS: usize = 6;
pub const FALLBACK_REQUIREMENT_MAX_CHARS: usize = 180;
pub const MAX_NICE_TO_HAVE: usize = 6;

const RESPONSIBILITY_VERBS: &[&str] = &[
    "develop",
    "build",
    "design",
    "lead",
    "manage",
    "collaborate",
    "implement",
    "maintain",
    "optimize",
    "deliver",
    "own",
];

static RE_DASH_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-•*]\s+").unwrap());
static RE_NUMBER_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.\s+").unwrap());
static RE_REQUIREMENT_CLAUSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(requirements|must have|must|required|experience|years|proficient|proficiency)[^.\n]*",
    )
    .unwrap()
});
static RE_REQUIREMENT_SENTENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)experience|proficient|knowledge|degree|years").unwrap());
static RE_NICE_TO_HAVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)nice to have|prefer|bonus|familiar|experience with").unwrap()
});
static RE_WORK_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)remote|hybrid|on[- ]?site").unwrap());

/// Where the Requirements section content came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirements {
    /// Caller skills plus keyword clauses, deduplicated. Rendered as-is.
    Primary(Vec<String>),
    /// Requirement-like sentences, used only when the primary list is empty.
    /// Rendered truncated to [`FALLBACK_REQUIREMENT_MAX_CHARS`].
    Fallback(Vec<String>),
}

impl Requirements {
    pub fn items(&self) -> &[String] {
        match self {
            Requirements::Primary(items) | Requirements::Fallback(items) => items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// Responsibilities in priority order: bulleted lines, else verb sentences
/// (at most 6), else the whole text truncated to 300 characters.
pub fn extract_responsibilities(raw_jd: &str) -> Vec<String> {
    let bulleted = bulleted_lines(raw_jd);
    if !bulleted.is_empty() {
        return bulleted;
    }

    let by_verb: Vec<String> = split_sentences(raw_jd)
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter(|s| {
            let lower = s.to_lowercase();
            RESPONSIBILITY_VERBS.iter().any(|v| lower.contains(v))
        })
        .take(MAX_SENTENCE_RESPONSIBILITIES)
        .map(str::to_string)
        .collect();
    if !by_verb.is_empty() {
        return by_verb;
    }

    if raw_jd.is_empty() {
        Vec::new()
    } else {
        vec![truncate(raw_jd, RAW_RESPONSIBILITY_MAX_CHARS)]
    }
}

/// Lines starting with `-`, `•`, `*` or `<digits>.` followed by whitespace, marker stripped.
fn bulleted_lines(raw_jd: &str) -> Vec<String> {
    trimmed_lines(raw_jd)
        .into_iter()
        .filter(|l| RE_DASH_BULLET.is_match(l) || RE_NUMBER_BULLET.is_match(l))
        .map(|l| {
            let l = RE_DASH_BULLET.replace(l, "");
            RE_NUMBER_BULLET.replace(&l, "").into_owned()
        })
        .collect()
}

/// Caller skills first, then up to 4 keyword clauses from the text; deduplicated
/// by exact match and capped at 12. Falls back to requirement-like sentences when
/// that list is empty.
pub fn extract_requirements(raw_jd: &str, skills: &[String]) -> Requirements {
    let clauses = RE_REQUIREMENT_CLAUSE
        .find_iter(raw_jd)
        .take(MAX_REQUIREMENT_CLAUSES)
        .map(|m| m.as_str().trim().to_string());

    let mut seen = HashSet::new();
    let primary: Vec<String> = skills
        .iter()
        .cloned()
        .chain(clauses)
        .filter(|r| seen.insert(r.clone()))
        .take(MAX_REQUIREMENTS)
        .collect();

    if !primary.is_empty() {
        return Requirements::Primary(primary);
    }

    let fallback = split_sentences(raw_jd)
        .into_iter()
        .filter(|s| RE_REQUIREMENT_SENTENCE.is_match(s))
        .take(MAX_FALLBACK_REQUIREMENTS)
        .map(str::to_string)
        .collect();
    Requirements::Fallback(fallback)
}

/// Lines mentioning nice-to-have phrasing, at most 6, untruncated.
pub fn extract_nice_to_have(raw_jd: &str) -> Vec<String> {
    trimmed_lines(raw_jd)
        .into_iter()
        .filter(|l| RE_NICE_TO_HAVE.is_match(l))
        .take(MAX_NICE_TO_HAVE)
        .map(str::to_string)
        .collect()
}

/// First `remote` / `hybrid` / `onsite` mention, verbatim as written.
pub fn detect_work_type(raw_jd: &str) -> Option<&str> {
    RE_WORK_TYPE.find(raw_jd).map(|m| m.as_str())
}
