//! Line predicates used by the scanner.
//!
//! Each function looks at one trimmed line (or a candidate title found by
//! lookahead) and answers a single question. None of them keep state, so the
//! precedence between them lives entirely in [`crate::pipeline::scan`].
//!
//! The shape tests (digit patterns, length bounds, capitalisation) are fixed
//! here; the literal exceptions come from [`HeadingRules`].

use crate::config::HeadingRules;
use once_cell::sync::Lazy;
use regex::Regex;

/// Section titles found by lookahead must be this long (in characters)...
const SECTION_TITLE_MIN: usize = 4;
/// ...and no longer than this.
const SECTION_TITLE_MAX: usize = 80;
/// Subsection titles must be strictly longer than this.
const SUBSECTION_TITLE_MIN_EXCLUSIVE: usize = 12;
/// A line following a lone page number must be shorter than this.
const PAGE_NUMBER_FOLLOWER_MAX_EXCLUSIVE: usize = 4;

static RE_AFFILIATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d*]+\s+University").unwrap());

static RE_SECTION_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[2-9]$").unwrap());

static RE_INLINE_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})\s{2,}(.+)$").unwrap());

static RE_SUBSECTION_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[2-5]\.\d{1,2}$").unwrap());

static RE_INLINE_SUBSECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}\.\d{1,2})\s*(.+)$").unwrap());

static RE_PAGE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,2}$").unwrap());

/// Numbers, tick labels and scientific notation, e.g. `0.5`, `-1e-3`, `10 20 30`.
static RE_NUMERIC_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d.\s\-eE+]+$").unwrap());

/// The same characters as a prefix. Inline subsection titles are rejected on
/// any such start, which includes titles beginning with `e` or `E`.
static RE_NUMERIC_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d.\s\-eE+]+").unwrap());

/// Decimal digits of any script (Unicode `Nd`).
static RE_ALL_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

// ── Front matter ─────────────────────────────────────────────────────────────

/// `true` for a title-block line that should be dropped: listed literally in
/// `rules`, or an affiliation line such as `1 University of ...` / `* University ...`.
pub fn is_front_matter(line: &str, rules: &HeadingRules) -> bool {
    rules.is_listed_front_matter(line) || RE_AFFILIATION.is_match(line)
}

/// `true` for the line that opens the abstract.
pub fn is_abstract_heading(line: &str, rules: &HeadingRules) -> bool {
    line.to_lowercase() == rules.abstract_heading.to_lowercase()
}

// ── Sections ─────────────────────────────────────────────────────────────────

/// `true` for a lone section number `2`–`9` waiting for its title on a later line.
pub fn is_section_number(line: &str) -> bool {
    RE_SECTION_NUMBER.is_match(line)
}

/// `true` when `title` can follow a lone section number.
///
/// Embedded figures leave axis labels and tick values right after stray
/// digits, so the title must start with an uppercase letter, be of moderate
/// length, not be numeric, and not be a listed false positive.
pub fn is_section_title(title: &str, rules: &HeadingRules) -> bool {
    let len = title.chars().count();
    (SECTION_TITLE_MIN..=SECTION_TITLE_MAX).contains(&len)
        && title.chars().next().is_some_and(char::is_uppercase)
        && !RE_NUMERIC_NOISE.is_match(title)
        && !rules.denies_section_title(title)
}

/// Parse `"2    Setup of the Model"` into its title.
///
/// Matched against the untrimmed line: an indented number is not a heading.
pub fn inline_section_title(line: &str) -> Option<&str> {
    let caps = RE_INLINE_SECTION.captures(line)?;
    let title = caps.get(2)?.as_str().trim();
    let non_trivial = title.chars().count() > 1 && !RE_ALL_DIGITS.is_match(title);
    non_trivial.then_some(title)
}

// ── Subsections ──────────────────────────────────────────────────────────────

/// `true` for a lone subsection number `2.1`–`5.99`.
pub fn is_subsection_number(line: &str) -> bool {
    RE_SUBSECTION_NUMBER.is_match(line)
}

/// `true` when `title` can follow a subsection number, either on a later line
/// or on the same line.
pub fn is_subsection_title(title: &str, rules: &HeadingRules) -> bool {
    title.chars().count() > SUBSECTION_TITLE_MIN_EXCLUSIVE
        && title.chars().next().is_some_and(char::is_alphabetic)
        && !RE_NUMERIC_NOISE.is_match(title)
        && !rules.denies_subsection_title(title)
}

/// Parse `"2.1  A Huggett Model"` into its title, if the title qualifies.
///
/// Stricter than the lookahead form: the title must not even start with a
/// digit, dot, sign or `e`/`E`.
pub fn inline_subsection_title<'a>(line: &'a str, rules: &HeadingRules) -> Option<&'a str> {
    let caps = RE_INLINE_SUBSECTION.captures(line)?;
    let title = caps.get(2)?.as_str().trim();
    (is_subsection_title(title, rules) && !RE_NUMERIC_PREFIX.is_match(title)).then_some(title)
}

// ── Noise ────────────────────────────────────────────────────────────────────

/// `true` for a 1–2 digit line that could be a running page number.
pub fn is_page_number(line: &str) -> bool {
    RE_PAGE_NUMBER.is_match(line)
}

/// `true` when the line right after a page-number candidate is blank or too
/// short to be prose.
pub fn follows_page_number(next: &str) -> bool {
    next.chars().count() < PAGE_NUMBER_FOLLOWER_MAX_EXCLUSIVE
}
