//! Configuration types for text-to-LaTeX conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. It bundles two independent tables:
//!
//! * [`DocumentHeader`] — the preamble and title block written ahead of the
//!   converted body (document class, packages, title, authors, date).
//! * [`HeadingRules`] — the allow-lists and deny-lists the scanner consults
//!   when deciding whether a line is front matter, a heading, or body text.
//!
//! The defaults of both reproduce the one paper the heuristics were tuned
//! against. The rule tables are data: swapping them changes what is matched,
//! never how matching works.

use crate::error::Txt2TexError;
use serde::{Deserialize, Serialize};

/// Configuration for a text-to-LaTeX conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use txt2tex::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .title("A Different Paper")
///     .authors(["Ada Lovelace", "Charles Babbage"])
///     .date("1843")
///     .build()
///     .unwrap();
/// assert_eq!(config.header.authors.len(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Preamble and title block of the generated document.
    pub header: DocumentHeader,

    /// Tables driving front-matter and heading recognition.
    pub rules: HeadingRules,
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn header(mut self, header: DocumentHeader) -> Self {
        self.config.header = header;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.header.title = title.into();
        self
    }

    pub fn authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.header.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.config.header.date = date.into();
        self
    }

    pub fn rules(mut self, rules: HeadingRules) -> Self {
        self.config.rules = rules;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Txt2TexError> {
        let h = &self.config.header;
        if h.document_class.trim().is_empty() {
            return Err(Txt2TexError::InvalidConfig(
                "document class must not be empty".into(),
            ));
        }
        if h.title.trim().is_empty() {
            return Err(Txt2TexError::InvalidConfig(
                "title must not be empty".into(),
            ));
        }
        // An empty marker would match every line (prefix) or only blank lines (exact).
        let r = &self.config.rules;
        for (name, value) in [
            ("abstract heading", &r.abstract_heading),
            ("acknowledgement prefix", &r.acknowledgement_prefix),
            ("first section number", &r.first_section_number),
            ("first section title", &r.first_section_title),
        ] {
            if value.trim().is_empty() {
                return Err(Txt2TexError::InvalidConfig(format!(
                    "{name} must not be empty"
                )));
            }
        }
        Ok(self.config)
    }
}

// ── Document header ──────────────────────────────────────────────────────

/// Fixed front part of the generated document.
///
/// Title, authors and date are written verbatim: they are LaTeX source, not
/// text extracted from the input, so they are not escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentHeader {
    /// `\documentclass` name. Default: `article`.
    pub document_class: String,

    /// `\documentclass` options. Default: `11pt,a4paper`.
    pub class_options: Option<String>,

    /// Raw preamble lines written in order after `\documentclass`
    /// (`\usepackage`, `\geometry`, macro definitions).
    pub preamble: Vec<String>,

    pub title: String,

    /// Joined with `", "` inside `\author{}`.
    pub authors: Vec<String>,

    pub date: String,
}

impl Default for DocumentHeader {
    fn default() -> Self {
        Self {
            document_class: "article".into(),
            class_options: Some("11pt,a4paper".into()),
            preamble: vec![
                r"\usepackage[utf8]{inputenc}".into(),
                r"\usepackage[T1]{fontenc}".into(),
                r"\usepackage{geometry}".into(),
                r"\geometry{margin=1in}".into(),
                r"\usepackage{parskip}".into(),
                r"\usepackage{amsmath,amssymb}".into(),
            ],
            title: "Structural Reinforcement Learning for Heterogeneous Agent Macroeconomics"
                .into(),
            authors: vec![
                "Yucheng Yang".into(),
                "Chiyuan Wang".into(),
                "Andreas Schaab".into(),
                "Benjamin Moll".into(),
            ],
            date: "Preliminary, December 2025".into(),
        }
    }
}

// ── Heading rules ────────────────────────────────────────────────────────

/// Literal tables consulted by the scanner.
///
/// Every entry is compared against a line after surrounding whitespace has
/// been trimmed. Exact entries must match the whole line; prefix and
/// substring entries are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingRules {
    /// Line that opens the abstract, compared case-insensitively.
    pub abstract_heading: String,

    /// Prefix of the line that closes the abstract (start of acknowledgements).
    pub acknowledgement_prefix: String,

    /// Number line preceding the first section title.
    pub first_section_number: String,

    /// Title of the first section; its pairing with `first_section_number`
    /// marks the start of the body.
    pub first_section_title: String,

    /// Front-matter lines dropped when matched exactly.
    pub title_block_exact: Vec<String>,

    /// Front-matter lines dropped when they start with one of these.
    pub title_block_prefixes: Vec<String>,

    /// Front-matter lines dropped when they contain one of these.
    pub title_block_contains: Vec<String>,

    /// Lines that look like a section title after a lone digit but are
    /// figure axis labels or captions.
    pub section_title_deny: Vec<String>,

    /// Subsection candidates rejected when matched exactly.
    pub subsection_deny_exact: Vec<String>,

    /// Subsection candidates rejected when they start with one of these.
    pub subsection_deny_prefixes: Vec<String>,

    /// Subsection candidates rejected when they contain one of these.
    pub subsection_deny_contains: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Default for HeadingRules {
    fn default() -> Self {
        Self {
            abstract_heading: "abstract".into(),
            acknowledgement_prefix: "We thank".into(),
            first_section_number: "1".into(),
            first_section_title: "Introduction".into(),
            title_block_exact: strings(&[
                "Structural Reinforcement Learning",
                "Preliminary",
                "* Equal contribution.",
                "[latest version]",
                "Yucheng Yang∗,1",
                "Chiyuan Wang∗,2",
                "Andreas Schaab3",
                "Benjamin Moll4",
            ]),
            title_block_prefixes: strings(&[
                "First version:",
                "This version:",
                "for Heterogeneous",
            ]),
            title_block_contains: strings(&["Email:"]),
            section_title_deny: strings(&[
                "Time",
                "Wealth b",
                "Wealth s1",
                "Consumption c",
                "Only current price",
                "maximize",
                "VFI",
                "Figure 4: Solution comparison for the PE problem: SRL vs VFI",
                "Monetary policy follows a Taylor rule",
            ]),
            subsection_deny_exact: strings(&[
                "Consumption c",
                "Only current price",
                "Aggregate saving S",
                "Aggregate capital K",
            ]),
            subsection_deny_prefixes: strings(&[
                ". ",
                ", ",
                "e-",
                "and ",
                "We use ",
                "the depreciation",
                "Preferences are isoelastic",
                "y = ",
            ]),
            subsection_deny_contains: strings(&["and innovation", "u(c)", "we set σ"]),
        }
    }
}

impl HeadingRules {
    /// `true` when `line` is listed front matter (title, author, date, email).
    pub fn is_listed_front_matter(&self, line: &str) -> bool {
        self.title_block_exact.iter().any(|s| s == line)
            || self.title_block_prefixes.iter().any(|p| line.starts_with(p.as_str()))
            || self.title_block_contains.iter().any(|c| line.contains(c.as_str()))
    }

    /// `true` when `title` is a known false-positive section title.
    pub fn denies_section_title(&self, title: &str) -> bool {
        self.section_title_deny.iter().any(|s| s == title)
    }

    /// `true` when `title` is a known body-text continuation rather than a
    /// subsection title.
    pub fn denies_subsection_title(&self, title: &str) -> bool {
        self.subsection_deny_exact.iter().any(|s| s == title)
            || self
                .subsection_deny_prefixes
                .iter()
                .any(|p| title.starts_with(p.as_str()))
            || self
                .subsection_deny_contains
                .iter()
                .any(|c| title.contains(c.as_str()))
    }
}
