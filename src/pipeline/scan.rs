//! Structural scan: classify each line and yield [`Block`]s in order.
//!
//! The scanner walks the lines once with a single cursor. The only other
//! state is the [`Mode`], which moves forward only:
//!
//! ```text
//! TitleBlock ──"abstract"──▶ Abstract ──"We thank"…"1" "Introduction"──▶ Body
//!     │                                                                   ▲
//!     └──────────────"1" "Introduction" / unrecognised line───────────────┘
//! ```
//!
//! Headings may be split over two lines (`"2"`, blank, `"Setup"`). Those are
//! detected by peeking at the next non-blank line; the cursor moves only once
//! a rule has matched, and no rule ever looks backward.
//!
//! In the body, rules are tried in a fixed order and the first match wins:
//! lookahead section, inline section, lookahead subsection, inline
//! subsection, page number, paragraph.

use crate::config::HeadingRules;
use crate::output::{Block, ConversionStats};
use crate::pipeline::classify;
use crate::pipeline::escape::escape_latex;
use std::collections::VecDeque;
use tracing::debug;

/// Which part of the document the cursor is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Front matter before the abstract or the first section.
    TitleBlock,
    /// Inside the abstract.
    Abstract,
    /// Sections, subsections and paragraphs.
    Body,
}

/// Single-pass line classifier.
///
/// Implements [`Iterator`]; statistics are complete once it returns `None`.
#[derive(Debug)]
pub struct Scanner<'a> {
    lines: &'a [String],
    rules: &'a HeadingRules,
    cursor: usize,
    mode: Mode,
    pending: VecDeque<Block>,
    stats: ConversionStats,
}

impl<'a> Scanner<'a> {
    pub fn new(lines: &'a [String], rules: &'a HeadingRules) -> Self {
        Self {
            lines,
            rules,
            cursor: 0,
            mode: Mode::TitleBlock,
            pending: VecDeque::new(),
            stats: ConversionStats {
                total_lines: lines.len(),
                ..ConversionStats::default()
            },
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn stats(&self) -> &ConversionStats {
        &self.stats
    }

    pub fn into_stats(self) -> ConversionStats {
        self.stats
    }

    /// Trimmed line at `idx`.
    fn line(&self, idx: usize) -> &'a str {
        let lines = self.lines;
        lines[idx].trim()
    }

    /// Index of the first non-blank line at or after `from`.
    fn peek_non_blank(&self, from: usize) -> Option<usize> {
        (from..self.lines.len()).find(|&j| !self.lines[j].trim().is_empty())
    }

    /// Classify the line under the cursor, advancing past everything it consumes.
    fn step(&mut self) {
        let line = self.line(self.cursor);
        if line.is_empty() {
            self.stats.blank_lines += 1;
            self.cursor += 1;
            return;
        }
        match self.mode {
            Mode::TitleBlock => self.step_title_block(line),
            Mode::Abstract => self.step_abstract(line),
            Mode::Body => self.step_body(line),
        }
    }

    fn step_title_block(&mut self, line: &'a str) {
        if classify::is_abstract_heading(line, self.rules) {
            debug!("Abstract opens at line {}", self.cursor + 1);
            self.stats.abstract_lines += 1;
            self.pending.push_back(Block::AbstractBegin);
            self.mode = Mode::Abstract;
            self.cursor += 1;
            return;
        }
        if self.try_enter_body() {
            return;
        }
        if classify::is_front_matter(line, self.rules) {
            self.stats.title_block_lines += 1;
            self.cursor += 1;
            return;
        }
        self.emit_paragraph(line);
    }

    fn step_abstract(&mut self, line: &'a str) {
        if line.starts_with(self.rules.acknowledgement_prefix.as_str()) {
            self.close_abstract();
            return;
        }
        self.stats.abstract_lines += 1;
        self.pending.push_back(Block::AbstractLine(escape_latex(line)));
        self.cursor += 1;
    }

    /// End the abstract and drop everything up to the first section number.
    fn close_abstract(&mut self) {
        debug!("Abstract closes at line {}", self.cursor + 1);
        self.pending.push_back(Block::AbstractEnd);
        self.mode = Mode::Body;

        let start = self.cursor;
        while self.cursor < self.lines.len()
            && self.line(self.cursor) != self.rules.first_section_number
        {
            self.cursor += 1;
        }
        self.stats.acknowledgement_lines += self.cursor - start;
        debug!("Dropped {} acknowledgement lines", self.cursor - start);

        if self.cursor >= self.lines.len() || self.try_enter_body() {
            return;
        }
        // No first-section title after the number: keep the number as text.
        let number = self.line(self.cursor);
        self.emit_paragraph(number);
    }

    fn step_body(&mut self, line: &'a str) {
        let rules = self.rules;

        if classify::is_section_number(line) {
            if let Some(j) = self.peek_non_blank(self.cursor + 1) {
                let title = self.line(j);
                if classify::is_section_title(title, rules) {
                    self.emit_heading_pair(j, Block::Section(escape_latex(title)));
                    return;
                }
            }
        }

        let lines = self.lines;
        if let Some(title) = classify::inline_section_title(&lines[self.cursor]) {
            self.emit_heading_inline(Block::Section(escape_latex(title)));
            return;
        }

        if classify::is_subsection_number(line) {
            if let Some(j) = self.peek_non_blank(self.cursor + 1) {
                let title = self.line(j);
                if classify::is_subsection_title(title, rules) {
                    self.emit_heading_pair(j, Block::Subsection(escape_latex(title)));
                    return;
                }
            }
        }

        if let Some(title) = classify::inline_subsection_title(line, rules) {
            self.emit_heading_inline(Block::Subsection(escape_latex(title)));
            return;
        }

        if classify::is_page_number(line)
            && self.cursor + 1 < self.lines.len()
            && classify::follows_page_number(self.line(self.cursor + 1))
        {
            debug!("Dropped page number {line:?} at line {}", self.cursor + 1);
            self.stats.page_numbers += 1;
            self.cursor += 1;
            return;
        }

        self.emit_paragraph(line);
    }

    /// Recognise `"1"` followed by `"Introduction"` at the cursor.
    fn try_enter_body(&mut self) -> bool {
        let at = self.cursor;
        if self.line(at) != self.rules.first_section_number {
            return false;
        }
        let Some(j) = self.peek_non_blank(at + 1) else {
            return false;
        };
        if self.line(j) != self.rules.first_section_title {
            return false;
        }
        let title = escape_latex(&self.rules.first_section_title);
        self.emit_heading_pair(j, Block::Section(title));
        self.mode = Mode::Body;
        true
    }

    /// Emit a heading whose number is at the cursor and whose title is at `title_idx`.
    fn emit_heading_pair(&mut self, title_idx: usize, block: Block) {
        self.stats.blank_lines += title_idx - self.cursor - 1;
        self.stats.heading_lines += 2;
        self.cursor = title_idx + 1;
        self.push_heading(block);
    }

    fn emit_heading_inline(&mut self, block: Block) {
        self.stats.heading_lines += 1;
        self.cursor += 1;
        self.push_heading(block);
    }

    fn push_heading(&mut self, block: Block) {
        match &block {
            Block::Section(title) => {
                debug!("Section {title:?} ending at line {}", self.cursor);
                self.stats.sections += 1;
            }
            Block::Subsection(title) => {
                debug!("Subsection {title:?} ending at line {}", self.cursor);
                self.stats.subsections += 1;
            }
            _ => {}
        }
        self.pending.push_back(block);
    }

    fn emit_paragraph(&mut self, line: &str) {
        self.stats.paragraphs += 1;
        self.pending.push_back(Block::Paragraph(escape_latex(line)));
        self.mode = Mode::Body;
        self.cursor += 1;
    }
}

impl Iterator for Scanner<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        loop {
            if let Some(block) = self.pending.pop_front() {
                return Some(block);
            }
            if self.cursor >= self.lines.len() {
                if self.mode == Mode::Abstract {
                    debug!("Input ended inside the abstract; closing it");
                    self.mode = Mode::Body;
                    return Some(Block::AbstractTruncated);
                }
                return None;
            }
            self.step();
        }
    }
}

/// Scan `lines` to completion.
pub fn scan(lines: &[String], rules: &HeadingRules) -> (Vec<Block>, ConversionStats) {
    let mut scanner = Scanner::new(lines, rules);
    let blocks: Vec<Block> = scanner.by_ref().collect();
    (blocks, scanner.into_stats())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> (Vec<Block>, ConversionStats) {
        let lines = crate::pipeline::input::split_lines(text);
        scan(&lines, &HeadingRules::default())
    }

    fn blocks(text: &str) -> Vec<Block> {
        run(text).0
    }

    fn para(s: &str) -> Block {
        Block::Paragraph(s.into())
    }

    fn section(s: &str) -> Block {
        Block::Section(s.into())
    }

    fn subsection(s: &str) -> Block {
        Block::Subsection(s.into())
    }

    const FRONT: &str = "Structural Reinforcement Learning\n\
        for Heterogeneous Agent Macroeconomics\n\
        Yucheng Yang∗,1\n\
        Benjamin Moll4\n\
        1 University of Zurich\n\
        Preliminary\n\
        First version: May 2025\n";

    #[test]
    fn test_abstract_acknowledgements_and_introduction() {
        let text = "abstract\n\
            This paper studies X.\n\
            We thank Jane Doe.\n\
            Yucheng Yang: Email: y@example.org\n\
            \n\
            1\n\
            \n\
            Introduction\n\
            Body text.\n";
        assert_eq!(
            blocks(text),
            vec![
                Block::AbstractBegin,
                Block::AbstractLine("This paper studies X.".into()),
                Block::AbstractEnd,
                section("Introduction"),
                para("Body text."),
            ]
        );
    }

    #[test]
    fn test_front_matter_dropped_before_abstract() {
        let text = format!("{FRONT}\nAbstract\nWe study $x$.\nWe thank all.\n1\nIntroduction\n");
        let (b, stats) = run(&text);
        assert_eq!(
            b,
            vec![
                Block::AbstractBegin,
                Block::AbstractLine(r"We study \$x\$.".into()),
                Block::AbstractEnd,
                section("Introduction"),
            ]
        );
        assert_eq!(stats.title_block_lines, 7);
        assert_eq!(stats.accounted_lines(), stats.total_lines);
    }

    #[test]
    fn test_body_without_abstract() {
        let text = format!("{FRONT}1\n\nIntroduction\nFirst paragraph.\n");
        assert_eq!(
            blocks(&text),
            vec![section("Introduction"), para("First paragraph.")]
        );
    }

    #[test]
    fn test_no_abstract_no_introduction_falls_through_to_paragraphs() {
        let text = "Preliminary\nSome heading\n2\n\nSetup of the Model\n";
        assert_eq!(
            blocks(text),
            vec![para("Some heading"), section("Setup of the Model")]
        );
    }

    #[test]
    fn test_lookahead_section_consumes_number_and_title() {
        let text = "1\nIntroduction\nText.\n2\n\n\nSetup of the Model\nMore text.\n";
        let (b, stats) = run(text);
        assert_eq!(
            b,
            vec![
                section("Introduction"),
                para("Text."),
                section("Setup of the Model"),
                para("More text."),
            ]
        );
        assert_eq!(stats.sections, 2);
        assert_eq!(stats.heading_lines, 4);
        assert_eq!(stats.blank_lines, 2);
        assert_eq!(stats.accounted_lines(), stats.total_lines);
    }

    #[test]
    fn test_lookahead_section_rejects_axis_label() {
        let text = "1\nIntroduction\n3\nWealth b\n";
        assert_eq!(
            blocks(text),
            vec![section("Introduction"), para("3"), para("Wealth b")]
        );
    }

    #[test]
    fn test_inline_section() {
        let text = "1\nIntroduction\n4    Results & Discussion\n";
        assert_eq!(
            blocks(text),
            vec![section("Introduction"), section(r"Results \& Discussion")]
        );
    }

    #[test]
    fn test_lookahead_subsection() {
        let text = "1\nIntroduction\n2.1\n\nA Huggett Model with Shocks\nText.\n";
        assert_eq!(
            blocks(text),
            vec![
                section("Introduction"),
                subsection("A Huggett Model with Shocks"),
                para("Text."),
            ]
        );
    }

    #[test]
    fn test_lookahead_subsection_rejects_continuation() {
        let text = "1\nIntroduction\n2.5\n\nand innovation shocks follow\n";
        let b = blocks(text);
        assert!(!b.iter().any(|b| matches!(b, Block::Subsection(_))), "{b:?}");
        assert_eq!(b.last(), Some(&para("and innovation shocks follow")));
    }

    #[test]
    fn test_inline_subsection() {
        let text = "1\nIntroduction\n3.2  Training the Policy Network\n";
        assert_eq!(
            blocks(text),
            vec![
                section("Introduction"),
                subsection("Training the Policy Network"),
            ]
        );
    }

    #[test]
    fn test_inline_subsection_starting_with_e_is_text() {
        let text = "1\nIntroduction\n2.1  Equilibrium with Aggregate Shocks\n";
        assert_eq!(
            blocks(text),
            vec![
                section("Introduction"),
                para("2.1  Equilibrium with Aggregate Shocks"),
            ]
        );
    }

    #[test]
    fn test_lookahead_subsection_starting_with_e() {
        let text = "1\nIntroduction\n2.1\n\nEquilibrium with Aggregate Shocks\n";
        assert_eq!(
            blocks(text),
            vec![
                section("Introduction"),
                subsection("Equilibrium with Aggregate Shocks"),
            ]
        );
    }

    #[test]
    fn test_page_number_dropped() {
        let text = "1\nIntroduction\nEnd of page.\n17\n\nNext page.\n";
        let (b, stats) = run(text);
        assert_eq!(
            b,
            vec![section("Introduction"), para("End of page."), para("Next page.")]
        );
        assert_eq!(stats.page_numbers, 1);
    }

    #[test]
    fn test_number_on_last_line_is_kept() {
        let text = "1\nIntroduction\n17";
        assert_eq!(blocks(text), vec![section("Introduction"), para("17")]);
    }

    #[test]
    fn test_number_before_prose_is_kept() {
        let text = "1\nIntroduction\n17\napples were counted\n";
        assert_eq!(
            blocks(text),
            vec![
                section("Introduction"),
                para("17"),
                para("apples were counted"),
            ]
        );
    }

    #[test]
    fn test_unterminated_abstract_is_closed() {
        let text = "Abstract\nOnly abstract text.\n";
        assert_eq!(
            blocks(text),
            vec![
                Block::AbstractBegin,
                Block::AbstractLine("Only abstract text.".into()),
                Block::AbstractTruncated,
            ]
        );
    }

    #[test]
    fn test_acknowledgements_without_section_one() {
        let text = "abstract\nText.\nWe thank everyone.\nFunding info.\n";
        let (b, stats) = run(text);
        assert_eq!(
            b,
            vec![
                Block::AbstractBegin,
                Block::AbstractLine("Text.".into()),
                Block::AbstractEnd,
            ]
        );
        assert_eq!(stats.acknowledgement_lines, 2);
        assert_eq!(stats.accounted_lines(), stats.total_lines);
    }

    #[test]
    fn test_section_one_without_introduction_kept_as_text() {
        let text = "abstract\nText.\nWe thank everyone.\n1\n\nOverview\n";
        assert_eq!(
            blocks(text),
            vec![
                Block::AbstractBegin,
                Block::AbstractLine("Text.".into()),
                Block::AbstractEnd,
                para("1"),
                para("Overview"),
            ]
        );
    }

    #[test]
    fn test_abstract_heading_in_body_is_text() {
        let text = "1\nIntroduction\nAbstract\n";
        assert_eq!(
            blocks(text),
            vec![section("Introduction"), para("Abstract")]
        );
    }

    #[test]
    fn test_mode_only_moves_forward() {
        let lines = crate::pipeline::input::split_lines(
            "abstract\nText.\nWe thank A.\n1\nIntroduction\nPreliminary\n",
        );
        let rules = HeadingRules::default();
        let mut scanner = Scanner::new(&lines, &rules);
        assert_eq!(scanner.mode(), Mode::TitleBlock);
        assert_eq!(scanner.next(), Some(Block::AbstractBegin));
        assert_eq!(scanner.mode(), Mode::Abstract);
        let rest: Vec<Block> = scanner.by_ref().collect();
        assert_eq!(scanner.mode(), Mode::Body);
        // Front-matter text after the body starts is ordinary prose.
        assert_eq!(rest.last(), Some(&para("Preliminary")));
    }

    #[test]
    fn test_paragraph_order_preserved_and_escaped_once() {
        let text = "1\nIntroduction\nfirst_line\nsecond {line}\nthird 100%\n";
        assert_eq!(
            blocks(text),
            vec![
                section("Introduction"),
                para(r"first\_line"),
                para(r"second \{line\}"),
                para(r"third 100\%"),
            ]
        );
    }

    #[test]
    fn test_every_line_accounted_for() {
        let text = format!(
            "{FRONT}abstract\nA.\nB.\nWe thank C.\nD.\n\n1\n\nIntroduction\nP.\n2\nModel Setup Here\n\
             2.1\nA Long Subsection Title\n12\n\n3    Results\n3.1  Another Long Subsection\nQ.\n"
        );
        let (_, stats) = run(&text);
        assert_eq!(stats.sections, 3);
        assert_eq!(stats.subsections, 2);
        assert_eq!(stats.page_numbers, 1);
        assert_eq!(stats.accounted_lines(), stats.total_lines);
    }

    #[test]
    fn test_empty_input() {
        let (b, stats) = run("");
        assert!(b.is_empty());
        assert_eq!(stats, ConversionStats::default());
    }
}
