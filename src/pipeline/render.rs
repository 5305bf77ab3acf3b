//! Document assembly: header, converted blocks, closing directive.
//!
//! Output layout, one entry per line:
//!
//! ```text
//! \documentclass[...]{...}
//! <preamble lines>
//!
//! \title{...} \author{...} \date{...}
//!
//! \begin{document}
//! \maketitle
//!
//! <blocks>
//!
//! \end{document}
//! ```
//!
//! Headings and paragraphs are each followed by an empty line; abstract prose
//! lines keep a trailing space so they flow together as one paragraph.

use crate::config::DocumentHeader;
use crate::output::Block;

/// Render the document preamble up to and including `\maketitle`.
pub fn render_header(header: &DocumentHeader, out: &mut Vec<String>) {
    match header.class_options.as_deref() {
        Some(opts) if !opts.is_empty() => out.push(format!(
            r"\documentclass[{opts}]{{{}}}",
            header.document_class
        )),
        _ => out.push(format!(r"\documentclass{{{}}}", header.document_class)),
    }
    out.extend(header.preamble.iter().cloned());
    out.push(String::new());
    out.push(format!(r"\title{{{}}}", header.title));
    out.push(format!(r"\author{{{}}}", header.authors.join(", ")));
    out.push(format!(r"\date{{{}}}", header.date));
    out.push(String::new());
    out.push(r"\begin{document}".to_string());
    out.push(r"\maketitle".to_string());
    out.push(String::new());
}

/// Render one block as its output lines.
pub fn render_block(block: &Block, out: &mut Vec<String>) {
    match block {
        Block::AbstractBegin => out.push(r"\begin{abstract}".to_string()),
        Block::AbstractLine(text) => out.push(format!("{text} ")),
        Block::AbstractEnd => {
            out.push(r"\end{abstract}".to_string());
            out.push(String::new());
        }
        Block::AbstractTruncated => out.push(r"\end{abstract}".to_string()),
        Block::Section(title) => {
            out.push(format!(r"\section{{{title}}}"));
            out.push(String::new());
        }
        Block::Subsection(title) => {
            out.push(format!(r"\subsection{{{title}}}"));
            out.push(String::new());
        }
        Block::Paragraph(text) => {
            out.push(text.clone());
            out.push(String::new());
        }
    }
}

/// Render a complete document.
///
/// Lines are joined with `\n`; there is no newline after `\end{document}`.
pub fn render_document<'b>(
    header: &DocumentHeader,
    blocks: impl IntoIterator<Item = &'b Block>,
) -> String {
    let mut out = Vec::new();
    render_header(header, &mut out);
    for block in blocks {
        render_block(block, &mut out);
    }
    out.push(String::new());
    out.push(r"\end{document}".to_string());
    out.join("\n")
}
