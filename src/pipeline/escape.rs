//! LaTeX escaping of extracted text.
//!
//! The mapping is applied in a single left-to-right pass, one character at a
//! time, so the braces introduced by `\textbackslash{}` are never themselves
//! escaped.

/// Characters that get a plain backslash prefix.
const RESERVED: [char; 9] = ['&', '%', '$', '#', '_', '{', '}', '~', '^'];

/// Escape LaTeX special characters in `s`.
///
/// `\` becomes `\textbackslash{}`; each of `& % $ # _ { } ~ ^` becomes the
/// same character preceded by `\`. Everything else passes through unchanged.
pub fn escape_latex(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    for c in s.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            c if RESERVED.contains(&c) => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}
