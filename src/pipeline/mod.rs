//! Pipeline stages for text-to-LaTeX conversion.
//!
//! Each submodule implements exactly one transformation step, so each is
//! testable on its own.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ scan (classify + escape) ──▶ render
//! (bytes)    (lines → blocks)            (blocks → LaTeX)
//! ```
//!
//! 1. [`input`]    — read the file, decode lossily, split into trimmed lines
//! 2. [`classify`] — stateless predicates: is this line a heading number,
//!    a plausible title, front matter, a page number?
//! 3. [`escape`]   — make extracted text safe inside LaTeX
//! 4. [`scan`]     — the single-pass state machine that applies the
//!    predicates in precedence order and yields blocks
//! 5. [`render`]   — wrap the blocks in the preamble and document environment

pub mod classify;
pub mod escape;
pub mod input;
pub mod render;
pub mod scan;
