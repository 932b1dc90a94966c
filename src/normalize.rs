//! Blank-line normalization of the assembled text.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

fn blank_run() -> &'static Regex {
    static BLANK_RUN: OnceLock<Regex> = OnceLock::new();
    BLANK_RUN.get_or_init(|| Regex::new(r"\n{3,}").expect("blank-run pattern is valid"))
}

/// Collapse every run of three or more line terminators into exactly two,
/// so at most one blank line separates two non-empty lines.
pub fn squash_blank_lines(text: &str) -> Cow<'_, str> {
    blank_run().replace_all(text, "\n\n")
}
