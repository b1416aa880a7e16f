//! Pragmas embedded in comment text.
//!
//! Pragmas are opportunistic metadata: a missing keyword or a keyword with
//! no argument simply yields `None`, never a diagnostic.

use denim_ir::Span;
use denim_lexer_core::chars::is_whitespace;

/// `//# sourceMappingURL=<url>`
const SOURCE_MAPPING_URL: &str = " sourceMappingURL=";
/// `// @edition <value>`
const EDITION: &str = "edition";

/// How the argument is positioned relative to the pragma keyword.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PragmaMode {
    /// The argument starts right after the keyword.
    NoSpaceFirst,
    /// At least one whitespace character separates keyword and argument.
    SkipSpaceFirst,
}

/// The argument of a pragma and where it sits in the source.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PragmaArg {
    pub text: String,
    pub span: Span,
}

/// Extract the argument of `pragma` from `text`, which must begin with it.
///
/// `start` is the byte offset of `text` in the source file.
#[allow(
    clippy::cast_possible_truncation,
    reason = "comment text comes from a u32-capped source buffer"
)]
pub fn scan_for_pragma_arg(
    mode: PragmaMode,
    start: u32,
    pragma: &str,
    text: &str,
) -> Option<PragmaArg> {
    let mut rest = text.strip_prefix(pragma)?;
    let mut start = start + pragma.len() as u32;

    if mode == PragmaMode::SkipSpaceFirst {
        let trimmed = rest.trim_start_matches(is_whitespace);
        if trimmed.len() == rest.len() {
            return None;
        }
        start += (rest.len() - trimmed.len()) as u32;
        rest = trimmed;
    }

    let len = rest.find(is_whitespace).unwrap_or(rest.len());
    if len == 0 {
        return None;
    }
    Some(PragmaArg {
        text: rest[..len].to_owned(),
        span: Span::at(start, len as u32),
    })
}

/// Pragmas recognized in a single comment.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct CommentPragmas {
    pub(crate) source_mapping_url: Option<PragmaArg>,
    pub(crate) edition: Option<PragmaArg>,
}

/// Look for pragmas in the full text of a comment starting at `start`.
///
/// `text` includes the comment opener, so a source-map pragma is recognized
/// only as `//#` or `/*#`. The first `@edition` in the comment wins.
#[allow(
    clippy::cast_possible_truncation,
    reason = "comment text comes from a u32-capped source buffer"
)]
pub(crate) fn scan_comment(text: &str, start: u32) -> CommentPragmas {
    let mut found = CommentPragmas::default();
    for (i, b) in text.bytes().enumerate() {
        // Both markers are ASCII, so `i + 1` is a char boundary.
        let at = start + i as u32 + 1;
        match b {
            b'#' if i == 2 && found.source_mapping_url.is_none() => {
                found.source_mapping_url = scan_for_pragma_arg(
                    PragmaMode::NoSpaceFirst,
                    at,
                    SOURCE_MAPPING_URL,
                    &text[i + 1..],
                );
            }
            b'@' if found.edition.is_none() => {
                found.edition =
                    scan_for_pragma_arg(PragmaMode::SkipSpaceFirst, at, EDITION, &text[i + 1..]);
            }
            _ => {}
        }
    }
    found
}
