//! Text sanitization: ASCII enforcement, attachment stripping, sentence extraction
//!
//! Everything here is a pure function over string slices; no state is held
//! between calls.

use regex::Regex;

/// Characters accepted by the clear-text gate: printable ASCII plus the three
/// whitespace controls that plain-text mail legitimately contains.
const fn is_allowed(c: char) -> bool {
    matches!(c, ' '..='~' | '\t' | '\n' | '\r')
}

/// Check whether a string contains only printable ASCII and tab/LF/CR.
///
/// Used as a gate before treating content as text rather than binary.
#[must_use]
pub fn is_clear_text(input: &str) -> bool {
    input.chars().all(is_allowed)
}

/// Delete every character outside printable ASCII + tab/LF/CR.
///
/// Characters are dropped, not replaced, so applying this twice is a no-op.
#[must_use]
pub fn strip_non_ascii(input: &str) -> String {
    input.chars().filter(|&c| is_allowed(c)).collect()
}

/// Trim whitespace and newlines from both ends, leaving interior whitespace
/// untouched.
#[must_use]
pub fn trim(input: &str) -> &str {
    input.trim()
}

static HEADER_LINE: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9-]*:").unwrap());

/// A line that opens a section we want gone: RTF parts, multipart/mixed
/// wrappers, and explicit attachment declarations.
fn is_section_marker(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains("application/rtf")
        || lower.contains("multipart/mixed")
        || (lower.starts_with("content-disposition:") && lower.contains("attachment"))
}

fn is_boundary_line(line: &str) -> bool {
    line.trim_start().starts_with("--")
}

fn is_mime_header(line: &str) -> bool {
    HEADER_LINE.is_match(line) && line.to_lowercase().starts_with("content-")
}

/// Remove RTF content, multipart/mixed sections and attachment declarations
/// from a message body.
///
/// This is a marker-based heuristic, not a MIME tree parse: a marker line
/// opens a skip region that runs until a blank line, a boundary line, or the
/// next header-like line that is not itself part of the section. `Content-*`
/// continuation headers stay inside the region, and stray MIME plumbing
/// (part boundaries, `Content-*` headers) is dropped even outside one. When
/// in doubt the scan keeps plain text and drops only clearly marked
/// structure.
#[must_use]
pub fn remove_attachments_and_rtf(body: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut skipping = false;

    for line in body.lines() {
        if skipping {
            if line.trim().is_empty() || is_boundary_line(line) {
                skipping = false;
                continue;
            }
            if HEADER_LINE.is_match(line) {
                if is_section_marker(line) || is_mime_header(line) {
                    continue;
                }
                // A non-MIME header-like line ends the section and survives.
                skipping = false;
            } else {
                continue;
            }
        }

        if is_section_marker(line) {
            skipping = true;
            continue;
        }
        if is_boundary_line(line) || is_mime_header(line) {
            continue;
        }

        kept.push(line);
    }

    kept.join("\n")
}

/// Sentence segments shorter than this are treated as noise ("Hi.", "Ok!").
const MIN_SENTENCE_LEN: usize = 8;

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Extract the first sentence longer than eight characters, or the empty
/// string if none qualifies. Sentence boundaries are `.` `!` `?`.
#[must_use]
pub fn first_sentence(text: &str) -> &str {
    text.split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .find(|s| s.len() > MIN_SENTENCE_LEN)
        .unwrap_or("")
}

/// Extract the last sentence longer than eight characters, scanning from the
/// end, or the empty string if none qualifies.
#[must_use]
pub fn last_sentence(text: &str) -> &str {
    text.rsplit(SENTENCE_TERMINATORS)
        .map(str::trim)
        .find(|s| s.len() > MIN_SENTENCE_LEN)
        .unwrap_or("")
}
