//! MBOX archive parsing
//!
//! Splits raw archive text on the conventional `"From "` boundary lines and
//! builds [`Email`] records from each block. Header handling is deliberately
//! minimal (`From:` / `Subject:` / `Date:` literals, first occurrence wins);
//! this is not an RFC-822 parser.

use crate::error::{ExtractError, Result};
use crate::sanitize;
use crate::types::Email;
use std::path::Path;
use tracing::debug;

/// Read an archive file into memory for parsing.
///
/// A missing or unreadable path is the one fatal condition of the pipeline;
/// it is reported before any parsing starts.
pub fn read_archive(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| ExtractError::ArchiveUnreadable {
        path: path.display().to_string(),
        source,
    })
}

/// Parse the full text of an MBOX archive into a lazy sequence of messages.
///
/// The iterator yields messages in original archive order and is finite and
/// non-restartable. An archive with no `"From "` boundary lines yields
/// nothing; that is an empty mailbox, not an error.
#[must_use]
pub fn parse_mbox(content: &str) -> MboxMessages<'_> {
    MboxMessages {
        lines: content.lines().peekable(),
    }
}

/// Lazy iterator over the messages of one archive.
pub struct MboxMessages<'a> {
    lines: std::iter::Peekable<std::str::Lines<'a>>,
}

impl Iterator for MboxMessages<'_> {
    type Item = Email;

    fn next(&mut self) -> Option<Email> {
        // Seek to the next boundary, skipping any preamble.
        loop {
            if self.lines.next()?.starts_with("From ") {
                break;
            }
        }

        let mut block: Vec<&str> = Vec::new();
        while let Some(&line) = self.lines.peek() {
            if line.starts_with("From ") {
                break;
            }
            block.push(line);
            self.lines.next();
        }

        Some(build_email(&block))
    }
}

/// Build one [`Email`] from the lines of a message block (boundary excluded).
fn build_email(lines: &[&str]) -> Email {
    let header_end = lines.iter().position(|l| l.trim().is_empty());
    let header_lines = &lines[..header_end.unwrap_or(lines.len())];

    let mut email = Email::default();
    for line in header_lines {
        set_header(&mut email.from, line, "From:");
        set_header(&mut email.subject, line, "Subject:");
        set_header(&mut email.date, line, "Date:");
    }

    // No blank line means the whole block is headers and the body is absent.
    email.body = header_end.and_then(|end| sanitize_body(&lines[end + 1..]));

    debug!(
        "parsed message: subject={:?} from={:?}",
        email.subject, email.from
    );
    email
}

/// Set a header slot from a matching line. First occurrence wins; matching is
/// case-sensitive on the literal header name.
fn set_header(slot: &mut Option<String>, line: &str, name: &str) {
    if slot.is_none()
        && let Some(rest) = line.strip_prefix(name)
    {
        *slot = Some(rest.trim().to_string());
    }
}

fn sanitize_body(lines: &[&str]) -> Option<String> {
    let raw = lines.join("\n");
    let cleaned = sanitize::remove_attachments_and_rtf(&raw);
    let cleaned = sanitize::strip_non_ascii(&cleaned);
    let cleaned = sanitize::trim(&cleaned);

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}
