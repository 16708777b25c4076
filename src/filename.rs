//! Safe filename generation for exported threads and messages

/// Maximum length of the subject-derived part of a filename.
pub const MAX_SUBJECT_LEN: usize = 48;

/// Characters never allowed in a generated filename.
const FORBIDDEN: [char; 11] = ['/', '\\', ':', '?', '%', '*', '|', '"', '<', '>', '\''];

/// Sanitize a string for use inside a filename.
///
/// Keeps printable ASCII only, removes the forbidden character set
/// unconditionally, and trims the ends. Non-ASCII input is dropped, not
/// transliterated.
#[must_use]
pub fn sanitize_for_filename(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_graphic() || *c == ' ')
        .filter(|c| !FORBIDDEN.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Subject stem shared by the export and summary names: sanitized, truncated
/// to [`MAX_SUBJECT_LEN`], with the zero-padded thread number as fallback
/// when nothing printable survives.
fn subject_stem(subject: &str, thread_number: u32) -> String {
    let stem: String = sanitize_for_filename(subject)
        .chars()
        .take(MAX_SUBJECT_LEN)
        .collect();
    let stem = stem.trim();

    if stem.is_empty() {
        format!("thread{thread_number:04}")
    } else {
        stem.to_string()
    }
}

/// Filename for a full thread export, like `export Subject Here.txt`.
///
/// Empty or fully-forbidden subjects fall back to the thread number, e.g.
/// `export thread0007.txt`, so the name is never tag-only.
#[must_use]
pub fn safe_export_filename(subject: &str, thread_number: u32) -> String {
    format!("export {}.txt", subject_stem(subject, thread_number))
}

/// Filename for a thread summary, like `summary Subject Here.txt`.
#[must_use]
pub fn safe_summary_filename(subject: &str, thread_number: u32) -> String {
    format!("summary {}.txt", subject_stem(subject, thread_number))
}

/// Filename for an individual message, like `message0001.txt`.
///
/// Depends only on the counter, so uniqueness holds as long as the caller
/// never reuses a number within a run.
#[must_use]
pub fn safe_message_filename(message_number: u32) -> String {
    format!("message{message_number:04}.txt")
}
