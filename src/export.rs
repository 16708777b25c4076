//! Thread export: rendering, summary synthesis, and the writer collaborator

use crate::filename;
use crate::sanitize;
use crate::types::{Email, Thread};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::{info, warn};

/// Destination collaborator for exported files.
///
/// Implementations own all path concerns (directory resolution, creation,
/// overwrite policy); the exporter only supplies a filename and content.
pub trait FileWriter {
    fn write(&mut self, filename: &str, content: &str) -> std::io::Result<()>;
}

/// A single file that could not be written. Export continues past these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteFailure {
    pub filename: String,
    pub reason: String,
}

/// Final status of one export run, handed back to the frontend for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportStatus {
    /// Threads processed
    pub threads: usize,

    /// Messages contained in those threads
    pub messages: usize,

    /// Files successfully written
    pub files_written: usize,

    /// Individual write failures, in the order they occurred
    pub failures: Vec<WriteFailure>,
}

impl ExportStatus {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Writes threads out through a [`FileWriter`].
///
/// Write failures are recorded per file and never abort the run; every
/// remaining thread still gets its chance.
pub struct Exporter<'a, W: FileWriter> {
    writer: &'a mut W,
    per_message: bool,
    message_counter: u32,
}

impl<'a, W: FileWriter> Exporter<'a, W> {
    /// Create an exporter. `per_message` additionally writes one numbered
    /// file per individual message.
    pub fn new(writer: &'a mut W, per_message: bool) -> Self {
        Self {
            writer,
            per_message,
            message_counter: 0,
        }
    }

    /// Export every thread: one full-text file and one summary file each,
    /// plus per-message files when enabled.
    pub fn export(&mut self, threads: &[Thread]) -> ExportStatus {
        let mut status = ExportStatus::default();

        for thread in threads {
            status.threads += 1;
            status.messages += thread.len();
            self.export_thread(thread, &mut status);
        }

        info!(
            "export finished: {} threads, {} messages, {} files, {} failures",
            status.threads,
            status.messages,
            status.files_written,
            status.failures.len()
        );
        status
    }

    fn export_thread(&mut self, thread: &Thread, status: &mut ExportStatus) {
        let export_name =
            filename::safe_export_filename(&thread.normalized_subject, thread.thread_number);
        self.write_file(&export_name, &render_thread(thread), status);

        let summary_name =
            filename::safe_summary_filename(&thread.normalized_subject, thread.thread_number);
        self.write_file(&summary_name, &synopsis(thread), status);

        if self.per_message {
            for email in &thread.messages {
                self.message_counter += 1;
                let name = filename::safe_message_filename(self.message_counter);
                self.write_file(&name, &render_message(email), status);
            }
        }
    }

    fn write_file(&mut self, name: &str, content: &str, status: &mut ExportStatus) {
        match self.writer.write(name, content) {
            Ok(()) => {
                info!("wrote {name}");
                status.files_written += 1;
            }
            Err(e) => {
                warn!("write failed for {name}: {e}");
                status.failures.push(WriteFailure {
                    filename: name.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }
}

/// Render a full thread: every message in archive order, each preceded by its
/// headers restated as plain text.
#[must_use]
pub fn render_thread(thread: &Thread) -> String {
    let mut out = String::new();
    for email in &thread.messages {
        out.push_str(&render_message(email));
        out.push('\n');
    }
    out
}

/// Render one message. Absent headers are omitted rather than filled with
/// placeholders.
#[must_use]
pub fn render_message(email: &Email) -> String {
    let mut out = String::new();
    if let Some(from) = &email.from {
        let _ = writeln!(out, "From: {from}");
    }
    if let Some(date) = &email.date {
        let _ = writeln!(out, "Date: {date}");
    }
    if let Some(subject) = &email.subject {
        let _ = writeln!(out, "Subject: {subject}");
    }
    out.push('\n');
    if let Some(body) = &email.body {
        out.push_str(body);
        out.push('\n');
    }
    out
}

/// One-line synopsis of a thread: the first sufficiently long sentence of the
/// first message's body, or the last such sentence of the last message's body
/// when the first yields nothing. Threads where neither yields anything get
/// an empty synopsis.
#[must_use]
pub fn synopsis(thread: &Thread) -> String {
    let first = thread
        .first_message()
        .and_then(|m| m.body.as_deref())
        .map(sanitize::first_sentence)
        .unwrap_or("");

    if !first.is_empty() {
        return first.to_string();
    }

    thread
        .last_message()
        .and_then(|m| m.body.as_deref())
        .map(sanitize::last_sentence)
        .unwrap_or("")
        .to_string()
}
