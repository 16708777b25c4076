// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! MBOX Thread Extraction
//!
//! Parses an MBOX archive into messages, groups them into conversational
//! threads by normalized subject, sanitizes bodies to plain ASCII, and
//! exports each thread (plus a one-line summary) as filesystem-safe text
//! files.
//!
//! # Pipeline
//!
//! [`parse_mbox`] turns raw archive text into an ordered sequence of
//! [`Email`] records, [`group_into_threads`] buckets them into [`Thread`]s
//! by normalized subject, and [`Exporter`] writes one export file and one
//! summary file per thread through a [`FileWriter`].
//!
//! # Example
//!
//! ```rust
//! use mbox_extract::{group_into_threads, parse_mbox};
//!
//! let archive = "From alice@example.com Thu Jan  1 00:00:00 2025\n\
//!                From: alice@example.com\n\
//!                Subject: Hello\n\
//!                \n\
//!                A perfectly ordinary greeting.\n";
//!
//! let threads = group_into_threads(parse_mbox(archive));
//! assert_eq!(threads.len(), 1);
//! assert_eq!(threads[0].normalized_subject, "Hello");
//! ```

mod error;
mod export;
mod filename;
mod parser;
mod sanitize;
mod thread;
mod types;

pub use error::{ExtractError, Result};
pub use export::{
    ExportStatus, Exporter, FileWriter, WriteFailure, render_message, render_thread, synopsis,
};
pub use filename::{
    MAX_SUBJECT_LEN, safe_export_filename, safe_message_filename, safe_summary_filename,
    sanitize_for_filename,
};
pub use parser::{MboxMessages, parse_mbox, read_archive};
pub use sanitize::{
    first_sentence, is_clear_text, last_sentence, remove_attachments_and_rtf, strip_non_ascii,
    trim,
};
pub use thread::{group_into_threads, normalize_subject};
pub use types::{Email, NO_SUBJECT, Thread};
