//! Core types for parsed messages and threads

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grouping key used for messages that carry no usable subject.
pub const NO_SUBJECT: &str = "(no subject)";

/// A single message parsed from an MBOX archive.
///
/// Every field is independently optional: real archives routinely contain
/// messages with missing headers or empty bodies, and a missing field never
/// prevents construction or export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    /// Sender, from the `From:` header
    pub from: Option<String>,

    /// Subject line, from the `Subject:` header
    pub subject: Option<String>,

    /// Date string exactly as found in the `Date:` header
    pub date: Option<String>,

    /// Sanitized body text (ASCII only, attachments stripped)
    pub body: Option<String>,
}

impl Email {
    /// Check whether the message carries no information at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.from.is_none() && self.subject.is_none() && self.date.is_none() && self.body.is_none()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "From: {} | Subject: {} | Date: {}",
            self.from.as_deref().unwrap_or("?"),
            self.subject.as_deref().unwrap_or("?"),
            self.date.as_deref().unwrap_or("?")
        )
    }
}

/// A group of messages sharing a normalized subject.
///
/// Membership order equals original archive order; no reordering by date is
/// ever performed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    /// The grouping key (see [`crate::normalize_subject`])
    pub normalized_subject: String,

    /// 1-based number, assigned in order of first appearance
    pub thread_number: u32,

    /// Messages in parse order
    pub messages: Vec<Email>,
}

impl Thread {
    /// Create a new thread seeded with its first message
    #[must_use]
    pub fn new(normalized_subject: String, thread_number: u32, first: Email) -> Self {
        Self {
            normalized_subject,
            thread_number,
            messages: vec![first],
        }
    }

    /// First message in archive order
    #[must_use]
    pub fn first_message(&self) -> Option<&Email> {
        self.messages.first()
    }

    /// Last message in archive order
    #[must_use]
    pub fn last_message(&self) -> Option<&Email> {
        self.messages.last()
    }

    /// Number of messages in the thread
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl fmt::Display for Thread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "thread {} \"{}\" ({} messages)",
            self.thread_number,
            self.normalized_subject,
            self.messages.len()
        )
    }
}
