//! Grouping messages into threads by normalized subject

use crate::types::{Email, NO_SUBJECT, Thread};
use std::collections::HashMap;
use tracing::debug;

/// Normalize a subject line into a thread grouping key.
///
/// Trims whitespace and strips leading reply/forward prefixes (`Re:`, `Fwd:`,
/// `Fw:`), case-insensitively and repeatedly, with or without spaces between
/// repetitions. Missing subjects, and subjects that are nothing but prefixes,
/// map to the [`NO_SUBJECT`] sentinel so they still bucket together.
#[must_use]
pub fn normalize_subject(subject: Option<&str>) -> String {
    let Some(subject) = subject else {
        return NO_SUBJECT.to_string();
    };

    let mut normalized = subject.trim();
    loop {
        let lower = normalized.to_lowercase();
        let stripped = ["re:", "fwd:", "fw:"]
            .iter()
            .find(|p| lower.starts_with(*p))
            .map(|p| normalized[p.len()..].trim_start());

        match stripped {
            Some(rest) => normalized = rest,
            None => break,
        }
    }

    if normalized.is_empty() {
        NO_SUBJECT.to_string()
    } else {
        normalized.to_string()
    }
}

/// Group messages into threads, preserving archive order.
///
/// The first message seen with a new normalized subject creates the next
/// thread (numbered from 1, in order of first appearance); later messages
/// with the same key append to it. Membership order is parse order; dates
/// play no part, even when they are missing or out of order.
pub fn group_into_threads(emails: impl IntoIterator<Item = Email>) -> Vec<Thread> {
    let mut threads: Vec<Thread> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for email in emails {
        let key = normalize_subject(email.subject.as_deref());

        if let Some(&i) = index_by_key.get(&key) {
            threads[i].messages.push(email);
        } else {
            #[allow(clippy::cast_possible_truncation)]
            let number = threads.len() as u32 + 1;
            debug!("new thread {number}: \"{key}\"");
            index_by_key.insert(key.clone(), threads.len());
            threads.push(Thread::new(key, number, email));
        }
    }

    threads
}
