use mbox_extract::{Email, NO_SUBJECT, group_into_threads, normalize_subject};

fn email(subject: Option<&str>, body: &str) -> Email {
    Email {
        from: Some("someone@example.com".to_string()),
        subject: subject.map(String::from),
        date: None,
        body: Some(body.to_string()),
    }
}

#[test]
fn test_normalize_strips_reply_and_forward_prefixes() {
    assert_eq!(normalize_subject(Some("Re: Hello")), "Hello");
    assert_eq!(normalize_subject(Some("Fwd: Re: Hello")), "Hello");
    assert_eq!(normalize_subject(Some("FW: hello")), "hello");
    assert_eq!(normalize_subject(Some("  spaced out  ")), "spaced out");
}

#[test]
fn test_normalize_handles_repeated_prefixes_without_spaces() {
    assert_eq!(normalize_subject(Some("RE:RE:Status update")), "Status update");
    assert_eq!(normalize_subject(Some("re:fwd:re:Ping")), "Ping");
}

#[test]
fn test_normalize_missing_or_hollow_subjects_hit_the_sentinel() {
    assert_eq!(normalize_subject(None), NO_SUBJECT);
    assert_eq!(normalize_subject(Some("")), NO_SUBJECT);
    assert_eq!(normalize_subject(Some("   ")), NO_SUBJECT);
    assert_eq!(normalize_subject(Some("Re: ")), NO_SUBJECT);
}

#[test]
fn test_grouping_is_stable_and_order_preserving() {
    let emails = vec![
        email(Some("Hello"), "one"),
        email(Some("Re: Hello"), "two"),
        email(Some("Fwd: Re: Hello"), "three"),
        email(Some("Goodbye"), "four"),
    ];

    let threads = group_into_threads(emails);

    assert_eq!(threads.len(), 2);

    assert_eq!(threads[0].thread_number, 1);
    assert_eq!(threads[0].normalized_subject, "Hello");
    let bodies: Vec<_> = threads[0]
        .messages
        .iter()
        .map(|m| m.body.as_deref().unwrap())
        .collect();
    assert_eq!(bodies, ["one", "two", "three"]);

    assert_eq!(threads[1].thread_number, 2);
    assert_eq!(threads[1].normalized_subject, "Goodbye");
    assert_eq!(threads[1].messages.len(), 1);
}

#[test]
fn test_subjectless_messages_share_one_bucket() {
    let emails = vec![
        email(None, "first"),
        email(Some("Real topic"), "second"),
        email(Some(""), "third"),
    ];

    let threads = group_into_threads(emails);

    assert_eq!(threads.len(), 2);
    assert_eq!(threads[0].normalized_subject, NO_SUBJECT);
    assert_eq!(threads[0].messages.len(), 2);
    assert_eq!(threads[1].normalized_subject, "Real topic");
}

#[test]
fn test_membership_order_ignores_dates() {
    let mut late = email(Some("Topic"), "sent later");
    late.date = Some("Fri, 02 Jan 2026 09:00:00 +0000".to_string());
    let mut early = email(Some("Re: Topic"), "sent earlier");
    early.date = Some("Thu, 01 Jan 2026 09:00:00 +0000".to_string());

    // Archive order has the later date first; grouping must not resort.
    let threads = group_into_threads(vec![late, early]);

    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0].messages[0].body.as_deref(), Some("sent later"));
    assert_eq!(threads[0].messages[1].body.as_deref(), Some("sent earlier"));
}

#[test]
fn test_empty_input_yields_no_threads() {
    assert!(group_into_threads(Vec::new()).is_empty());
}
