//! # Subscriber CSV Export
//!
//! Assembles the `subscribers.csv` download: header row plus one line per
//! subscriber, newest first. Fields are quoted per RFC 4180 only when
//! they contain a delimiter, quote, or newline.

use std::borrow::Cow;

use crate::state::SubscriberRecord;

/// Render the subscriber list as CSV with an `email,created` header.
pub fn subscribers_csv(subscribers: &[SubscriberRecord]) -> String {
    let mut out = String::from("email,created\r\n");
    for sub in subscribers {
        out.push_str(&csv_field(&sub.email));
        out.push(',');
        out.push_str(&csv_field(&sub.created.to_rfc3339()));
        out.push_str("\r\n");
    }
    out
}

/// Quote a field when it needs quoting; pass it through otherwise.
fn csv_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
