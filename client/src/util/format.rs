//! Small display formatters shared by cards and pages.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `12345` -> `"$123.45"`.
pub fn price(cents: u64) -> String {
    let dollars = cents / 100;
    let rem = cents % 100;
    let mut whole = dollars.to_string();
    let mut grouped = String::new();
    while whole.len() > 3 {
        let tail = whole.split_off(whole.len() - 3);
        grouped = format!(",{tail}{grouped}");
    }
    format!("${whole}{grouped}.{rem:02}")
}

/// Date part of an RFC 3339 timestamp, or the input when it is shorter.
pub fn short_date(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}

/// `1 like` / `3 likes`.
pub fn count_label(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {plural}")
    }
}
