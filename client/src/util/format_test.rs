use super::*;

#[test]
fn price_formats_cents_with_grouping() {
    assert_eq!(price(0), "$0.00");
    assert_eq!(price(5), "$0.05");
    assert_eq!(price(45_000), "$450.00");
    assert_eq!(price(123_456_789), "$1,234,567.89");
}

#[test]
fn short_date_truncates_timestamps() {
    assert_eq!(short_date("2026-05-01T09:00:00Z"), "2026-05-01");
    assert_eq!(short_date("today"), "today");
}

#[test]
fn count_label_pluralizes() {
    assert_eq!(count_label(0, "like", "likes"), "0 likes");
    assert_eq!(count_label(1, "like", "likes"), "1 like");
    assert_eq!(count_label(7, "comment", "comments"), "7 comments");
}
