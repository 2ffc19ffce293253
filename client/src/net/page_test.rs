use super::*;

#[test]
fn full_page_implies_more() {
    assert!(has_more(PAGE_SIZE));
    let page = Page::new(vec![0u8; 20], 1);
    assert!(page.has_more);
}

#[test]
fn short_page_is_exhausted() {
    assert!(!has_more(19));
    assert!(!has_more(0));
    let page = Page::new(vec![0u8; 7], 3);
    assert!(!page.has_more);
    assert_eq!(page.next(), 4);
}

#[test]
fn page_query_includes_page_and_limit() {
    let pairs = page_query(2, &[]);
    assert_eq!(pairs, vec![("page", "2".to_owned()), ("limit", "20".to_owned())]);
}

#[test]
fn page_query_clamps_page_zero_to_one() {
    let pairs = page_query(0, &[]);
    assert_eq!(pairs[0], ("page", "1".to_owned()));
}

#[test]
fn page_query_skips_blank_filters_and_trims() {
    let pairs = page_query(
        1,
        &[("q", Some("  tsukuba ".to_owned())), ("type", Some("   ".to_owned())), ("region", None)],
    );
    assert_eq!(
        pairs,
        vec![
            ("page", "1".to_owned()),
            ("limit", "20".to_owned()),
            ("q", "tsukuba".to_owned()),
        ]
    );
}

#[test]
fn list_body_accepts_bare_array() {
    let body: ListBody<u32> = serde_json::from_str("[1,2,3]").unwrap();
    assert_eq!(body.into_items(), vec![1, 2, 3]);
}

#[test]
fn list_body_accepts_data_wrapper() {
    let body: ListBody<u32> = serde_json::from_str(r#"{"data":[4,5],"page":1}"#).unwrap();
    assert_eq!(body.into_items(), vec![4, 5]);
}
