use super::*;

#[test]
fn check_reports_success() {
    assert!(check::<&str>(StorageOp::Write, "trackside.draft.callout", Ok(())));
}

#[test]
fn check_reports_failed_remove_and_write() {
    assert!(!check(StorageOp::Remove, "trackside.draft.event", Err("SecurityError")));
    assert!(!check(StorageOp::Write, "trackside.draft.event", Err("QuotaExceededError")));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn native_storage_calls_are_inert() {
    save_raw("trackside.test", "{}");
    remove("trackside.test");
    assert_eq!(load_raw("trackside.test"), None);
}
