use super::*;

#[test]
fn only_latest_ticket_is_current() {
    let mut debouncer = Debouncer::default();
    let first = debouncer.bump();
    let second = debouncer.bump();
    let third = debouncer.bump();
    assert!(!debouncer.is_current(first));
    assert!(!debouncer.is_current(second));
    assert!(debouncer.is_current(third));
}

#[test]
fn cancel_invalidates_pending_ticket() {
    let mut debouncer = Debouncer::default();
    let ticket = debouncer.bump();
    debouncer.cancel();
    assert!(!debouncer.is_current(ticket));
}

#[test]
fn single_trigger_stays_current() {
    let mut debouncer = Debouncer::default();
    let ticket = debouncer.bump();
    assert!(debouncer.is_current(ticket));
    assert!(debouncer.is_current(ticket));
}
