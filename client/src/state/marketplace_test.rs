use super::*;
use crate::net::types::UserRef;

fn listing(available: u32) -> Listing {
    Listing {
        id: "l-1".to_owned(),
        title: "Set of drag radials".to_owned(),
        description: "275/60R15, half tread".to_owned(),
        price_cents: 45_000,
        available,
        seller: UserRef {
            id: "u-5".to_owned(),
            username: "boostedbob".to_owned(),
            display_name: None,
            avatar_url: None,
        },
        image_url: None,
    }
}

fn form(quantity: &str, address: &str) -> PurchaseForm {
    PurchaseForm {
        quantity: quantity.to_owned(),
        shipping_address: address.to_owned(),
        note: String::new(),
    }
}

#[test]
fn validate_accepts_in_stock_quantity() {
    let request = form("2", " 12 Pit Lane ").validate(3).unwrap();
    assert_eq!(request.quantity, 2);
    assert_eq!(request.shipping_address, "12 Pit Lane");
    assert_eq!(request.note, None);
}

#[test]
fn validate_rejects_zero_and_garbage_quantity() {
    assert_eq!(form("0", "x").validate(3), Err("Quantity must be at least 1."));
    assert_eq!(form("two", "x").validate(3), Err("Quantity must be at least 1."));
}

#[test]
fn validate_rejects_over_stock_and_sold_out() {
    assert_eq!(form("4", "x").validate(3), Err("Not enough stock for that quantity."));
    assert_eq!(form("1", "x").validate(0), Err("This listing is sold out."));
}

#[test]
fn validate_requires_address() {
    assert_eq!(form("1", "  ").validate(3), Err("Enter a shipping address."));
}

#[test]
fn complete_purchase_reduces_stock_and_keeps_receipt() {
    let mut state = ListingState {
        listing: Some(listing(3)),
        purchasing: true,
        ..ListingState::default()
    };
    state.complete_purchase(Purchase {
        id: "o-1".to_owned(),
        listing_id: "l-1".to_owned(),
        quantity: 2,
        total_cents: 90_000,
    });
    assert_eq!(state.listing.as_ref().unwrap().available, 1);
    assert!(!state.purchasing);
    assert_eq!(state.receipt.as_ref().unwrap().id, "o-1");
}

#[test]
fn order_total_multiplies_price() {
    assert_eq!(order_total_cents(45_000, 2), 90_000);
    assert_eq!(order_total_cents(u32::MAX, u32::MAX), u64::from(u32::MAX) * u64::from(u32::MAX));
}
