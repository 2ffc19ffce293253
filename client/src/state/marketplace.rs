//! Marketplace listing + purchase flow state.

#[cfg(test)]
#[path = "marketplace_test.rs"]
mod marketplace_test;

use super::callout::non_empty;
use crate::net::types::{Listing, Purchase, PurchaseRequest};

/// Page-level state for one listing.
#[derive(Clone, Debug, Default)]
pub struct ListingState {
    pub listing: Option<Listing>,
    pub loading: bool,
    pub error: Option<String>,
    pub purchasing: bool,
    pub receipt: Option<Purchase>,
}

impl ListingState {
    /// Record a completed purchase and reduce the local stock mirror.
    pub fn complete_purchase(&mut self, purchase: Purchase) {
        if let Some(listing) = self.listing.as_mut() {
            listing.available = listing.available.saturating_sub(purchase.quantity);
        }
        self.purchasing = false;
        self.error = None;
        self.receipt = Some(purchase);
    }
}

/// Purchase form inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurchaseForm {
    pub quantity: String,
    pub shipping_address: String,
    pub note: String,
}

impl Default for PurchaseForm {
    fn default() -> Self {
        Self {
            quantity: "1".to_owned(),
            shipping_address: String::new(),
            note: String::new(),
        }
    }
}

impl PurchaseForm {
    /// Check inputs against the listing's stock and build the request.
    ///
    /// # Errors
    ///
    /// Returns the inline message for the first invalid field.
    pub fn validate(&self, available: u32) -> Result<PurchaseRequest, &'static str> {
        if available == 0 {
            return Err("This listing is sold out.");
        }
        let quantity = match self.quantity.trim().parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => return Err("Quantity must be at least 1."),
        };
        if quantity > available {
            return Err("Not enough stock for that quantity.");
        }
        let shipping_address = self.shipping_address.trim();
        if shipping_address.is_empty() {
            return Err("Enter a shipping address.");
        }
        Ok(PurchaseRequest {
            quantity,
            shipping_address: shipping_address.to_owned(),
            note: non_empty(&self.note),
        })
    }
}

/// Total in cents for `quantity` units, saturating instead of overflowing.
pub fn order_total_cents(price_cents: u32, quantity: u32) -> u64 {
    u64::from(price_cents).saturating_mul(u64::from(quantity))
}
