//! Buyer, shipping and payment fields collected by the checkout view.
//!
//! The record is held for display only. Nothing here validates it or sends it
//! anywhere.

use serde::{Deserialize, Serialize};

/// Checkout form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    /// Free-form payment method label (e.g., "credit-card").
    pub payment_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_expiry: Option<String>,
    #[serde(default, rename = "cardCVC", skip_serializing_if = "Option::is_none")]
    pub card_cvc: Option<String>,
    /// Free-form shipping method label (e.g., "standard").
    pub shipping_method: String,
}

impl CheckoutInfo {
    /// First and last name joined by a space, skipping empty parts.
    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether card fields were filled in.
    pub fn has_card_details(&self) -> bool {
        self.card_number.is_some()
    }
}
