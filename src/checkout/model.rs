use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Accepted payment methods. No payment is actually processed.
///
/// Checkout forms carry the label as text and parse it with [`FromStr`], so an
/// unknown method is reported as a validation error in the usual JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaymentMethod {
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "UPI")]
    Upi,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [Self::CashOnDelivery, Self::CreditCard, Self::Upi];

    pub fn label(self) -> &'static str {
        match self {
            Self::CashOnDelivery => "Cash on Delivery",
            Self::CreditCard => "Credit Card",
            Self::Upi => "UPI",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(raw))
            .ok_or_else(|| {
                AppError::ValidationFailed(format!(
                    "Unknown payment method '{raw}'; choose one of: Cash on Delivery, Credit Card, UPI"
                ))
            })
    }
}

pub const ORDER_STATUS_CONFIRMED: &str = "Confirmed";

/// Shipping form. Missing fields deserialize as empty and fail validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingInfo {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
}

impl ShippingInfo {
    fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("first name", self.first_name.as_str()),
            ("last name", self.last_name.as_str()),
            ("phone", self.phone.as_str()),
            ("address", self.address.as_str()),
            ("city", self.city.as_str()),
            ("pincode", self.pincode.as_str()),
        ]
    }

    /// Every field must be non-blank. The error names all missing fields.
    pub fn validate(&self) -> Result<(), AppError> {
        let missing: Vec<&str> = self
            .fields()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationFailed(format!(
                "Please fill all required fields: {}",
                missing.join(", ")
            )))
        }
    }

    /// Copy with surrounding whitespace removed, as stored on the order.
    pub fn trimmed(&self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            pincode: self.pincode.trim().to_string(),
        }
    }
}
