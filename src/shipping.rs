//! Shipping
//!
//! Three-tier shipping cost lookup by postal-code prefix: free pickup in
//! Winifreda, a flat regional rate for La Pampa, and a flat national rate for
//! everywhere else.

use rusty_money::{Money, iso::Currency};

use crate::money::pesos;

/// Postal code of the free local-pickup zone (Winifreda).
pub const FREE_PICKUP_ZIP: &str = "6313";

/// Postal-code prefix of the regional tier (La Pampa).
const REGIONAL_PREFIX: &str = "63";

/// Shipping tier selected from a postal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingZone {
    /// No postal code entered yet; the UI shows "not calculated", not "free".
    NotQuoted,

    /// Winifreda: free delivery or pickup at the store.
    LocalPickup,

    /// La Pampa province.
    Regional,

    /// Rest of the country.
    National,
}

impl ShippingZone {
    /// Selects the zone for a postal code.
    ///
    /// This is a total function: the postal code is not validated, and input
    /// that matches no prefix (malformed strings included) lands in the
    /// national tier.
    #[must_use]
    pub fn from_zip(zip: &str) -> Self {
        if zip.is_empty() {
            Self::NotQuoted
        } else if zip == FREE_PICKUP_ZIP {
            Self::LocalPickup
        } else if zip.starts_with(REGIONAL_PREFIX) {
            Self::Regional
        } else {
            Self::National
        }
    }

    /// The flat shipping cost for this zone.
    #[must_use]
    pub fn cost(self) -> Money<'static, Currency> {
        match self {
            Self::NotQuoted | Self::LocalPickup => pesos(0),
            Self::Regional => pesos(5_500),
            Self::National => pesos(8_000),
        }
    }
}

/// Quotes the shipping cost for a postal code.
#[must_use]
pub fn quote(zip: &str) -> Money<'static, Currency> {
    ShippingZone::from_zip(zip).cost()
}
