//! Store configuration
//!
//! Identity and payment details the order message is built around. Defaults
//! carry the production PazSport values; a deployment can override them by
//! deserialising a config file into [`StoreInfo`].

use serde::Deserialize;

/// Store identity used by the checkout flow.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreInfo {
    /// Display name shown in the order header
    pub name: String,

    /// WhatsApp destination in international format, digits only
    pub whatsapp_number: String,

    /// Bank transfer details quoted in every order message
    pub payment: PaymentInfo,
}

/// Bank transfer details.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaymentInfo {
    /// Receiving bank or wallet
    pub bank: String,

    /// Transfer alias
    pub alias: String,

    /// Account holder
    pub holder: String,

    /// Holder tax id (CUIL)
    pub tax_id: String,
}

impl Default for StoreInfo {
    fn default() -> Self {
        StoreInfo {
            name: "PazSport".to_string(),
            whatsapp_number: "5492302462479".to_string(),
            payment: PaymentInfo::default(),
        }
    }
}

impl Default for PaymentInfo {
    fn default() -> Self {
        PaymentInfo {
            bank: "Mercado Pago".to_string(),
            alias: "pazsport".to_string(),
            holder: "Maria Paz Maldonado".to_string(),
            tax_id: "27-41831394-9".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_carry_the_production_values() {
        let store = StoreInfo::default();

        assert_eq!(store.name, "PazSport");
        assert_eq!(store.whatsapp_number, "5492302462479");
        assert_eq!(store.payment.alias, "pazsport");
    }

    #[test]
    fn partial_config_falls_back_to_defaults() -> TestResult {
        let store: StoreInfo = serde_json::from_str(r#"{"name": "Otra Tienda"}"#)?;

        assert_eq!(store.name, "Otra Tienda");
        assert_eq!(store.whatsapp_number, "5492302462479");
        assert_eq!(store.payment.bank, "Mercado Pago");

        Ok(())
    }
}
