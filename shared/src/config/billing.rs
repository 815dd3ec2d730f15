//! Billing rate configuration module

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fee and consumption tax rates applied when an invoice is issued
///
/// Both rates are fractional multipliers stored to four fractional digits,
/// e.g. `0.0400` for a 4% fee and `0.1000` for a 10% consumption tax.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BillingConfig {
    /// Fee rate applied to the payment amount
    pub fee_rate: Decimal,

    /// Consumption tax rate applied to the fee
    pub tax_rate: Decimal,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            fee_rate: Decimal::new(400, 4),   // 0.0400
            tax_rate: Decimal::new(1000, 4),  // 0.1000
        }
    }
}

impl BillingConfig {
    /// Create a new billing configuration with explicit rates
    pub fn new(fee_rate: Decimal, tax_rate: Decimal) -> Self {
        Self { fee_rate, tax_rate }
    }

    /// Create from environment variables
    ///
    /// Unparsable values fall back to the defaults rather than aborting.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let fee_rate = std::env::var("BILLING_FEE_RATE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.fee_rate);
        let tax_rate = std::env::var("BILLING_TAX_RATE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.tax_rate);

        Self { fee_rate, tax_rate }
    }
}
