//! Exact-decimal fee, tax, and invoice total computation.
//!
//! All arithmetic runs on [`rust_decimal::Decimal`]; binary floating point is
//! never involved, so identical inputs always produce bit-identical results.
//! Fee and tax are truncated toward zero at zero fractional digits (whole
//! currency units).

use rust_decimal::Decimal;

/// Pure calculator for the monetary fields of an invoice
pub struct MonetaryCalculator;

impl MonetaryCalculator {
    /// Fee charged on a payment amount: `trunc(payment_amount * fee_rate)`
    pub fn compute_fee(payment_amount: Decimal, fee_rate: Decimal) -> Decimal {
        (payment_amount * fee_rate).trunc()
    }

    /// Consumption tax charged on a fee: `trunc(fee * tax_rate)`
    pub fn compute_tax(fee: Decimal, tax_rate: Decimal) -> Decimal {
        (fee * tax_rate).trunc()
    }

    /// Total billed amount: `payment_amount + fee + tax`
    pub fn compute_invoice_amount(payment_amount: Decimal, fee: Decimal, tax: Decimal) -> Decimal {
        payment_amount + fee + tax
    }
}
