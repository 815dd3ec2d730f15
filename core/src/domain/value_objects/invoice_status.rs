//! Invoice processing status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Processing status of an invoice
///
/// Invoices are created as `Unprocessed`; the remaining states are driven by
/// payment processing outside this core. The serialized labels are part of
/// the persistence and wire contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    /// Not yet picked up for processing
    #[serde(rename = "未処理")]
    Unprocessed,
    /// Payment transfer in progress
    #[serde(rename = "処理中")]
    Processing,
    /// Payment transfer completed
    #[serde(rename = "処理済")]
    Processed,
    /// Payment transfer failed
    #[serde(rename = "エラー")]
    Error,
}

impl InvoiceStatus {
    /// The serialized label for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unprocessed => "未処理",
            Self::Processing => "処理中",
            Self::Processed => "処理済",
            Self::Error => "エラー",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "未処理" => Ok(Self::Unprocessed),
            "処理中" => Ok(Self::Processing),
            "処理済" => Ok(Self::Processed),
            "エラー" => Ok(Self::Error),
            other => Err(DomainError::validation(format!(
                "unknown invoice status: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for status in [
            InvoiceStatus::Unprocessed,
            InvoiceStatus::Processing,
            InvoiceStatus::Processed,
            InvoiceStatus::Error,
        ] {
            assert_eq!(status.as_str().parse::<InvoiceStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_serde_uses_the_labels() {
        let json = serde_json::to_string(&InvoiceStatus::Processing).unwrap();
        assert_eq!(json, "\"処理中\"");

        let status: InvoiceStatus = serde_json::from_str("\"エラー\"").unwrap();
        assert_eq!(status, InvoiceStatus::Error);
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        assert!("完了".parse::<InvoiceStatus>().is_err());
    }
}
