//! Payment modes for each side of a vehicle transaction.
//!
//! Each ledger side has its own closed set of buckets, so a misspelled mode
//! can never create an untracked bucket.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A payment bucket key usable in a [`PaymentLedger`](super::PaymentLedger).
pub trait PaymentMode: Copy + Ord + fmt::Debug + Serialize + 'static {
    /// Every mode of this side, in display order.
    const ALL: &'static [Self];

    /// Stable snake_case key used in payloads.
    fn as_str(self) -> &'static str;

    /// Human-readable label used in summary strings.
    fn label(self) -> &'static str;

    /// The settlement mode this bucket is reported as, if any.
    fn settlement_mode(self) -> Option<SettlementMode>;

    /// Whether money in this bucket counts as paid.
    fn counts_toward_paid(self) -> bool {
        true
    }
}

/// How the dealership pays the seller of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseMode {
    /// Cash handed over.
    Cash,
    /// Bank transfer or cheque to the seller.
    BankTransfer,
    /// Amounts withheld from the seller (pending challans, loan closure).
    Deductions,
}

impl PaymentMode for PurchaseMode {
    const ALL: &'static [Self] = &[Self::Cash, Self::BankTransfer, Self::Deductions];

    fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::BankTransfer => "bank_transfer",
            Self::Deductions => "deductions",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::BankTransfer => "Bank Transfer",
            Self::Deductions => "Deductions",
        }
    }

    fn settlement_mode(self) -> Option<SettlementMode> {
        match self {
            Self::Cash => Some(SettlementMode::Cash),
            Self::BankTransfer => Some(SettlementMode::BankTransfer),
            Self::Deductions => None,
        }
    }
}

/// How a customer pays the dealership for a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleMode {
    /// Cash received.
    Cash,
    /// Bank transfer received.
    BankTransfer,
    /// UPI / online payment received.
    Online,
    /// Amount disbursed by a financier.
    Loan,
    /// Post-dated cheque held as security against the outstanding balance.
    SecurityCheque,
}

impl PaymentMode for SaleMode {
    const ALL: &'static [Self] = &[
        Self::Cash,
        Self::BankTransfer,
        Self::Online,
        Self::Loan,
        Self::SecurityCheque,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::BankTransfer => "bank_transfer",
            Self::Online => "online",
            Self::Loan => "loan",
            Self::SecurityCheque => "security_cheque",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::BankTransfer => "Bank Transfer",
            Self::Online => "Online",
            Self::Loan => "Loan",
            Self::SecurityCheque => "Security Cheque",
        }
    }

    fn settlement_mode(self) -> Option<SettlementMode> {
        match self {
            Self::Cash => Some(SettlementMode::Cash),
            Self::BankTransfer => Some(SettlementMode::BankTransfer),
            Self::Online => Some(SettlementMode::Online),
            Self::Loan => Some(SettlementMode::Loan),
            Self::SecurityCheque => None,
        }
    }

    /// A security cheque is collateral, not money received.
    fn counts_toward_paid(self) -> bool {
        !matches!(self, Self::SecurityCheque)
    }
}

/// Payment mode recorded on a settlement entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementMode {
    /// Cash.
    Cash,
    /// Bank transfer.
    BankTransfer,
    /// Online payment.
    Online,
    /// Loan disbursement.
    Loan,
}

impl SettlementMode {
    /// Order in which buckets are inspected when attributing a settlement.
    pub const PRIORITY: [Self; 4] = [Self::Cash, Self::BankTransfer, Self::Online, Self::Loan];

    /// Returns the string representation of the mode.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::BankTransfer => "bank_transfer",
            Self::Online => "online",
            Self::Loan => "loan",
        }
    }
}

impl fmt::Display for SettlementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_keys_match_serde() {
        for mode in PurchaseMode::ALL {
            let json = serde_json::to_string(mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
        }
        for mode in SaleMode::ALL {
            let json = serde_json::to_string(mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
        }
    }

    #[test]
    fn test_security_cheque_is_not_paid_money() {
        assert!(!SaleMode::SecurityCheque.counts_toward_paid());
        assert!(SaleMode::SecurityCheque.settlement_mode().is_none());
        assert!(SaleMode::ALL
            .iter()
            .filter(|m| **m != SaleMode::SecurityCheque)
            .all(|m| m.counts_toward_paid()));
    }

    #[test]
    fn test_deductions_have_no_settlement_mode() {
        assert_eq!(PurchaseMode::Deductions.settlement_mode(), None);
        assert_eq!(
            PurchaseMode::BankTransfer.settlement_mode(),
            Some(SettlementMode::BankTransfer)
        );
    }

    #[test]
    fn test_settlement_priority_order() {
        assert_eq!(
            SettlementMode::PRIORITY,
            [
                SettlementMode::Cash,
                SettlementMode::BankTransfer,
                SettlementMode::Online,
                SettlementMode::Loan
            ]
        );
        assert_eq!(SettlementMode::Online.to_string(), "online");
    }
}
