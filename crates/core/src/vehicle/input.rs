//! Create/update payloads as they arrive from the dealership forms.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use motorlot_shared::types::UserId;

use crate::payment::{LedgerInput, PurchaseMode, RawAmount, SaleMode};

/// Fields a create or update may set. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehiclePatch {
    /// Must match the stored vehicle number when present.
    pub vehicle_number: Option<String>,
    /// Make and model.
    pub model: Option<String>,
    /// Chassis number. Changes are logged.
    pub chassis_number: Option<String>,
    /// Engine number. Changes are logged.
    pub engine_number: Option<String>,

    /// Purchase price.
    pub purchase_price: Option<RawAmount>,
    /// Purchase date.
    pub purchase_date: Option<NaiveDate>,
    /// Seller name.
    pub seller_name: Option<String>,
    /// Seller phone.
    pub seller_phone: Option<String>,
    /// Buckets paid to the seller. Only the named buckets change.
    pub purchase_payments: LedgerInput<PurchaseMode>,

    /// Modification cost. `"NIL"` counts as entered (zero).
    pub modification_cost: Option<RawAmount>,
    /// Modification notes.
    pub modification_notes: Option<String>,
    /// Agent name.
    pub agent_name: Option<String>,
    /// Agent phone.
    pub agent_phone: Option<String>,
    /// Agent commission. `"NIL"` counts as entered (zero).
    pub agent_commission: Option<RawAmount>,
    /// Other cost.
    pub other_cost: Option<RawAmount>,
    /// Completeness signal from media storage.
    pub has_post_modification_image: Option<bool>,

    /// Asking price.
    pub asking_price: Option<RawAmount>,
    /// Last agreed price.
    pub last_price: Option<RawAmount>,
    /// Customer name.
    pub customer_name: Option<String>,
    /// Customer phone.
    pub customer_phone: Option<String>,
    /// Customer address.
    pub customer_address: Option<String>,
    /// Sale date.
    pub sale_date: Option<NaiveDate>,
    /// Buckets received from the customer. Only the named buckets change.
    pub sale_payments: LedgerInput<SaleMode>,
    /// Activates or deactivates the security cheque bucket.
    pub security_cheque_enabled: Option<bool>,

    /// Explicit status chosen by the actor, as text.
    pub status: Option<String>,
}

/// Payload for registering a newly purchased vehicle.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicle {
    /// Registration number.
    pub vehicle_number: String,
    /// Purchase date.
    pub purchase_date: NaiveDate,
    /// Everything else known at purchase time.
    #[serde(default)]
    pub details: VehiclePatch,
}

/// Who and when for one mutation.
#[derive(Debug, Clone)]
pub struct MutationContext {
    /// The acting user.
    pub actor: UserId,
    /// Timestamp for audit fields produced by the mutation.
    pub at: DateTime<Utc>,
    /// Note copied onto any settlement the mutation produces.
    pub settlement_notes: Option<String>,
}

impl MutationContext {
    /// Creates a context stamped with the current time.
    #[must_use]
    pub fn now(actor: UserId) -> Self {
        Self {
            actor,
            at: Utc::now(),
            settlement_notes: None,
        }
    }

    /// Attaches a settlement note.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.settlement_notes = Some(notes.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_patch_deserializes_form_payload() {
        let patch: VehiclePatch = serde_json::from_str(
            r#"{
                "askingPrice": "650000",
                "agentCommission": "NIL",
                "salePayments": { "cash": 150000, "online": "" },
                "status": "Sold"
            }"#,
        )
        .unwrap();

        assert_eq!(patch.asking_price, Some(RawAmount::Number(dec!(650000))));
        assert_eq!(patch.agent_commission, Some(RawAmount::Text("NIL".into())));
        assert_eq!(patch.sale_payments.len(), 2);
        assert_eq!(patch.status.as_deref(), Some("Sold"));
        assert!(patch.purchase_payments.is_empty());
    }

    #[test]
    fn test_new_vehicle_without_details() {
        let input: NewVehicle = serde_json::from_str(
            r#"{ "vehicleNumber": "MH12XY0001", "purchaseDate": "2026-03-14" }"#,
        )
        .unwrap();
        assert_eq!(input.vehicle_number, "MH12XY0001");
        assert!(input.details.purchase_price.is_none());
    }
}
