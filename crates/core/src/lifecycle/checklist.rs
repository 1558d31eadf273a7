//! Modification completeness checklist.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The facts auto-promotion looks at, gathered fresh for each evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModificationChecklist {
    /// Asking price.
    pub asking_price: Decimal,
    /// Last (lowest agreed) price.
    pub last_price: Decimal,
    /// Modification cost, `None` when never entered. Zero counts as entered.
    pub modification_cost: Option<Decimal>,
    /// Notes describing the work done.
    pub modification_notes: Option<String>,
    /// Phone number of the agent who brought the vehicle.
    pub agent_phone: Option<String>,
    /// Agent commission, `None` when never entered. Zero counts as entered.
    pub agent_commission: Option<Decimal>,
    /// Whether media storage holds a "post modification" stage image.
    pub has_post_modification_image: bool,
}

/// A checklist item that is not yet satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingItem {
    /// Asking price is zero.
    AskingPrice,
    /// Last price is zero.
    LastPrice,
    /// Modification cost was never entered.
    ModificationCost,
    /// Modification notes are blank.
    ModificationNotes,
    /// Agent phone is blank.
    AgentPhone,
    /// Agent commission was never entered.
    AgentCommission,
    /// No post-modification image.
    PostModificationImage,
}

impl ModificationChecklist {
    /// Lists unsatisfied items, in checklist order.
    #[must_use]
    pub fn missing(&self) -> Vec<MissingItem> {
        let checks = [
            (self.asking_price > Decimal::ZERO, MissingItem::AskingPrice),
            (self.last_price > Decimal::ZERO, MissingItem::LastPrice),
            (self.modification_cost.is_some(), MissingItem::ModificationCost),
            (
                is_filled(self.modification_notes.as_deref()),
                MissingItem::ModificationNotes,
            ),
            (is_filled(self.agent_phone.as_deref()), MissingItem::AgentPhone),
            (self.agent_commission.is_some(), MissingItem::AgentCommission),
            (
                self.has_post_modification_image,
                MissingItem::PostModificationImage,
            ),
        ];

        checks
            .into_iter()
            .filter_map(|(ok, item)| (!ok).then_some(item))
            .collect()
    }

    /// Returns true when every item is satisfied.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
