//! Vehicle mutation service.
//!
//! Runs one create or update through validation, balance recomputation,
//! settlement inference, and the lifecycle rules, producing the record to
//! persist. The caller must hold an exclusive view of the vehicle for the
//! duration of the call.

use rust_decimal::Decimal;
use tracing::debug;

use motorlot_shared::types::VehicleId;

use crate::lifecycle::{LifecycleAction, LifecycleError, LifecycleService, VehicleStatus};
use crate::payment::{LedgerInput, PaymentLedger, PaymentMode, RawAmount, normalize_amount};
use crate::settlement::{
    SettlementContext, SettlementHistory, SettlementRecord, SettlementTracker, SettlementType,
};

use super::error::VehicleError;
use super::input::{MutationContext, NewVehicle, VehiclePatch};
use super::record::{
    CustomerDetails, FieldChange, ModificationDetails, PurchaseDetails, SaleDetails, VehicleRecord,
};

/// The record to persist plus what happened to it.
#[derive(Debug, Clone)]
pub struct MutationOutcome {
    /// The new state of the vehicle.
    pub record: VehicleRecord,
    /// Settlements appended by this mutation (at most one per side).
    pub settlements: Vec<SettlementRecord>,
    /// Status changes applied by this mutation, in order.
    pub actions: Vec<LifecycleAction>,
}

/// Stateless service for vehicle mutations.
pub struct VehicleService;

impl VehicleService {
    /// Registers a newly purchased vehicle.
    ///
    /// The vehicle starts `OnModification`. An explicit status in the
    /// details and auto-promotion are applied as for an update. No
    /// settlements are inferred on creation.
    pub fn create(
        input: NewVehicle,
        ctx: &MutationContext,
    ) -> Result<MutationOutcome, VehicleError> {
        let vehicle_number = input.vehicle_number.trim().to_string();
        if vehicle_number.is_empty() {
            return Err(VehicleError::MissingField {
                field: "vehicleNumber",
            });
        }

        let target = parse_target(&input.details)?;

        let mut record = VehicleRecord {
            id: VehicleId::new(),
            vehicle_number,
            model: None,
            chassis_number: None,
            chassis_number_history: Vec::new(),
            engine_number: None,
            engine_number_history: Vec::new(),
            status: VehicleStatus::OnModification,
            purchase: PurchaseDetails {
                price: Decimal::ZERO,
                date: input.purchase_date,
                seller_name: None,
                seller_phone: None,
                payments: PaymentLedger::new(),
                remaining_to_seller: Decimal::ZERO,
            },
            modification: ModificationDetails::default(),
            sale: SaleDetails::default(),
            settlements: SettlementHistory::new(),
            created_by: ctx.actor,
            created_at: ctx.at,
            updated_at: ctx.at,
            deleted_at: None,
            deleted_by: None,
        };

        apply_fields(&mut record, &input.details, ctx, IdentityLog::Skip)?;
        record.recompute_balances();

        let actions = settle_status(&mut record, target, ctx)?;
        debug!(vehicle_id = %record.id, status = %record.status, "vehicle created");

        Ok(MutationOutcome {
            record,
            settlements: Vec::new(),
            actions,
        })
    }

    /// Applies a patch to an existing vehicle.
    ///
    /// Order: validate, apply fields, recompute both balances, infer one
    /// settlement per side from the before/after ledgers, apply the
    /// explicit status (if it differs from the current one), then evaluate
    /// auto-promotion. Nothing changes if any step fails.
    ///
    /// A customer settlement is only inferred when the vehicle was already
    /// in a sale stage before this update. Entering the sale itself, or
    /// repricing unsold stock, never settles anything.
    pub fn update(
        current: &VehicleRecord,
        patch: &VehiclePatch,
        ctx: &MutationContext,
    ) -> Result<MutationOutcome, VehicleError> {
        ensure_live(current)?;
        let target = parse_target(patch)?;

        let mut next = current.clone();
        apply_fields(&mut next, patch, ctx, IdentityLog::Record)?;
        next.recompute_balances();

        let settlement_ctx = SettlementContext {
            settled_by: ctx.actor,
            settled_at: ctx.at,
            notes: ctx.settlement_notes.clone(),
        };
        let to_seller = SettlementTracker::infer(
            SettlementType::ToSeller,
            current.purchase.snapshot(),
            next.purchase.snapshot(),
            &settlement_ctx,
        );
        let from_customer = current.status.is_sale_stage().then(|| {
            SettlementTracker::infer(
                SettlementType::FromCustomer,
                current.sale.snapshot(),
                next.sale.snapshot(),
                &settlement_ctx,
            )
        });
        let settlements: Vec<SettlementRecord> =
            to_seller.into_iter().chain(from_customer.flatten()).collect();
        next.settlements.extend(settlements.iter().cloned());

        let actions = settle_status(&mut next, target, ctx)?;
        next.updated_at = ctx.at;

        Ok(MutationOutcome {
            record: next,
            settlements,
            actions,
        })
    }

    /// Changes only the status of a vehicle.
    pub fn change_status(
        current: &VehicleRecord,
        target: &str,
        ctx: &MutationContext,
    ) -> Result<MutationOutcome, VehicleError> {
        let patch = VehiclePatch {
            status: Some(target.to_string()),
            ..VehiclePatch::default()
        };
        Self::update(current, &patch, ctx)
    }

    /// Soft-deletes a vehicle, stamping who and when.
    pub fn soft_delete(
        current: &VehicleRecord,
        ctx: &MutationContext,
    ) -> Result<MutationOutcome, VehicleError> {
        let action = LifecycleService::soft_delete(current.status, ctx.actor, ctx.at)?;

        let mut next = current.clone();
        apply_action(&mut next, &action);
        next.updated_at = ctx.at;

        Ok(MutationOutcome {
            record: next,
            settlements: Vec::new(),
            actions: vec![action],
        })
    }
}

/// Whether identity changes are written to the change logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdentityLog {
    Record,
    Skip,
}

fn ensure_live(record: &VehicleRecord) -> Result<(), VehicleError> {
    if record.is_active() {
        Ok(())
    } else {
        Err(LifecycleError::VehicleDeleted.into())
    }
}

fn parse_target(patch: &VehiclePatch) -> Result<Option<VehicleStatus>, VehicleError> {
    patch
        .status
        .as_deref()
        .map(|s| {
            VehicleStatus::parse(s).ok_or_else(|| LifecycleError::UnknownStatus(s.to_string()))
        })
        .transpose()
        .map_err(Into::into)
}

/// Applies the explicit status (if new), then auto-promotion.
fn settle_status(
    record: &mut VehicleRecord,
    target: Option<VehicleStatus>,
    ctx: &MutationContext,
) -> Result<Vec<LifecycleAction>, VehicleError> {
    let mut actions = Vec::new();

    if let Some(target) = target.filter(|t| *t != record.status) {
        let action = LifecycleService::transition(record.status, target, ctx.actor, ctx.at)?;
        apply_action(record, &action);
        actions.push(action);
    }

    let checklist = record.checklist();
    if let Some(action) = LifecycleService::auto_promote(record.status, &checklist, ctx.at) {
        apply_action(record, &action);
        actions.push(action);
    }

    Ok(actions)
}

fn apply_action(record: &mut VehicleRecord, action: &LifecycleAction) {
    record.status = action.new_status();
    match action {
        LifecycleAction::Transition {
            new_status: VehicleStatus::Sold,
            changed_at,
            ..
        } => {
            record.sale.sale_date.get_or_insert(changed_at.date_naive());
        }
        LifecycleAction::SoftDelete {
            deleted_by,
            deleted_at,
            ..
        } => {
            record.deleted_at = Some(*deleted_at);
            record.deleted_by = Some(*deleted_by);
        }
        _ => {}
    }
}

/// Validates every monetary field first, then writes all fields.
fn apply_fields(
    record: &mut VehicleRecord,
    patch: &VehiclePatch,
    ctx: &MutationContext,
    identity_log: IdentityLog,
) -> Result<(), VehicleError> {
    if let Some(number) = patch.vehicle_number.as_deref() {
        let number = number.trim();
        if number != record.vehicle_number {
            return Err(VehicleError::VehicleNumberImmutable {
                current: record.vehicle_number.clone(),
                attempted: number.to_string(),
            });
        }
    }

    let purchase_price = amount("purchasePrice", patch.purchase_price.as_ref())?;
    let modification_cost = amount("modificationCost", patch.modification_cost.as_ref())?;
    let agent_commission = amount("agentCommission", patch.agent_commission.as_ref())?;
    let other_cost = amount("otherCost", patch.other_cost.as_ref())?;
    let asking_price = amount("askingPrice", patch.asking_price.as_ref())?;
    let last_price = amount("lastPrice", patch.last_price.as_ref())?;

    let mut purchase_payments = record.purchase.payments.clone();
    apply_ledger("purchasePayments", &mut purchase_payments, &patch.purchase_payments)?;
    let mut sale_payments = record.sale.payments.clone();
    apply_ledger("salePayments", &mut sale_payments, &patch.sale_payments)?;

    if let Some(chassis) = &patch.chassis_number {
        set_identity(
            &mut record.chassis_number,
            &mut record.chassis_number_history,
            chassis,
            ctx,
            identity_log,
        );
    }
    if let Some(engine) = &patch.engine_number {
        set_identity(
            &mut record.engine_number,
            &mut record.engine_number_history,
            engine,
            ctx,
            identity_log,
        );
    }
    assign(&mut record.model, patch.model.as_ref());

    let purchase = &mut record.purchase;
    if let Some(price) = purchase_price {
        purchase.price = price;
    }
    if let Some(date) = patch.purchase_date {
        purchase.date = date;
    }
    assign(&mut purchase.seller_name, patch.seller_name.as_ref());
    assign(&mut purchase.seller_phone, patch.seller_phone.as_ref());
    purchase.payments = purchase_payments;

    let modification = &mut record.modification;
    if modification_cost.is_some() {
        modification.cost = modification_cost;
    }
    if agent_commission.is_some() {
        modification.agent_commission = agent_commission;
    }
    if let Some(other) = other_cost {
        modification.other_cost = other;
    }
    assign(&mut modification.notes, patch.modification_notes.as_ref());
    assign(&mut modification.agent_name, patch.agent_name.as_ref());
    assign(&mut modification.agent_phone, patch.agent_phone.as_ref());
    if let Some(has_image) = patch.has_post_modification_image {
        modification.has_post_modification_image = has_image;
    }

    let sale = &mut record.sale;
    if let Some(price) = asking_price {
        sale.asking_price = price;
    }
    if let Some(price) = last_price {
        sale.last_price = price;
    }
    let customer: &mut CustomerDetails = &mut sale.customer;
    assign(&mut customer.name, patch.customer_name.as_ref());
    assign(&mut customer.phone, patch.customer_phone.as_ref());
    assign(&mut customer.address, patch.customer_address.as_ref());
    if let Some(date) = patch.sale_date {
        sale.sale_date = Some(date);
    }
    sale.payments = sale_payments;
    if let Some(enabled) = patch.security_cheque_enabled {
        sale.security_cheque_enabled = enabled;
    }

    Ok(())
}

fn amount(field: &str, raw: Option<&RawAmount>) -> Result<Option<Decimal>, VehicleError> {
    raw.map(|raw| {
        normalize_amount(Some(raw)).map_err(|source| VehicleError::InvalidAmount {
            field: field.to_string(),
            source,
        })
    })
    .transpose()
}

fn apply_ledger<M: PaymentMode>(
    field: &str,
    ledger: &mut PaymentLedger<M>,
    input: &LedgerInput<M>,
) -> Result<(), VehicleError> {
    // Validate bucket by bucket so the error names the offending mode.
    for (mode, raw) in input {
        normalize_amount(Some(raw)).map_err(|source| VehicleError::InvalidAmount {
            field: format!("{field}.{}", mode.as_str()),
            source,
        })?;
    }
    ledger.apply(input).map_err(|source| VehicleError::InvalidAmount {
        field: field.to_string(),
        source,
    })
}

fn assign(slot: &mut Option<String>, value: Option<&String>) {
    if let Some(value) = value {
        let trimmed = value.trim();
        *slot = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }
}

fn set_identity(
    slot: &mut Option<String>,
    history: &mut Vec<FieldChange>,
    value: &str,
    ctx: &MutationContext,
    identity_log: IdentityLog,
) {
    let trimmed = value.trim();
    let new_value = (!trimmed.is_empty()).then(|| trimmed.to_string());
    if *slot == new_value {
        return;
    }

    if identity_log == IdentityLog::Record {
        history.push(FieldChange {
            old_value: slot.clone(),
            new_value: new_value.clone(),
            changed_by: ctx.actor,
            changed_at: ctx.at,
        });
    }
    *slot = new_value;
}
