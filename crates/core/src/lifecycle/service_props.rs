//! Property-based tests for LifecycleService.

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;

use motorlot_shared::types::UserId;

use super::checklist::ModificationChecklist;
use super::error::LifecycleError;
use super::service::LifecycleService;
use super::types::VehicleStatus;

fn arb_status() -> impl Strategy<Value = VehicleStatus> {
    prop::sample::select(VehicleStatus::ALL.to_vec())
}

fn arb_user() -> impl Strategy<Value = UserId> {
    any::<u128>().prop_map(|n| UserId::from_uuid(uuid::Uuid::from_u128(n)))
}

fn arb_text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), "[ a-z0-9]{0,12}".prop_map(Some)]
}

fn arb_checklist() -> impl Strategy<Value = ModificationChecklist> {
    (
        0i64..1_000_000,
        0i64..1_000_000,
        prop::option::of(0i64..100_000),
        arb_text(),
        arb_text(),
        prop::option::of(0i64..100_000),
        any::<bool>(),
    )
        .prop_map(
            |(asking, last, cost, notes, phone, commission, image)| ModificationChecklist {
                asking_price: Decimal::from(asking),
                last_price: Decimal::from(last),
                modification_cost: cost.map(Decimal::from),
                modification_notes: notes,
                agent_phone: phone,
                agent_commission: commission.map(Decimal::from),
                has_post_modification_image: image,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Explicit transitions succeed exactly when the table allows them.
    #[test]
    fn prop_transition_matches_table(
        from in arb_status(),
        to in arb_status(),
        user in arb_user(),
    ) {
        let result = LifecycleService::transition(from, to, user, Utc::now());
        if LifecycleService::is_valid_transition(from, to) {
            let action = result.unwrap();
            prop_assert_eq!(action.new_status(), to);
            prop_assert_eq!(action.from_status(), from);
        } else {
            prop_assert!(result.is_err());
        }
    }

    /// Explicit transitions never produce Deleted or OnModification.
    #[test]
    fn prop_transition_never_infers_deleted(
        from in arb_status(),
        to in arb_status(),
        user in arb_user(),
    ) {
        if let Ok(action) = LifecycleService::transition(from, to, user, Utc::now()) {
            prop_assert_ne!(action.new_status(), VehicleStatus::Deleted);
            prop_assert_ne!(action.new_status(), VehicleStatus::OnModification);
        }
    }

    /// Nothing leaves Deleted.
    #[test]
    fn prop_deleted_is_terminal(to in arb_status(), user in arb_user()) {
        prop_assert_eq!(
            LifecycleService::transition(VehicleStatus::Deleted, to, user, Utc::now()),
            Err(LifecycleError::VehicleDeleted)
        );
    }

    /// Auto-promotion only ever moves OnModification to InStock, and only
    /// once: applying its result and re-evaluating yields nothing.
    #[test]
    fn prop_auto_promotion_is_idempotent(
        status in arb_status(),
        checklist in arb_checklist(),
    ) {
        match LifecycleService::auto_promote(status, &checklist, Utc::now()) {
            Some(action) => {
                prop_assert_eq!(status, VehicleStatus::OnModification);
                prop_assert!(checklist.is_complete());
                prop_assert_eq!(action.new_status(), VehicleStatus::InStock);
                prop_assert!(
                    LifecycleService::auto_promote(action.new_status(), &checklist, Utc::now())
                        .is_none()
                );
            }
            None => {
                prop_assert!(status != VehicleStatus::OnModification || !checklist.is_complete());
            }
        }
    }
}
