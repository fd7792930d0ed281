use anchor_lang::prelude::*;
use proptest::prelude::*;
use scope_guard::{CallOperation, DenyReason, FunctionSelector, GuardAccount, Verdict};

fn pubkey() -> impl Strategy<Value = Pubkey> {
    any::<[u8; 32]>()
        .prop_filter("non-zero", |bytes| bytes.iter().any(|b| *b != 0))
        .prop_map(Pubkey::new_from_array)
}

fn operation() -> impl Strategy<Value = CallOperation> {
    prop_oneof![Just(CallOperation::Call), Just(CallOperation::DelegateCall)]
}

fn active_guard(owner: Pubkey) -> GuardAccount {
    let mut guard = GuardAccount::default();
    guard.setup(owner, Pubkey::new_unique(), &[]).unwrap();
    guard
}

/// Property: a target that was never allowed is always denied
#[test]
fn prop_unlisted_target_is_denied() {
    proptest!(|(
        owner in pubkey(),
        allowed in prop::collection::vec(pubkey(), 0..10),
        target in pubkey(),
        data in prop::collection::vec(any::<u8>(), 0..64),
    )| {
        prop_assume!(!allowed.contains(&target));

        let mut guard = active_guard(owner);
        for listed in &allowed {
            guard.set_target_allowed(&owner, *listed, true).unwrap();
            guard.set_delegate_call_allowed(&owner, *listed, true).unwrap();
        }

        prop_assert_eq!(
            guard.pre_check(&target, CallOperation::Call, &data).unwrap(),
            Verdict::Deny(DenyReason::TargetNotAllowed)
        );
        prop_assert_eq!(
            guard.pre_check(&target, CallOperation::DelegateCall, &data).unwrap(),
            Verdict::Deny(DenyReason::DelegateCallNotAllowed)
        );
    });
}

/// Property: delegate calls pass only with both the target and the
/// delegate-call permission; plain-call permission never implies it
#[test]
fn prop_delegate_call_requires_both_permissions() {
    proptest!(|(
        owner in pubkey(),
        target in pubkey(),
        target_allowed: bool,
        delegate_allowed: bool,
        data in prop::collection::vec(any::<u8>(), 0..64),
    )| {
        let mut guard = active_guard(owner);
        guard.set_target_allowed(&owner, target, target_allowed).unwrap();
        guard.set_delegate_call_allowed(&owner, target, delegate_allowed).unwrap();

        let delegate = guard.pre_check(&target, CallOperation::DelegateCall, &data).unwrap();
        if target_allowed && delegate_allowed {
            prop_assert_eq!(delegate, Verdict::Allow);
        } else {
            prop_assert_eq!(delegate, Verdict::Deny(DenyReason::DelegateCallNotAllowed));
        }

        let plain = guard.pre_check(&target, CallOperation::Call, &data).unwrap();
        prop_assert_eq!(plain.is_allowed(), target_allowed);
    });
}

/// Property: with function-level restriction on and one selector allowed, a
/// call passes iff its leading 4 bytes equal that selector
#[test]
fn prop_function_scope_matches_leading_selector() {
    proptest!(|(
        owner in pubkey(),
        target in pubkey(),
        selector in any::<[u8; 4]>(),
        data in prop::collection::vec(any::<u8>(), 0..16),
        use_selector: bool,
        operation in operation(),
    )| {
        let mut guard = active_guard(owner);
        guard.set_target_allowed(&owner, target, true).unwrap();
        guard.set_delegate_call_allowed(&owner, target, true).unwrap();
        guard.set_function_allow_list_enforced(&owner, target, true).unwrap();
        guard
            .set_function_allowed(&owner, target, FunctionSelector::new(selector), true)
            .unwrap();

        let calldata = if use_selector {
            [selector.as_slice(), data.as_slice()].concat()
        } else {
            data.clone()
        };

        let matches = calldata.len() >= 4 && calldata[..4] == selector;
        let verdict = guard.pre_check(&target, operation, &calldata).unwrap();
        if matches {
            prop_assert_eq!(verdict, Verdict::Allow);
        } else {
            prop_assert_eq!(verdict, Verdict::Deny(DenyReason::FunctionNotAllowed));
        }
    });
}

/// Property: pre-checks never change what later pre-checks return
#[test]
fn prop_pre_check_is_pure() {
    proptest!(|(
        owner in pubkey(),
        target in pubkey(),
        queries in prop::collection::vec(
            (operation(), prop::collection::vec(any::<u8>(), 0..8)),
            1..20
        ),
    )| {
        let mut guard = active_guard(owner);
        guard.set_target_allowed(&owner, target, true).unwrap();
        let before = guard.lifecycle.clone();

        let first: Vec<Verdict> = queries
            .iter()
            .map(|(operation, data)| guard.pre_check(&target, *operation, data).unwrap())
            .collect();
        let second: Vec<Verdict> = queries
            .iter()
            .map(|(operation, data)| guard.pre_check(&target, *operation, data).unwrap())
            .collect();

        prop_assert_eq!(first, second);
        prop_assert_eq!(&before, &guard.lifecycle);
    });
}
