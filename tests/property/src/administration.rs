use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use proptest::prelude::*;
use scope_guard::{FunctionSelector, GuardAccount, GuardError};

fn pubkey() -> impl Strategy<Value = Pubkey> {
    any::<[u8; 32]>()
        .prop_filter("non-zero", |bytes| bytes.iter().any(|b| *b != 0))
        .prop_map(Pubkey::new_from_array)
}

#[derive(Debug, Clone)]
enum Mutation {
    Target(bool),
    DelegateCall(bool),
    FunctionAllowList(bool),
    Fallback(bool),
    Function([u8; 4], bool),
}

fn mutation() -> impl Strategy<Value = Mutation> {
    prop_oneof![
        any::<bool>().prop_map(Mutation::Target),
        any::<bool>().prop_map(Mutation::DelegateCall),
        any::<bool>().prop_map(Mutation::FunctionAllowList),
        any::<bool>().prop_map(Mutation::Fallback),
        (any::<[u8; 4]>(), any::<bool>()).prop_map(|(selector, allowed)| Mutation::Function(selector, allowed)),
    ]
}

fn apply(guard: &mut GuardAccount, caller: &Pubkey, target: Pubkey, mutation: &Mutation) -> Result<()> {
    match mutation {
        Mutation::Target(value) => guard.set_target_allowed(caller, target, *value),
        Mutation::DelegateCall(value) => guard.set_delegate_call_allowed(caller, target, *value),
        Mutation::FunctionAllowList(value) => guard.set_function_allow_list_enforced(caller, target, *value),
        Mutation::Fallback(value) => guard.set_fallback_allowed(caller, target, *value),
        Mutation::Function(selector, value) => {
            guard.set_function_allowed(caller, target, FunctionSelector::new(*selector), *value)
        }
    }
}

/// Property: setup succeeds once and every later attempt is rejected
#[test]
fn prop_setup_runs_once() {
    proptest!(|(
        owner in pubkey(),
        avatar in pubkey(),
        modules in prop::collection::vec(pubkey(), 0..8),
        retry_owner in pubkey(),
        retry_avatar in pubkey(),
    )| {
        let mut guard = GuardAccount::default();
        guard.setup(owner, avatar, &modules).unwrap();

        prop_assert_eq!(
            guard.setup(retry_owner, retry_avatar, &[]).unwrap_err(),
            Error::from(GuardError::AlreadyInitialized)
        );
        prop_assert_eq!(guard.owner().unwrap(), owner);
        prop_assert_eq!(guard.avatar().unwrap(), avatar);
    });
}

/// Property: applying each mutation twice lands in the same state as once
#[test]
fn prop_mutations_are_idempotent() {
    proptest!(|(
        owner in pubkey(),
        targets in prop::collection::vec(pubkey(), 1..4),
        mutations in prop::collection::vec((0usize..4, mutation()), 1..24),
    )| {
        let mut once = GuardAccount::default();
        once.setup(owner, Pubkey::new_unique(), &[]).unwrap();
        let mut twice = GuardAccount {
            lifecycle: once.lifecycle.clone(),
            bump: once.bump,
        };

        for (index, mutation) in &mutations {
            let target = targets[index % targets.len()];
            apply(&mut once, &owner, target, mutation).unwrap();
            apply(&mut twice, &owner, target, mutation).unwrap();
            apply(&mut twice, &owner, target, mutation).unwrap();
        }

        prop_assert_eq!(&once.lifecycle, &twice.lifecycle);
    });
}

/// Property: only the current owner can mutate, and a rejected call changes
/// nothing
#[test]
fn prop_non_owner_cannot_mutate() {
    proptest!(|(
        owner in pubkey(),
        intruder in pubkey(),
        target in pubkey(),
        mutation in mutation(),
    )| {
        prop_assume!(owner != intruder);

        let mut guard = GuardAccount::default();
        guard.setup(owner, Pubkey::new_unique(), &[]).unwrap();
        let before = guard.lifecycle.clone();

        prop_assert_eq!(
            apply(&mut guard, &intruder, target, &mutation).unwrap_err(),
            Error::from(GuardError::Unauthorized)
        );
        prop_assert_eq!(&before, &guard.lifecycle);
    });
}

/// Property: ownership transfer moves administration to the new owner, and a
/// transfer to the zero address always fails
#[test]
fn prop_ownership_transfer_hands_over_control() {
    proptest!(|(
        owner in pubkey(),
        new_owner in pubkey(),
        target in pubkey(),
        mutation in mutation(),
    )| {
        prop_assume!(owner != new_owner);

        let mut guard = GuardAccount::default();
        guard.setup(owner, Pubkey::new_unique(), &[]).unwrap();

        prop_assert_eq!(
            guard.transfer_ownership(&owner, Pubkey::default()).unwrap_err(),
            Error::from(GuardError::Unauthorized)
        );
        prop_assert_eq!(guard.owner().unwrap(), owner);

        guard.transfer_ownership(&owner, new_owner).unwrap();
        prop_assert_eq!(guard.owner().unwrap(), new_owner);

        prop_assert_eq!(
            apply(&mut guard, &owner, target, &mutation).unwrap_err(),
            Error::from(GuardError::Unauthorized)
        );
        prop_assert!(apply(&mut guard, &new_owner, target, &mutation).is_ok());
    });
}
