// Guard facade: the two hook entry points, the owner-gated administration of
// the allow-list and the read interface.
//
// Every entry point except `setup` is only defined while the guard is active.
// Administrative mutators are plain storage writes. The hooks never write.
use anchor_lang::prelude::*;
use crate::audit::{AvatarWiring, AvatarWiringSnapshot, PostExecutionAuditor};
use crate::errors::GuardError;
use crate::events::*;
use crate::policy::{PolicyEngine, Verdict};
use crate::state::{
    CallOperation, FunctionSelector, GuardAccount, GuardConfig, GuardLifecycle, TargetFlag,
};
use crate::MAX_PROTECTED_MODULES;

impl GuardAccount {
    // ================================
    // Lifecycle
    // ================================

    pub fn is_active(&self) -> bool {
        matches!(self.lifecycle, GuardLifecycle::Active(_))
    }

    pub fn config(&self) -> Result<&GuardConfig> {
        match &self.lifecycle {
            GuardLifecycle::Active(config) => Ok(config),
            GuardLifecycle::Uninitialized => err!(GuardError::NotInitialized),
        }
    }

    fn config_mut(&mut self) -> Result<&mut GuardConfig> {
        match &mut self.lifecycle {
            GuardLifecycle::Active(config) => Ok(config),
            GuardLifecycle::Uninitialized => err!(GuardError::NotInitialized),
        }
    }

    /// Bind owner, avatar and protected modules. Succeeds exactly once.
    pub fn setup(&mut self, owner: Pubkey, avatar: Pubkey, protected_modules: &[Pubkey]) -> Result<()> {
        require!(!self.is_active(), GuardError::AlreadyInitialized);
        require_keys_neq!(owner, Pubkey::default(), GuardError::InvalidAddress);
        require_keys_neq!(avatar, Pubkey::default(), GuardError::InvalidAddress);

        let mut modules: Vec<Pubkey> = Vec::with_capacity(protected_modules.len());
        for module in protected_modules {
            require_keys_neq!(*module, Pubkey::default(), GuardError::InvalidAddress);
            if !modules.contains(module) {
                modules.push(*module);
            }
        }
        require!(
            modules.len() <= MAX_PROTECTED_MODULES,
            GuardError::TooManyProtectedModules
        );

        self.lifecycle = GuardLifecycle::Active(GuardConfig {
            owner,
            avatar,
            protected_modules: modules.clone(),
            allow_list: Default::default(),
        });

        msg!(
            "Scope guard set up for avatar {} with owner {} and {} protected modules",
            avatar,
            owner,
            modules.len()
        );
        emit!(GuardSetUp {
            owner,
            avatar,
            protected_modules: modules,
        });
        Ok(())
    }

    // ================================
    // Hooks
    // ================================

    /// Evaluate a proposed call before the avatar dispatches it
    pub fn pre_check(&self, target: &Pubkey, operation: CallOperation, data: &[u8]) -> Result<Verdict> {
        let config = self.config()?;
        let verdict = PolicyEngine::new(&config.allow_list).evaluate(target, operation, data);

        if let Verdict::Deny(reason) = verdict {
            msg!("Denied {:?} to {}: {:?}", operation, target, reason);
        }
        Ok(verdict)
    }

    /// Audit the avatar wiring after a dispatch. `guard` is this instance's
    /// own address as installed on the avatar.
    pub fn post_check<A>(&self, guard: &Pubkey, avatar: &A, execution_succeeded: bool) -> Result<Verdict>
    where
        A: AvatarWiring + ?Sized,
    {
        let config = self.config()?;
        Ok(PostExecutionAuditor::new(&config.protected_modules, *guard)
            .audit_after(avatar, execution_succeeded))
    }

    /// Post-check against raw avatar account data. The account must be the
    /// bound avatar before its wiring is trusted.
    pub fn audit_avatar_account(
        &self,
        guard: &Pubkey,
        avatar: &Pubkey,
        data: &[u8],
        execution_succeeded: bool,
    ) -> Result<Verdict> {
        require_keys_eq!(*avatar, self.avatar()?, GuardError::AvatarMismatch);
        let wiring = AvatarWiringSnapshot::try_from_account_data(data)?;
        self.post_check(guard, &wiring, execution_succeeded)
    }

    // ================================
    // Administration
    // ================================

    fn authorize(&mut self, caller: &Pubkey) -> Result<&mut GuardConfig> {
        let config = self.config_mut()?;
        require_keys_eq!(*caller, config.owner, GuardError::Unauthorized);
        Ok(config)
    }

    fn set_target_flag(&mut self, caller: &Pubkey, target: Pubkey, flag: TargetFlag, value: bool) -> Result<bool> {
        let previous = self
            .authorize(caller)?
            .allow_list
            .set_target_flag(target, flag, value)?;
        msg!("{:?} on {}: {} -> {}", flag, target, previous, value);
        Ok(previous)
    }

    pub fn set_target_allowed(&mut self, caller: &Pubkey, target: Pubkey, allowed: bool) -> Result<()> {
        let previous = self.set_target_flag(caller, target, TargetFlag::Allowed, allowed)?;
        emit!(TargetAllowedSet {
            target,
            previous,
            allowed,
        });
        Ok(())
    }

    pub fn set_delegate_call_allowed(&mut self, caller: &Pubkey, target: Pubkey, allowed: bool) -> Result<()> {
        let previous = self.set_target_flag(caller, target, TargetFlag::DelegateCall, allowed)?;
        emit!(DelegateCallAllowedSet {
            target,
            previous,
            allowed,
        });
        Ok(())
    }

    pub fn set_function_allow_list_enforced(
        &mut self,
        caller: &Pubkey,
        target: Pubkey,
        enforced: bool,
    ) -> Result<()> {
        let previous = self.set_target_flag(caller, target, TargetFlag::FunctionAllowList, enforced)?;
        emit!(FunctionAllowListEnforcedSet {
            target,
            previous,
            enforced,
        });
        Ok(())
    }

    pub fn set_fallback_allowed(&mut self, caller: &Pubkey, target: Pubkey, allowed: bool) -> Result<()> {
        let previous = self.set_target_flag(caller, target, TargetFlag::Fallback, allowed)?;
        emit!(FallbackAllowedSet {
            target,
            previous,
            allowed,
        });
        Ok(())
    }

    pub fn set_function_allowed(
        &mut self,
        caller: &Pubkey,
        target: Pubkey,
        selector: FunctionSelector,
        allowed: bool,
    ) -> Result<()> {
        let previous = self
            .authorize(caller)?
            .allow_list
            .set_function_allowed(target, selector, allowed)?;
        msg!("Function {} on {}: {} -> {}", selector, target, previous, allowed);
        emit!(FunctionAllowedSet {
            target,
            selector: selector.0,
            previous,
            allowed,
        });
        Ok(())
    }

    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<()> {
        let config = self.authorize(caller)?;
        require_keys_neq!(new_owner, Pubkey::default(), GuardError::Unauthorized);

        let previous_owner = std::mem::replace(&mut config.owner, new_owner);
        msg!("Ownership transferred from {} to {}", previous_owner, new_owner);
        emit!(OwnershipTransferred {
            previous_owner,
            new_owner,
        });
        Ok(())
    }

    // ================================
    // Read Interface
    // ================================

    pub fn owner(&self) -> Result<Pubkey> {
        Ok(self.config()?.owner)
    }

    pub fn avatar(&self) -> Result<Pubkey> {
        Ok(self.config()?.avatar)
    }

    pub fn protected_modules(&self) -> Result<&[Pubkey]> {
        Ok(&self.config()?.protected_modules)
    }

    pub fn is_protected_module(&self, module: &Pubkey) -> Result<bool> {
        Ok(self.config()?.protected_modules.contains(module))
    }

    pub fn is_target_allowed(&self, target: &Pubkey) -> Result<bool> {
        Ok(self.config()?.allow_list.is_target_allowed(target))
    }

    pub fn is_delegate_call_allowed(&self, target: &Pubkey) -> Result<bool> {
        Ok(self.config()?.allow_list.is_delegate_call_allowed(target))
    }

    pub fn is_function_allow_list_enforced(&self, target: &Pubkey) -> Result<bool> {
        Ok(self.config()?.allow_list.is_function_allow_list_enforced(target))
    }

    pub fn is_fallback_allowed(&self, target: &Pubkey) -> Result<bool> {
        Ok(self.config()?.allow_list.is_fallback_allowed(target))
    }

    pub fn is_function_allowed(&self, target: &Pubkey, selector: &FunctionSelector) -> Result<bool> {
        Ok(self.config()?.allow_list.is_function_allowed(target, selector))
    }
}
