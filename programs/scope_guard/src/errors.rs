// Error taxonomy for the scope guard
//
// Every failure aborts the enclosing transaction. Nothing here is retried or
// recovered inside the guard; the message is surfaced to the caller for
// diagnostics only.
use anchor_lang::prelude::*;

#[error_code]
pub enum GuardError {
    // ===== Lifecycle Errors =====
    #[msg("Guard already initialized")]
    AlreadyInitialized, // 6000

    #[msg("Guard not initialized")]
    NotInitialized, // 6001

    // ===== Authorization Errors =====
    #[msg("Unauthorized")]
    Unauthorized, // 6002

    #[msg("Address must not be the zero address")]
    InvalidAddress, // 6003

    // ===== Pre-execution Denials =====
    #[msg("Target address is not allowed")]
    TargetNotAllowed, // 6004

    #[msg("Delegate call not allowed to this address")]
    DelegateCallNotAllowed, // 6005

    #[msg("Target function is not allowed")]
    FunctionNotAllowed, // 6006

    // ===== Post-execution Denials =====
    #[msg("Cannot disable protected module")]
    ProtectedModuleDisabled, // 6007

    #[msg("Cannot disable this guard")]
    GuardDetached, // 6008

    #[msg("Account is not the avatar bound to this guard")]
    AvatarMismatch, // 6009

    #[msg("Avatar account data could not be decoded")]
    InvalidAvatarData, // 6010

    // ===== Capacity Errors =====
    #[msg("Allow-list is full")]
    AllowListFull, // 6011

    #[msg("Too many protected modules")]
    TooManyProtectedModules, // 6012

    // ===== Self-protection =====
    #[msg("Guarded calls cannot target the guard program")]
    GuardTargeted, // 6013
}
