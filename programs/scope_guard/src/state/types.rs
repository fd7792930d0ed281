// Primitive types shared by the allow-list, the policy engine and the
// instruction interface.
use anchor_lang::prelude::*;
use sha2::{Digest, Sha256};

// ================================
// Call Operation
// ================================

/// How the avatar would dispatch a proposed call
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallOperation {
    /// Callee runs in its own storage context
    Call,
    /// Callee code runs against the avatar's storage
    DelegateCall,
}

impl CallOperation {
    pub fn is_delegate_call(self) -> bool {
        matches!(self, CallOperation::DelegateCall)
    }
}

// ================================
// Function Selector
// ================================

/// Leading 4 bytes of calldata identifying the invoked function.
/// Treated as an opaque key; the guard never decodes arguments.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct FunctionSelector(pub [u8; 4]);

impl FunctionSelector {
    pub const LEN: usize = 4;

    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Extract the selector from calldata. `None` when the calldata is too
    /// short to carry one.
    pub fn from_calldata(data: &[u8]) -> Option<Self> {
        let bytes: [u8; 4] = data.get(..Self::LEN)?.try_into().ok()?;
        Some(Self(bytes))
    }

    /// Derive a selector from a `name(argtypes)` signature: the first 4 bytes
    /// of its SHA-256 digest.
    pub fn from_signature(signature: &str) -> Self {
        let digest = Sha256::digest(signature.as_bytes());
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&digest[..Self::LEN]);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl From<[u8; 4]> for FunctionSelector {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl std::fmt::Display for FunctionSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x")?;
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
