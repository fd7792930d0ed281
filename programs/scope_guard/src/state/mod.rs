// State definitions for the scope guard

pub mod types;
pub mod allow_list;
pub mod guard_account;

pub use types::{CallOperation, FunctionSelector};
pub use allow_list::{AllowListStore, FunctionEntry, TargetEntry, TargetFlag};
pub use guard_account::{GuardAccount, GuardConfig, GuardLifecycle};
