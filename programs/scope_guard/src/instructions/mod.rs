// Instruction handlers and their account contexts

pub mod setup;
pub mod manage_allow_list;
pub mod transfer_ownership;
pub mod check_transaction;
pub mod check_after_execution;

pub use setup::*;
pub use manage_allow_list::*;
pub use transfer_ownership::*;
pub use check_transaction::*;
pub use check_after_execution::*;
