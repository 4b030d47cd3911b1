pub mod delete_confirm_modal;
pub mod modal;
pub mod money_modal;
pub mod transactions_modal;
pub mod transfer_modal;

pub use delete_confirm_modal::DeleteConfirmModal;
pub use money_modal::{MoneyKind, MoneyModal};
pub use transactions_modal::TransactionsModal;
pub use transfer_modal::TransferModal;
