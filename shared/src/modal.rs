//! # Modal Coordinator
//!
//! Visibility of the five dialogs. The dialogs are independent: opening one
//! never closes another. Hiding a dialog also drops any state it owned, which
//! today is only the account awaiting delete confirmation.

use crate::AccountId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Income,
    Expense,
    Transfer,
    Transactions,
    DeleteConfirm,
}

impl ModalKind {
    pub const ALL: [ModalKind; 5] = [
        ModalKind::Income,
        ModalKind::Expense,
        ModalKind::Transfer,
        ModalKind::Transactions,
        ModalKind::DeleteConfirm,
    ];

    fn index(self) -> usize {
        match self {
            ModalKind::Income => 0,
            ModalKind::Expense => 1,
            ModalKind::Transfer => 2,
            ModalKind::Transactions => 3,
            ModalKind::DeleteConfirm => 4,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalCoordinator {
    visible: [bool; 5],
    pending_delete: Option<AccountId>,
}

impl ModalCoordinator {
    /// All dialogs hidden
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, kind: ModalKind) {
        self.visible[kind.index()] = true;
    }

    pub fn hide(&mut self, kind: ModalKind) {
        self.visible[kind.index()] = false;
        if kind == ModalKind::DeleteConfirm {
            self.pending_delete = None;
        }
    }

    pub fn is_open(&self, kind: ModalKind) -> bool {
        self.visible[kind.index()]
    }

    /// Remember the account and ask for confirmation
    pub fn request_delete(&mut self, id: AccountId) {
        self.pending_delete = Some(id);
        self.show(ModalKind::DeleteConfirm);
    }

    pub fn pending_delete(&self) -> Option<AccountId> {
        self.pending_delete
    }

    /// Hand out the pending account once; the dialog stays open
    pub fn take_pending_delete(&mut self) -> Option<AccountId> {
        self.pending_delete.take()
    }
}
