//! Store event types.

use serde::{Deserialize, Serialize};

use crate::ids::EntityId;

/// Events emitted by core services after successful mutations.
///
/// These events represent facts about store changes. The embedding UI
/// translates them into view refreshes (re-render a list, refetch the
/// dashboard summary, navigate to the login screen).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// Expenses were created, updated, deleted, or paid.
    ExpensesChanged { expense_ids: Vec<EntityId> },

    /// Wallets were created, updated, or rebalanced by a transaction.
    WalletsChanged { wallet_ids: Vec<EntityId> },

    /// Wallet transactions were recorded.
    TransactionsChanged { transaction_ids: Vec<EntityId> },

    /// Categories were created, updated, or deleted.
    CategoriesChanged { category_ids: Vec<EntityId> },

    /// Statuses were created, updated, or deleted.
    StatusesChanged { status_ids: Vec<EntityId> },

    /// Payment methods were created, updated, or deleted.
    PaymentMethodsChanged { payment_method_ids: Vec<EntityId> },

    /// Purchases were created, updated, or deleted.
    PurchasesChanged { purchase_ids: Vec<EntityId> },

    /// Recurring bills were created, updated, or deleted.
    RecurringBillsChanged { recurring_bill_ids: Vec<EntityId> },

    /// A mutation invalidated the dashboard summary; consumers should
    /// force-refresh it.
    SummaryStale,

    /// The bearer token was rejected and has been cleared.
    SessionExpired,
}

impl StoreEvent {
    /// Creates an ExpensesChanged event.
    pub fn expenses_changed(expense_ids: Vec<EntityId>) -> Self {
        Self::ExpensesChanged { expense_ids }
    }

    /// Creates a WalletsChanged event.
    pub fn wallets_changed(wallet_ids: Vec<EntityId>) -> Self {
        Self::WalletsChanged { wallet_ids }
    }

    /// Creates a TransactionsChanged event.
    pub fn transactions_changed(transaction_ids: Vec<EntityId>) -> Self {
        Self::TransactionsChanged { transaction_ids }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_event_serialization() {
        let event = StoreEvent::expenses_changed(vec![EntityId::Confirmed(4)]);

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("expenses_changed"));

        let deserialized: StoreEvent = serde_json::from_str(&json).unwrap();
        match deserialized {
            StoreEvent::ExpensesChanged { expense_ids } => {
                assert_eq!(expense_ids, vec![EntityId::Confirmed(4)]);
            }
            _ => panic!("Expected ExpensesChanged"),
        }
    }

    #[test]
    fn test_unit_event_serialization() {
        let json = serde_json::to_string(&StoreEvent::SessionExpired).unwrap();
        assert!(json.contains("session_expired"));

        let deserialized: StoreEvent = serde_json::from_str(&json).unwrap();
        assert!(matches!(deserialized, StoreEvent::SessionExpired));
    }
}
