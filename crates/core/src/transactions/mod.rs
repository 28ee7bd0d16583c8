//! Wallet transactions module - income and transfers with optimistic
//! balance adjustments.

mod transactions_model;
mod transactions_service;
mod transactions_traits;


// Re-export the public interface
pub use transactions_model::{
    IncomeResult, NewIncome, NewTransfer, TransactionType, TransferResult, WalletTransaction,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionServiceTrait, TransactionsApi};
