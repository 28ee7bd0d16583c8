//! Expenses module - the cached expense collection, its optimistic
//! mutations, and the pay-from-wallet flow.

mod expenses_model;
mod expenses_service;
mod expenses_traits;


// Re-export the public interface
pub use expenses_model::{Expense, ExpenseUpdate, NewExpense, PaymentResult};
pub use expenses_service::ExpenseService;
pub use expenses_traits::{ExpenseServiceTrait, ExpensesApi};
