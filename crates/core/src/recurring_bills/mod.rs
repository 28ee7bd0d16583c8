//! Recurring bills module - scheduled bills that generate expenses
//! server-side.

mod recurring_bills_model;
mod recurring_bills_service;
mod recurring_bills_traits;

// Re-export the public interface
pub use recurring_bills_model::{
    BillFrequency, NewRecurringBill, RecurringBill, RecurringBillUpdate,
};
pub use recurring_bills_service::RecurringBillService;
pub use recurring_bills_traits::{RecurringBillServiceTrait, RecurringBillsApi};
