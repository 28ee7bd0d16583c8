//! Upcoming-payments window over unpaid expenses.

use chrono::{Days, NaiveDate};

use crate::expenses::Expense;

/// Unpaid expenses due within the next `days` days, today inclusive on both
/// ends, ascending by due date. Undated and paid expenses never qualify.
pub fn upcoming_expenses(expenses: &[Expense], today: NaiveDate, days: u64) -> Vec<Expense> {
    let horizon = today
        .checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX);

    let mut upcoming: Vec<Expense> = expenses
        .iter()
        .filter(|expense| {
            if expense.is_paid() {
                return false;
            }
            match expense.due_date {
                Some(due) => due >= today && due <= horizon,
                None => false,
            }
        })
        .cloned()
        .collect();

    upcoming.sort_by_key(|expense| expense.due_date);
    upcoming
}
