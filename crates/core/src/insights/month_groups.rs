//! Calendar-month grouping of expenses.

use chrono::Datelike;
use serde::Serialize;

use crate::expenses::Expense;

/// One calendar month's expenses, with paid and unpaid sub-totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGroup {
    /// Human-readable label, e.g. `"February 2026"`.
    pub month: String,
    pub year: i32,
    /// Zero-based month index, as exposed on the wire.
    pub month_number: u32,
    pub expenses: Vec<Expense>,
    pub total_paid_cents: i64,
    pub total_unpaid_cents: i64,
    pub paid_count: usize,
    pub unpaid_count: usize,
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Groups expenses by the calendar month of their `date` field.
///
/// Grouping is by `date`, not `due_date`: a bill is urgent by when it is due
/// but reported under when it happened. Rows keep their input order inside a
/// bucket; the bucket sequence is descending by (year, month) so the newest
/// month comes first.
pub fn group_by_month(expenses: &[Expense]) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();

    for expense in expenses {
        let year = expense.date.year();
        let month_number = expense.date.month0();

        let index = match groups
            .iter()
            .position(|group| group.year == year && group.month_number == month_number)
        {
            Some(index) => index,
            None => {
                groups.push(MonthGroup {
                    month: format!("{} {}", MONTH_NAMES[month_number as usize], year),
                    year,
                    month_number,
                    expenses: Vec::new(),
                    total_paid_cents: 0,
                    total_unpaid_cents: 0,
                    paid_count: 0,
                    unpaid_count: 0,
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[index];

        if expense.is_paid() {
            group.total_paid_cents += expense.amount_cents;
            group.paid_count += 1;
        } else {
            group.total_unpaid_cents += expense.amount_cents;
            group.unpaid_count += 1;
        }
        group.expenses.push(expense.clone());
    }

    groups.sort_by(|a, b| (b.year, b.month_number).cmp(&(a.year, a.month_number)));
    groups
}
