//! Due-date urgency partition of unpaid expenses.

use chrono::NaiveDate;
use serde::Serialize;

use crate::expenses::Expense;

/// Unpaid expenses partitioned by due date relative to today, with a running
/// cents total per bucket.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrgencyGroups {
    pub overdue: Vec<Expense>,
    pub due_today: Vec<Expense>,
    pub upcoming: Vec<Expense>,
    pub overdue_total_cents: i64,
    pub due_today_total_cents: i64,
    pub upcoming_total_cents: i64,
}

/// Partitions unpaid expenses into overdue / due-today / upcoming buckets.
///
/// Paid expenses are discarded up front. An expense without a due date goes
/// to `upcoming`: an undated unpaid expense is never overdue. Each bucket is
/// sorted ascending by due date, undated rows last, stable otherwise.
///
/// `today` is the caller's local date; the comparison is whole-day, matching
/// "truncated to local midnight".
pub fn group_by_urgency(expenses: &[Expense], today: NaiveDate) -> UrgencyGroups {
    let mut groups = UrgencyGroups::default();

    for expense in expenses {
        if expense.is_paid() {
            continue;
        }

        match expense.due_date {
            None => {
                groups.upcoming_total_cents += expense.amount_cents;
                groups.upcoming.push(expense.clone());
            }
            Some(due) if due < today => {
                groups.overdue_total_cents += expense.amount_cents;
                groups.overdue.push(expense.clone());
            }
            Some(due) if due == today => {
                groups.due_today_total_cents += expense.amount_cents;
                groups.due_today.push(expense.clone());
            }
            Some(_) => {
                groups.upcoming_total_cents += expense.amount_cents;
                groups.upcoming.push(expense.clone());
            }
        }
    }

    sort_by_due_date(&mut groups.overdue);
    sort_by_due_date(&mut groups.due_today);
    sort_by_due_date(&mut groups.upcoming);

    groups
}

fn sort_by_due_date(expenses: &mut [Expense]) {
    // None sorts last; ties keep insertion order.
    expenses.sort_by_key(|expense| match expense.due_date {
        Some(due) => (0, due),
        None => (1, NaiveDate::MAX),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::test_fixtures::{expense_due, paid_expense_due, undated_expense};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_partitions_by_due_date_relative_to_today() {
        let today = date(2026, 2, 10);
        let expenses = vec![
            expense_due(1, 1000, Some(date(2026, 2, 9))),
            expense_due(2, 2000, Some(today)),
            expense_due(3, 3000, Some(date(2026, 2, 11))),
        ];

        let groups = group_by_urgency(&expenses, today);

        assert_eq!(groups.overdue.len(), 1);
        assert_eq!(groups.due_today.len(), 1);
        assert_eq!(groups.upcoming.len(), 1);
        assert_eq!(groups.overdue_total_cents, 1000);
        assert_eq!(groups.due_today_total_cents, 2000);
        assert_eq!(groups.upcoming_total_cents, 3000);
    }

    #[test]
    fn test_partition_is_total() {
        let today = date(2026, 2, 10);
        let expenses = vec![
            expense_due(1, 100, Some(date(2025, 12, 31))),
            expense_due(2, 200, Some(today)),
            expense_due(3, 300, Some(date(2026, 3, 1))),
            undated_expense(4, 400),
        ];

        let groups = group_by_urgency(&expenses, today);

        let bucket_len = groups.overdue.len() + groups.due_today.len() + groups.upcoming.len();
        assert_eq!(bucket_len, expenses.len());

        let bucket_total = groups.overdue_total_cents
            + groups.due_today_total_cents
            + groups.upcoming_total_cents;
        assert_eq!(bucket_total, 1000);
    }

    #[test]
    fn test_paid_expenses_are_excluded_regardless_of_due_date() {
        let today = date(2026, 2, 10);
        let expenses = vec![
            paid_expense_due(1, 1000, Some(date(2020, 1, 1))),
            paid_expense_due(2, 2000, Some(today)),
            paid_expense_due(3, 3000, None),
        ];

        let groups = group_by_urgency(&expenses, today);

        assert!(groups.overdue.is_empty());
        assert!(groups.due_today.is_empty());
        assert!(groups.upcoming.is_empty());
        assert_eq!(groups.overdue_total_cents, 0);
    }

    #[test]
    fn test_undated_expenses_are_upcoming_never_overdue() {
        let today = date(2026, 2, 10);
        let expenses = vec![undated_expense(1, 500)];

        let groups = group_by_urgency(&expenses, today);

        assert!(groups.overdue.is_empty());
        assert_eq!(groups.upcoming.len(), 1);
        assert_eq!(groups.upcoming_total_cents, 500);
    }

    #[test]
    fn test_buckets_sorted_ascending_with_undated_last() {
        let today = date(2026, 2, 10);
        let expenses = vec![
            undated_expense(1, 100),
            expense_due(2, 200, Some(date(2026, 3, 5))),
            expense_due(3, 300, Some(date(2026, 2, 11))),
        ];

        let groups = group_by_urgency(&expenses, today);

        let ids: Vec<i64> = groups
            .upcoming
            .iter()
            .map(|e| e.id.as_wire())
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
