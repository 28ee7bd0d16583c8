//! Property tests for the pure derived views.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use madwallet_core::catalog::{Category, Status};
use madwallet_core::expenses::Expense;
use madwallet_core::ids::EntityId;
use madwallet_core::insights::{
    calculate_category_totals, group_by_month, group_by_urgency, upcoming_expenses,
};

fn expense(id: i64, amount_cents: i64, category_id: i64, paid: bool) -> Expense {
    Expense {
        id: EntityId::Confirmed(id),
        description: format!("expense {id}"),
        amount_cents,
        category_id: EntityId::Confirmed(category_id),
        category: Some(Category {
            id: EntityId::Confirmed(category_id),
            name: format!("category {category_id}"),
            color: "#123456".to_string(),
            ..Category::default()
        }),
        status: paid.then(|| Status {
            id: EntityId::Confirmed(1),
            name: "Paid".to_string(),
            ..Status::default()
        }),
        date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        ..Expense::default()
    }
}

fn arb_expenses() -> impl Strategy<Value = Vec<Expense>> {
    prop::collection::vec(
        (0_i64..=1_000_000, 1_i64..=8, any::<bool>(), 0_u64..=400),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (amount, category, paid, due_offset))| {
                let mut e = expense(i as i64 + 1, amount, category, paid);
                e.due_date = NaiveDate::from_ymd_opt(2025, 9, 1)
                    .unwrap()
                    .checked_add_days(Days::new(due_offset));
                e.date = NaiveDate::from_ymd_opt(2025, 9, 1)
                    .unwrap()
                    .checked_add_days(Days::new(due_offset / 2))
                    .unwrap();
                e
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn urgency_partition_is_total_over_unpaid_input(expenses in arb_expenses()) {
        let today = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        let unpaid: Vec<Expense> = expenses.iter().filter(|e| !e.is_paid()).cloned().collect();

        let groups = group_by_urgency(&expenses, today);

        prop_assert_eq!(
            groups.overdue.len() + groups.due_today.len() + groups.upcoming.len(),
            unpaid.len()
        );
        let total: i64 = unpaid.iter().map(|e| e.amount_cents).sum();
        prop_assert_eq!(
            groups.overdue_total_cents + groups.due_today_total_cents + groups.upcoming_total_cents,
            total
        );
    }

    #[test]
    fn paid_expenses_never_reach_a_bucket(expenses in arb_expenses()) {
        let today = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        let groups = group_by_urgency(&expenses, today);

        for bucket in [&groups.overdue, &groups.due_today, &groups.upcoming] {
            prop_assert!(bucket.iter().all(|e| !e.is_paid()));
        }
    }

    #[test]
    fn category_totals_are_order_independent(expenses in arb_expenses(), seed in any::<u64>()) {
        let mut shuffled = expenses.clone();
        // Cheap deterministic shuffle.
        let len = shuffled.len();
        if len > 1 {
            for i in 0..len {
                let j = (seed as usize).wrapping_mul(i + 1) % len;
                shuffled.swap(i, j);
            }
        }

        let mut a = calculate_category_totals(&expenses);
        let mut b = calculate_category_totals(&shuffled);
        a.sort_by_key(|t| t.category_id);
        b.sort_by_key(|t| t.category_id);

        prop_assert_eq!(a, b);
    }

    #[test]
    fn category_percentages_stay_in_bounds(expenses in arb_expenses()) {
        let totals = calculate_category_totals(&expenses);
        for total in &totals {
            prop_assert!(total.percentage <= 100);
        }
        let grand: i64 = totals.iter().map(|t| t.total_cents).sum();
        let input: i64 = expenses.iter().map(|e| e.amount_cents).sum();
        prop_assert_eq!(grand, input);
    }

    #[test]
    fn month_groups_partition_the_input(expenses in arb_expenses()) {
        let groups = group_by_month(&expenses);

        let grouped: usize = groups.iter().map(|g| g.expenses.len()).sum();
        prop_assert_eq!(grouped, expenses.len());

        // Newest first, strictly: no duplicate (year, month) buckets.
        let keys: Vec<(i32, u32)> = groups.iter().map(|g| (g.year, g.month_number)).collect();
        let mut sorted = keys.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        prop_assert_eq!(&keys, &sorted);
        sorted.dedup();
        prop_assert_eq!(keys.len(), sorted.len());

        for group in &groups {
            let paid: i64 = group.expenses.iter().filter(|e| e.is_paid()).map(|e| e.amount_cents).sum();
            let unpaid: i64 = group.expenses.iter().filter(|e| !e.is_paid()).map(|e| e.amount_cents).sum();
            prop_assert_eq!(group.total_paid_cents, paid);
            prop_assert_eq!(group.total_unpaid_cents, unpaid);
        }
    }

    #[test]
    fn upcoming_is_a_sorted_subset_of_unpaid(expenses in arb_expenses()) {
        let today = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        let upcoming = upcoming_expenses(&expenses, today, 30);
        let horizon = today.checked_add_days(Days::new(30)).unwrap();

        for window in upcoming.windows(2) {
            prop_assert!(window[0].due_date <= window[1].due_date);
        }
        for e in &upcoming {
            prop_assert!(!e.is_paid());
            let due = e.due_date.expect("upcoming rows are dated");
            prop_assert!(due >= today && due <= horizon);
        }
    }
}

#[test]
fn single_category_input_is_one_hundred_percent() {
    let expenses = vec![expense(1, 300, 7, false), expense(2, 700, 7, false)];
    let totals = calculate_category_totals(&expenses);
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].percentage, 100);
}
