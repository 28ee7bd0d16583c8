//! Per-category roll-up of an expense collection.

use serde::Serialize;

use crate::constants::{DEFAULT_CATEGORY_COLOR, UNKNOWN_CATEGORY_NAME};
use crate::expenses::Expense;
use crate::ids::EntityId;

/// One category's share of the input set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category_id: EntityId,
    pub category_name: String,
    pub color: String,
    pub total_cents: i64,
    pub count: usize,
    /// Rounded integer share of the input set's grand total, 0-100. Shares
    /// are rounded independently and are not renormalized, so they need not
    /// sum to exactly 100.
    pub percentage: u8,
}

/// Groups expenses by category, summing cents and counting rows.
///
/// The caller pre-filters to the date range it wants; percentages are
/// relative to the grand total of whatever was passed in, not to any global
/// figure. Output is descending by total, ties stable by first encounter.
/// An empty input yields an empty output.
pub fn calculate_category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut grand_total: i64 = 0;

    for expense in expenses {
        grand_total += expense.amount_cents;

        if let Some(existing) = totals
            .iter_mut()
            .find(|total| total.category_id == expense.category_id)
        {
            existing.total_cents += expense.amount_cents;
            existing.count += 1;
        } else {
            let (name, color) = match &expense.category {
                Some(category) => (category.name.clone(), category.color.clone()),
                None => (
                    UNKNOWN_CATEGORY_NAME.to_string(),
                    DEFAULT_CATEGORY_COLOR.to_string(),
                ),
            };
            totals.push(CategoryTotal {
                category_id: expense.category_id,
                category_name: name,
                color,
                total_cents: expense.amount_cents,
                count: 1,
                percentage: 0,
            });
        }
    }

    for total in &mut totals {
        // Integer round-half-up of total / grand * 100; no float leaves this
        // module even for the cosmetic share.
        total.percentage = if grand_total > 0 {
            ((total.total_cents as i128 * 200 + grand_total as i128)
                / (grand_total as i128 * 2)) as u8
        } else {
            0
        };
    }

    // Stable sort keeps first-encounter order for equal totals.
    totals.sort_by(|a, b| b.total_cents.cmp(&a.total_cents));
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::test_fixtures::expense_in_category;

    #[test]
    fn test_groups_and_sums_by_category() {
        let expenses = vec![
            expense_in_category(1, 1000, 10, "Food"),
            expense_in_category(2, 500, 20, "Transport"),
            expense_in_category(3, 2000, 10, "Food"),
        ];

        let totals = calculate_category_totals(&expenses);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category_name, "Food");
        assert_eq!(totals[0].total_cents, 3000);
        assert_eq!(totals[0].count, 2);
        assert_eq!(totals[1].total_cents, 500);
    }

    #[test]
    fn test_percentages_are_relative_to_input() {
        let expenses = vec![
            expense_in_category(1, 750, 10, "Food"),
            expense_in_category(2, 250, 20, "Transport"),
        ];

        let totals = calculate_category_totals(&expenses);

        assert_eq!(totals[0].percentage, 75);
        assert_eq!(totals[1].percentage, 25);
    }

    #[test]
    fn test_single_category_is_one_hundred_percent() {
        let expenses = vec![
            expense_in_category(1, 123, 10, "Food"),
            expense_in_category(2, 456, 10, "Food"),
        ];

        let totals = calculate_category_totals(&expenses);

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].percentage, 100);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(calculate_category_totals(&[]).is_empty());
    }

    #[test]
    fn test_zero_amounts_yield_zero_percentages() {
        let expenses = vec![expense_in_category(1, 0, 10, "Food")];

        let totals = calculate_category_totals(&expenses);

        assert_eq!(totals[0].percentage, 0);
    }

    #[test]
    fn test_missing_category_falls_back_to_unknown() {
        let mut expense = expense_in_category(1, 100, 10, "Food");
        expense.category = None;

        let totals = calculate_category_totals(&[expense]);

        assert_eq!(totals[0].category_name, UNKNOWN_CATEGORY_NAME);
        assert_eq!(totals[0].color, DEFAULT_CATEGORY_COLOR);
    }

    #[test]
    fn test_equal_totals_tie_break_by_first_encounter() {
        let expenses = vec![
            expense_in_category(1, 500, 20, "Transport"),
            expense_in_category(2, 500, 10, "Food"),
        ];

        let totals = calculate_category_totals(&expenses);

        assert_eq!(totals[0].category_name, "Transport");
        assert_eq!(totals[1].category_name, "Food");
    }
}
