//! Derived views over the cached expense collection.
//!
//! Everything here is a pure function of its input slice: nothing is owned,
//! persisted, or diffed against a previous run. Dashboard and detail screens
//! recompute these whenever the underlying collection changes.

mod category_totals;
mod month_groups;
mod upcoming;
mod urgency;

pub use category_totals::{calculate_category_totals, CategoryTotal};
pub use month_groups::{group_by_month, MonthGroup};
pub use upcoming::upcoming_expenses;
pub use urgency::{group_by_urgency, UrgencyGroups};

#[cfg(test)]
pub(crate) mod test_fixtures {
    use chrono::NaiveDate;

    use crate::catalog::{Category, Status};
    use crate::constants::PAID_STATUS_NAME;
    use crate::expenses::Expense;
    use crate::ids::EntityId;

    pub fn paid_status() -> Status {
        Status {
            id: EntityId::Confirmed(1),
            name: PAID_STATUS_NAME.to_string(),
            ..Status::default()
        }
    }

    fn base_expense(id: i64, amount_cents: i64) -> Expense {
        Expense {
            id: EntityId::Confirmed(id),
            description: format!("expense {id}"),
            amount_cents,
            category_id: EntityId::Confirmed(1),
            date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            ..Expense::default()
        }
    }

    pub fn expense_due(id: i64, amount_cents: i64, due_date: Option<NaiveDate>) -> Expense {
        Expense {
            due_date,
            ..base_expense(id, amount_cents)
        }
    }

    pub fn paid_expense_due(id: i64, amount_cents: i64, due_date: Option<NaiveDate>) -> Expense {
        Expense {
            due_date,
            status: Some(paid_status()),
            ..base_expense(id, amount_cents)
        }
    }

    pub fn undated_expense(id: i64, amount_cents: i64) -> Expense {
        expense_due(id, amount_cents, None)
    }

    pub fn expense_on(id: i64, amount_cents: i64, date: NaiveDate) -> Expense {
        Expense {
            date,
            ..base_expense(id, amount_cents)
        }
    }

    pub fn paid_expense_on(id: i64, amount_cents: i64, date: NaiveDate) -> Expense {
        Expense {
            date,
            status: Some(paid_status()),
            ..base_expense(id, amount_cents)
        }
    }

    pub fn expense_in_category(
        id: i64,
        amount_cents: i64,
        category_id: i64,
        category_name: &str,
    ) -> Expense {
        Expense {
            category_id: EntityId::Confirmed(category_id),
            category: Some(Category {
                id: EntityId::Confirmed(category_id),
                name: category_name.to_string(),
                color: format!("#{category_id:06x}"),
                ..Category::default()
            }),
            ..base_expense(id, amount_cents)
        }
    }
}
