//! Expense Breakdown
//!
//! Expenses in a period grouped by category, with each category's share of
//! the period total. Transactions whose category no longer exists are grouped
//! under "Uncategorized".

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::category::{UNCATEGORIZED, UNCATEGORIZED_COLOR};
use crate::models::{Category, CategoryId, Money, Period, Transaction};

/// One category's share of the expenses
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownSlice {
    /// Category name, or "Uncategorized"
    pub name: String,
    /// Display color
    pub color: String,
    /// Total spent
    pub amount: Money,
    /// Number of transactions
    pub count: usize,
    /// Percentage of the period total
    pub percentage: f64,
}

/// Expenses grouped by category
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseBreakdown {
    pub period: Period,
    /// Slices in order of first appearance in the ledger
    pub slices: Vec<BreakdownSlice>,
    /// Total expenses in the period
    pub total: Money,
}

impl ExpenseBreakdown {
    /// Group the expenses dated within `period` by category
    pub fn generate<'a, I>(
        transactions: I,
        categories: &[Category],
        period: Period,
        today: NaiveDate,
    ) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let category_map: HashMap<&CategoryId, &Category> =
            categories.iter().map(|c| (&c.id, c)).collect();

        let mut slices: Vec<BreakdownSlice> = Vec::new();
        let mut index_by_name: HashMap<String, usize> = HashMap::new();
        let mut total = Money::zero();

        for txn in transactions
            .into_iter()
            .filter(|t| t.is_expense() && period.contains(t.date, today))
        {
            let (name, color) = match category_map.get(&txn.category) {
                Some(category) => (category.name.as_str(), category.color.as_str()),
                None => (UNCATEGORIZED, UNCATEGORIZED_COLOR),
            };

            let index = *index_by_name.entry(name.to_string()).or_insert_with(|| {
                slices.push(BreakdownSlice {
                    name: name.to_string(),
                    color: color.to_string(),
                    amount: Money::zero(),
                    count: 0,
                    percentage: 0.0,
                });
                slices.len() - 1
            });

            slices[index].amount += txn.amount;
            slices[index].count += 1;
            total += txn.amount;
        }

        if total.is_positive() {
            for slice in &mut slices {
                slice.percentage = slice.amount.as_f64() / total.as_f64() * 100.0;
            }
        }

        Self {
            period,
            slices,
            total,
        }
    }

    /// Check if there were no expenses in the period
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Expenses by Category: {}\n", self.period.label()));
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No expenses in this period.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<30} {:>14} {:>8} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for slice in &self.slices {
            output.push_str(&format!(
                "{:<30} {:>14} {:>8} {:>7.1}%\n",
                slice.name,
                slice.amount.format_with_symbol(symbol),
                slice.count,
                slice.percentage
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>14} {:>8}\n",
            "TOTAL",
            self.total.format_with_symbol(symbol),
            self.slices.iter().map(|s| s.count).sum::<usize>()
        ));

        output
    }
}
