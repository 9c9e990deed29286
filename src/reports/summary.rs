//! Monthly Summary
//!
//! Income, expense, balance and savings rate for the calendar month that
//! contains a given day. This is what the dashboard cards show.

use chrono::{Datelike, NaiveDate};

use crate::models::{Money, Period, Transaction};

/// Dashboard figures for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    /// First day of the month
    pub month: NaiveDate,
    /// Total income in the month
    pub income: Money,
    /// Total expenses in the month
    pub expense: Money,
    /// Income minus expenses
    pub balance: Money,
    /// Balance as a percentage of income, 0 when there is no income
    pub savings_rate: f64,
    /// Number of transactions in the month
    pub transaction_count: usize,
}

impl MonthlySummary {
    /// Compute the summary for the month containing `today`
    pub fn compute<'a, I>(transactions: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut income = Money::zero();
        let mut expense = Money::zero();
        let mut transaction_count = 0;

        for txn in transactions
            .into_iter()
            .filter(|t| Period::Month.contains(t.date, today))
        {
            if txn.is_income() {
                income += txn.amount;
            } else {
                expense += txn.amount;
            }
            transaction_count += 1;
        }

        let balance = income - expense;
        let savings_rate = if income.is_positive() {
            balance.as_f64() / income.as_f64() * 100.0
        } else {
            0.0
        };

        Self {
            month: today.with_day(1).unwrap_or(today),
            income,
            expense,
            balance,
            savings_rate,
            transaction_count,
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Summary for {}\n", self.month.format("%B %Y")));
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>19}\n",
            "Income",
            self.income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>19}\n",
            "Expenses",
            self.expense.format_with_symbol(symbol)
        ));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>19}\n",
            "Balance",
            self.balance.format_with_symbol(symbol)
        ));
        output.push_str(&format!("{:<20} {:>18.1}%\n", "Savings rate", self.savings_rate));
        output.push_str(&format!("{:<20} {:>19}\n", "Transactions", self.transaction_count));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionDraft;
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(draft: TransactionDraft) -> Transaction {
        draft.build(Utc::now()).unwrap()
    }

    #[test]
    fn test_current_month_only() {
        let transactions = vec![
            txn(TransactionDraft::income(Money::from_cents(100_00), "inc_salary", "Pay", date(2025, 1, 15))),
            txn(TransactionDraft::expense(Money::from_cents(40_00), "exp_food", "Food", date(2025, 1, 20))),
            txn(TransactionDraft::expense(Money::from_cents(30_00), "exp_food", "Food", date(2025, 2, 1))),
        ];

        let summary = MonthlySummary::compute(&transactions, date(2025, 1, 31));

        assert_eq!(summary.income, Money::from_cents(100_00));
        assert_eq!(summary.expense, Money::from_cents(40_00));
        assert_eq!(summary.balance, Money::from_cents(60_00));
        assert!((summary.savings_rate - 60.0).abs() < 1e-9);
        assert_eq!(summary.transaction_count, 2);
        assert_eq!(summary.month, date(2025, 1, 1));
    }

    #[test]
    fn test_no_income_means_zero_savings_rate() {
        let transactions = vec![txn(TransactionDraft::expense(
            Money::from_cents(25_00),
            "exp_food",
            "Food",
            date(2025, 3, 2),
        ))];

        let summary = MonthlySummary::compute(&transactions, date(2025, 3, 10));
        assert_eq!(summary.balance, Money::from_cents(-25_00));
        assert_eq!(summary.savings_rate, 0.0);
    }

    #[test]
    fn test_same_month_last_year_excluded() {
        let transactions = vec![txn(TransactionDraft::income(
            Money::from_cents(10_00),
            "inc_other",
            "Old",
            date(2024, 1, 15),
        ))];

        let summary = MonthlySummary::compute(&transactions, date(2025, 1, 15));
        assert!(summary.income.is_zero());
        assert_eq!(summary.transaction_count, 0);
    }

    #[test]
    fn test_format_terminal() {
        let summary = MonthlySummary::compute(std::iter::empty(), date(2025, 1, 31));
        let output = summary.format_terminal("R");
        assert!(output.contains("January 2025"));
        assert!(output.contains("R0.00"));
    }
}
