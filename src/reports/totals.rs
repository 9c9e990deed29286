//! All-time ledger totals

use crate::models::{Money, Transaction};

/// Transaction count, income, expense and net balance across the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedgerTotals {
    pub count: usize,
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
}

impl LedgerTotals {
    pub fn compute<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut totals = Self::default();
        for txn in transactions {
            if txn.is_income() {
                totals.income += txn.amount;
            } else {
                totals.expense += txn.amount;
            }
            totals.count += 1;
        }
        totals.balance = totals.income - totals.expense;
        totals
    }

    /// Format the totals for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        format!(
            "{:<20} {:>19}\n{:<20} {:>19}\n{:<20} {:>19}\n{:<20} {:>19}\n",
            "Transactions",
            self.count,
            "Total income",
            self.income.format_with_symbol(symbol),
            "Total expenses",
            self.expense.format_with_symbol(symbol),
            "Net balance",
            self.balance.format_with_symbol(symbol),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionDraft;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_totals_span_all_dates() {
        let d1 = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 8, 9).unwrap();
        let transactions = vec![
            TransactionDraft::income(Money::from_cents(500_00), "inc_salary", "Pay", d1)
                .build(Utc::now())
                .unwrap(),
            TransactionDraft::expense(Money::from_cents(120_50), "exp_bills", "Power", d2)
                .build(Utc::now())
                .unwrap(),
        ];

        let totals = LedgerTotals::compute(&transactions);
        assert_eq!(totals.count, 2);
        assert_eq!(totals.balance, Money::from_cents(379_50));
        assert!(totals.format_terminal("$").contains("$379.50"));
    }
}
