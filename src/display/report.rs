//! Report formatting utilities for terminal output
//!
//! Renders the budget summary, single-month report and month-by-month totals.

use std::collections::BTreeMap;

use chrono::Month;

use super::transaction::format_transaction_row;
use crate::book::{MonthlyReport, MonthlyTotals};
use crate::models::Money;
use crate::services::BudgetSummary;

const WIDTH: usize = 41;

/// English month name for 1-12, empty for anything else
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("")
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

fn header(title: &str) -> String {
    format!("{}\n{}\n", title, separator(WIDTH))
}

fn category_lines(output: &mut String, totals: &BTreeMap<String, Money>, symbol: &str) {
    for (category, amount) in totals {
        output.push_str(&format!("  - {}: {}\n", category, amount.format_with_symbol(symbol)));
    }
}

/// Budget summary: totals, net, category breakdown and the ledger-walk spending
pub fn format_summary(summary: &BudgetSummary, symbol: &str) -> String {
    let mut output = header("Budget Summary");

    output.push_str(&format!(
        "Total Income:   {:>14}\n",
        summary.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Expenses: {:>14}\n",
        summary.total_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Net Balance:    {:>14}\n",
        summary.net_balance.format_with_symbol(symbol)
    ));

    output.push_str("\nBy Category:\n");
    if summary.category_totals.is_empty() {
        output.push_str("  (none)\n");
    } else {
        category_lines(&mut output, &summary.category_totals, symbol);
    }

    output.push_str(&format!(
        "\nTotal expenses (detailed calculation): {}\n",
        summary.ledger_spending.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{} transaction(s), {} scheduled bill(s) pending\n",
        summary.transaction_count, summary.pending_count
    ));

    output
}

/// Report for one month, recomputed from the ledger
pub fn format_monthly_report(report: &MonthlyReport, symbol: &str) -> String {
    let mut output = header(&format!(
        "Monthly Report for {} (month {})",
        month_name(report.month),
        report.month
    ));

    if report.is_empty() {
        output.push_str("No transactions found for this month.\n");
        return output;
    }

    for txn in &report.transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    output.push_str(&format!(
        "\nMonthly Income:   {}\n",
        report.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Monthly Expenses: {}\n",
        report.expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Monthly Net:      {}\n",
        report.net().format_with_symbol(symbol)
    ));

    output.push_str("\nMonthly totals by category:\n");
    category_lines(&mut output, &report.category_totals, symbol);

    output
}

/// Table of the stored per-month slots, skipping months with no activity
pub fn format_monthly_totals(totals: &MonthlyTotals, symbol: &str) -> String {
    let months = totals.present_months();
    if months.is_empty() {
        return "No monthly data recorded yet.\n".to_string();
    }

    let mut output = header("Monthly Totals");
    output.push_str(&format!(
        "{:<10} {:>14} {:>14} {:>14}\n",
        "Month", "Income", "Expenses", "Net"
    ));
    for month in months {
        output.push_str(&format!(
            "{:<10} {:>14} {:>14} {:>14}\n",
            month_name(month.month),
            month.income.format_with_symbol(symbol),
            month.expenses.format_with_symbol(symbol),
            month.net().format_with_symbol(symbol)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Budget;
    use crate::models::Transaction;

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn test_format_summary() {
        let mut category_totals = BTreeMap::new();
        category_totals.insert("Food".to_string(), Money::from_cents(2550));

        let summary = BudgetSummary {
            total_income: Money::from_cents(100_000),
            total_expenses: Money::from_cents(2550),
            net_balance: Money::from_cents(97_450),
            category_totals,
            ledger_spending: Money::from_cents(2550),
            transaction_count: 2,
            pending_count: 1,
        };

        let text = format_summary(&summary, "€");
        assert!(text.contains("€1000.00"));
        assert!(text.contains("  - Food: €25.50"));
        assert!(text.contains("detailed calculation): €25.50"));
        assert!(text.contains("1 scheduled bill(s) pending"));
    }

    #[test]
    fn test_format_monthly_report() {
        let txns = vec![
            Transaction::new("Food", Money::from_cents(-1000), "Snack", "2/3/2025"),
            Transaction::new("Food", Money::from_cents(-500), "", "3/3/2025"),
        ];
        let report = Budget::monthly_report(&txns, 2).unwrap();

        let text = format_monthly_report(&report, "$");
        assert!(text.starts_with("Monthly Report for February (month 2)"));
        assert!(text.contains("Monthly Expenses: $10.00"));
        assert!(text.contains("Monthly Net:      -$10.00"));

        let empty = Budget::monthly_report(&txns, 7).unwrap();
        assert!(format_monthly_report(&empty, "$").contains("No transactions found"));
    }

    #[test]
    fn test_format_monthly_totals() {
        assert_eq!(
            format_monthly_totals(&MonthlyTotals::default(), "$"),
            "No monthly data recorded yet.\n"
        );

        let mut budget = Budget::new();
        budget
            .commit(&Transaction::new("Pay", Money::from_cents(5000), "", "4/1/2025"))
            .unwrap();
        let text = format_monthly_totals(&budget.monthly_totals(), "$");
        assert!(text.contains("April"));
        assert!(!text.contains("May"));
    }
}
