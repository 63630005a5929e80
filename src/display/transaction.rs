//! Transaction display formatting
//!
//! Register views for the ledger and the pending bill queue.

use crate::models::Transaction;

/// Format a single transaction as `date | category | amount | description`
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    let date = if txn.date().is_empty() { "(no date)" } else { txn.date() };
    let mut row = format!(
        "{} | {} | {}",
        date,
        txn.category(),
        txn.amount().format_with_symbol(symbol)
    );
    if !txn.description().is_empty() {
        row.push_str(" | ");
        row.push_str(txn.description());
    }
    row
}

/// Format the ledger with the positions `remove` accepts
pub fn format_transaction_register(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions yet.\n".to_string();
    }

    let mut output = String::new();
    for (index, txn) in transactions.iter().enumerate() {
        output.push_str(&format!("{:>4}: {}\n", index, format_transaction_row(txn, symbol)));
    }
    output
}

/// Format a filtered list (no positions, since they would not match the ledger)
pub fn format_transaction_list<'a, I>(transactions: I, symbol: &str) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let output: String = transactions
        .into_iter()
        .map(|txn| format!("  {}\n", format_transaction_row(txn, symbol)))
        .collect();

    if output.is_empty() {
        "No transactions found.\n".to_string()
    } else {
        output
    }
}

/// Format the pending queue in processing order
pub fn format_pending_list(bills: &[&Transaction], symbol: &str) -> String {
    if bills.is_empty() {
        return "No scheduled bills.\n".to_string();
    }

    let mut output = format!("Scheduled bills ({}), next first:\n", bills.len());
    for (n, bill) in bills.iter().enumerate() {
        output.push_str(&format!(
            "  {}. due {} | {} | {} | {}\n",
            n + 1,
            bill.date(),
            bill.category(),
            bill.amount().format_with_symbol(symbol),
            bill.description()
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_row_format() {
        let txn = Transaction::new("Food", Money::from_cents(-2550), "Lunch", "11/3/2025");
        assert_eq!(format_transaction_row(&txn, "$"), "11/3/2025 | Food | -$25.50 | Lunch");

        let bare = Transaction::new("Gift", Money::from_cents(1000), "", "");
        assert_eq!(format_transaction_row(&bare, "£"), "(no date) | Gift | £10.00");
    }

    #[test]
    fn test_register_shows_positions() {
        let txns = vec![
            Transaction::new("A", Money::from_cents(100), "", "1/1/2025"),
            Transaction::new("B", Money::from_cents(-100), "", "1/2/2025"),
        ];
        let text = format_transaction_register(&txns, "$");
        assert!(text.contains("   0: 1/1/2025 | A"));
        assert!(text.contains("   1: 1/2/2025 | B"));
        assert_eq!(format_transaction_register(&[], "$"), "No transactions yet.\n");
    }

    #[test]
    fn test_filtered_list() {
        let txns = [Transaction::new("Food", Money::from_cents(-1), "", "1/1/2025")];
        assert!(format_transaction_list(txns.iter(), "$").contains("Food"));
        assert_eq!(format_transaction_list(Vec::new(), "$"), "No transactions found.\n");
    }

    #[test]
    fn test_pending_list() {
        let bill = Transaction::new("Bills", Money::from_cents(-4000), "Power", "12/1/2025");
        let text = format_pending_list(&[&bill], "$");
        assert!(text.contains("Scheduled bills (1)"));
        assert!(text.contains("1. due 12/1/2025 | Bills | -$40.00 | Power"));
        assert_eq!(format_pending_list(&[], "$"), "No scheduled bills.\n");
    }
}
