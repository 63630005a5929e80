//! Legacy pipe-delimited text format
//!
//! One transaction per line: `category|amount|description|date`. Text fields
//! have `%` written as `%25` and `|` as `%7C`. Ids are not stored, so every
//! imported line becomes a fresh transaction.
//!
//! Older files may hold amounts in exponent form (`-1.0E7`); those are read by
//! moving the decimal point in the text, never through a float.

use std::io::{Read, Write};

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use tracing::debug;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Money, MoneyParseError, Transaction};

const FIELDS: usize = 4;

/// Largest exponent accepted; anything bigger cannot fit in cents anyway
const MAX_EXPONENT: i32 = 30;

fn escape_field(s: &str) -> String {
    s.replace('%', "%25").replace('|', "%7C")
}

fn unescape_field(s: &str) -> String {
    s.replace("%7C", "|").replace("%25", "%")
}

/// Parse a stored amount, plain (`-25.50`) or in exponent form (`1.5E3`)
fn parse_amount(raw: &str) -> Result<Money, MoneyParseError> {
    let Some((mantissa, exponent)) = raw.split_once(['E', 'e']) else {
        return Money::parse(raw);
    };
    let invalid = || MoneyParseError::InvalidFormat(raw.to_string());

    let exponent: i32 = exponent.parse().map_err(|_| invalid())?;
    if exponent.abs() > MAX_EXPONENT {
        return Err(MoneyParseError::OutOfRange(raw.to_string()));
    }

    let mantissa = mantissa.trim();
    let (sign, unsigned) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa.strip_prefix('+').unwrap_or(mantissa)),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let digits = format!("{}{}", whole, fraction);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let point = whole.len() as i32 + exponent;
    let shifted = if point <= 0 {
        format!("0.{}{}", "0".repeat(point.unsigned_abs() as usize), digits)
    } else if point as usize >= digits.len() {
        format!("{}{}", digits, "0".repeat(point as usize - digits.len()))
    } else {
        let (head, tail) = digits.split_at(point as usize);
        format!("{}.{}", head, tail)
    };

    Money::parse(&format!("{}{}", sign, shifted))
}

/// Write the ledger in ledger order
pub fn write_transactions<W: Write>(writer: W, transactions: &[Transaction]) -> PocketbookResult<()> {
    let mut out = WriterBuilder::new()
        .delimiter(b'|')
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(writer);

    for txn in transactions {
        out.write_record([
            escape_field(txn.category()),
            txn.amount().to_decimal_string(),
            escape_field(txn.description()),
            escape_field(txn.date()),
        ])?;
    }

    out.flush()
        .map_err(|e| PocketbookError::Export(format!("Failed to flush text export: {}", e)))?;
    Ok(())
}

/// Read transactions written by [`write_transactions`]
///
/// Lines without exactly four fields are skipped. An amount that does not
/// parse fails the whole read, naming the line.
pub fn read_transactions<R: Read>(reader: R) -> PocketbookResult<Vec<Transaction>> {
    let mut input = ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut transactions = Vec::new();
    let mut skipped = 0usize;

    for result in input.records() {
        let record = result
            .map_err(|e| PocketbookError::Import(format!("Error reading record: {}", e)))?;
        if record.len() != FIELDS {
            skipped += 1;
            continue;
        }

        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let amount = parse_amount(&record[1]).map_err(|e| {
            PocketbookError::Import(format!("Line {}: bad amount '{}': {}", line, &record[1], e))
        })?;

        transactions.push(Transaction::new(
            unescape_field(&record[0]),
            amount,
            unescape_field(&record[2]),
            unescape_field(&record[3]),
        ));
    }

    debug!(read = transactions.len(), skipped, "parsed text transactions");
    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_format() {
        let txns = vec![
            Transaction::new("Food", Money::from_cents(-2550), "Lunch", "11/3/2025"),
            Transaction::new("Salary", Money::from_cents(90_000), "", "11/1/2025"),
        ];
        let mut buf = Vec::new();
        write_transactions(&mut buf, &txns).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Food|-25.50|Lunch|11/3/2025\nSalary|900.00||11/1/2025\n"
        );
    }

    #[test]
    fn test_escaping_survives_reload() {
        let original = Transaction::new(
            "A|B",
            Money::from_cents(-100),
            "50% off | today, \"quoted\"",
            "1/2/2025",
        );
        let mut buf = Vec::new();
        write_transactions(&mut buf, std::slice::from_ref(&original)).unwrap();

        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.starts_with("A%7CB|-1.00|50%25 off %7C today"));

        let loaded = read_transactions(buf.as_slice()).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].category(), "A|B");
        assert_eq!(loaded[0].description(), "50% off | today, \"quoted\"");
        assert_eq!(loaded[0].amount(), original.amount());
        assert_ne!(loaded[0].id(), original.id());
    }

    #[test]
    fn test_literal_escape_sequence_in_text() {
        // A literal "%7C" typed by the user must not come back as a pipe
        let txn = Transaction::new("Misc", Money::from_cents(-5), "code %7C", "");
        let mut buf = Vec::new();
        write_transactions(&mut buf, &[txn]).unwrap();

        let loaded = read_transactions(buf.as_slice()).unwrap();
        assert_eq!(loaded[0].description(), "code %7C");
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let input = "Food|-10.00|Snack|1/5/2025\n\
                     garbage line\n\
                     too|many|fields|here|now\n\
                     Rent|-800|Flat|1/1/2025\n";
        let loaded = read_transactions(input.as_bytes()).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].category(), "Food");
        assert_eq!(loaded[1].amount().cents(), -80_000);
    }

    #[test]
    fn test_exponent_amounts() {
        let input = "Rent|-1.0E7|x|1/1/2025\n\
                     Pay|1.2345E2|y|1/2/2025\n\
                     Tip|5E-2|z|1/3/2025\n";
        let loaded = read_transactions(input.as_bytes()).unwrap();

        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].amount().cents(), -1_000_000_000);
        assert_eq!(loaded[1].amount().cents(), 12_345);
        assert_eq!(loaded[2].amount().cents(), 5);
    }

    #[test]
    fn test_exponent_amount_errors() {
        assert!(parse_amount("1.0E").is_err());
        assert!(parse_amount("E5").is_err());
        assert!(matches!(
            parse_amount("1E400"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(parse_amount("9.9E20").is_err());
    }

    #[test]
    fn test_bad_amount_is_import_error() {
        let input = "Food|-10.00|Snack|1/5/2025\nFood|ten|Snack|1/5/2025\n";
        let err = read_transactions(input.as_bytes()).unwrap_err();

        assert!(matches!(err, PocketbookError::Import(ref msg) if msg.contains("Line 2")));
    }
}
