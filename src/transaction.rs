use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;

/// A single posted transaction extracted from a statement line.
#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    /// The date the purchase or credit was made, which may precede the
    /// statement date by a full billing period.
    pub date: NaiveDate,

    /// Fixed-width identifier printed by the issuing bank. Empty for
    /// interest charges, which carry no reference number.
    pub reference: String,

    /// Signed USD amount. Negative values are credits and payments.
    pub amount: f64,

    /// Merchant or description text, trimmed of surrounding whitespace.
    pub name: String,

    /// Last four digits of the account number, shared by every transaction
    /// on the statement the line came from.
    pub last_four: String,

    /// Interest-charge lines omit the reference number field entirely.
    pub interest_charge: bool,

    /// Old-layout lines never carry a leading last-four token.
    pub old_format: bool,

    /// Position in discovery order, assigned when the record is appended.
    /// Breaks ties between equal dates so sorting stays deterministic.
    pub sequence: usize,
}

/// One row of the report, in the fixed output column order.
#[derive(Debug, Serialize)]
pub struct CsvRow {
    date: String,
    reference: String,
    name: String,
    amount: String,
    last_four: String,
}

impl Transaction {
    /// Flatten the record into its report row.
    pub fn csv_row(&self) -> CsvRow {
        CsvRow {
            date: self.date.format("%m/%d/%Y").to_string(),
            reference: self.reference.clone(),
            name: self.name.clone(),
            amount: format!("{:.2}", self.amount),
            last_four: self.last_four.clone(),
        }
    }

    /// Ascending by date, discovery order between equal dates.
    pub fn chronological(a: &Transaction, b: &Transaction) -> Ordering {
        a.date.cmp(&b.date).then(a.sequence.cmp(&b.sequence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(date: NaiveDate, sequence: usize) -> Transaction {
        Transaction {
            date,
            reference: String::from("REF001234"),
            amount: 45.67,
            name: String::from("STORE PURCHASE"),
            last_four: String::from("1234"),
            interest_charge: false,
            old_format: false,
            sequence,
        }
    }

    #[test]
    fn should_format_csv_row_fields() {
        let tx = transaction(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), 0);

        let row = tx.csv_row();
        assert_eq!(row.date, "01/15/2024");
        assert_eq!(row.reference, "REF001234");
        assert_eq!(row.name, "STORE PURCHASE");
        assert_eq!(row.amount, "45.67");
        assert_eq!(row.last_four, "1234");
    }

    #[test]
    fn should_format_negative_amounts_with_two_decimals() {
        let mut tx = transaction(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), 0);
        tx.amount = -1234.5;

        assert_eq!(tx.csv_row().amount, "-1234.50");
    }

    #[test]
    fn should_order_by_date() {
        let earlier = transaction(NaiveDate::from_ymd_opt(2023, 12, 28).unwrap(), 5);
        let later = transaction(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), 0);

        assert_eq!(
            Transaction::chronological(&earlier, &later),
            Ordering::Less
        );
        assert_eq!(
            Transaction::chronological(&later, &earlier),
            Ordering::Greater
        );
    }

    #[test]
    fn should_break_date_ties_by_discovery_order() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let first = transaction(date, 0);
        let second = transaction(date, 1);

        assert_eq!(Transaction::chronological(&first, &second), Ordering::Less);
    }
}
