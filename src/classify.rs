use crate::scanner::ScanPhase;
use regex::Regex;

/// Statement files are named with a leading MMDDYY date segment.
const STATEMENT_FILE_PATTERN: &str = r"(?i)^\d{6}.*\.pdf$";

/// The line naming the account, e.g. "Statement for Account Ending in 1234".
const LAST_FOUR_PATTERN: &str = r"(?i)account ending in\s+\d{4}";

/// The fixed heading above the itemized list. It also appears once in the
/// statement-summary block, so the scanner waits for the second sighting.
const SECTION_TITLE_PATTERN: &str = r"\bTransactions\b";

/// Current layout: last-four token, MM/DD date, reference, name, amount.
const NEW_TRANSACTION_PATTERN: &str =
    r"^\s*\d{4}\s+\d{2}/\d{2}\s+\S+\s+.*\S\s+-?[\d,]+\.\d{2}\s*$";

/// Interest charges carry no reference number and no last-four token.
const INTEREST_CHARGE_PATTERN: &str = r"^\s*\d{2}/\d{2}\s+INTEREST CHARGE.*\s-?[\d,]+\.\d{2}\s*$";

/// Pre-redesign layout: like the current one but with no last-four token.
const OLD_TRANSACTION_PATTERN: &str = r"^\s*\d{2}/\d{2}\s+\S+\s+.*\S\s+-?[\d,]+\.\d{2}\s*$";

/// Known noise that looks like a transaction but must never become one.
const SKIP_PATTERN: &str =
    r"(?i)ONLINE\s+PAYMENT|AUTOMATIC\s+PAYMENT|PAYMENT\s+THANK\s+YOU|PROMOTIONAL\s+(?:RATE|OFFER)";

/// A date and an amount on one line: transaction-ish enough to audit even
/// when no exact shape matched.
const RELEVANT_PATTERN: &str = r"\d{2}/\d{2}.*\d+\.\d{2}";

/// How a single statement line should be treated, given the scan phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// The line that names the account's last four digits.
    LastFourMarker,

    /// The fixed heading that precedes the itemized transaction list.
    SectionTitle,

    /// A transaction line in the current statement layout.
    NewTransaction,

    /// A transaction line in the pre-redesign layout.
    OldTransaction,

    /// An interest charge, which carries no reference number.
    InterestCharge,

    /// Deliberately excluded, but worth recording for auditing: either
    /// transaction-shaped noise from the skip list, or an unmatched line
    /// that still carries a date and an amount.
    Skipped,

    /// Nothing of interest.
    Ignored,
}

/// The full pattern set, compiled once per run.
pub struct Classifier {
    statement_file: Regex,
    last_four: Regex,
    section_title: Regex,
    new_transaction: Regex,
    interest_charge: Regex,
    old_transaction: Regex,
    skip: Regex,
    relevant: Regex,
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            statement_file: compile(STATEMENT_FILE_PATTERN),
            last_four: compile(LAST_FOUR_PATTERN),
            section_title: compile(SECTION_TITLE_PATTERN),
            new_transaction: compile(NEW_TRANSACTION_PATTERN),
            interest_charge: compile(INTEREST_CHARGE_PATTERN),
            old_transaction: compile(OLD_TRANSACTION_PATTERN),
            skip: compile(SKIP_PATTERN),
            relevant: compile(RELEVANT_PATTERN),
        }
    }

    /// Whether a file name follows the statement naming convention.
    pub fn is_statement_file(&self, name: &str) -> bool {
        self.statement_file.is_match(name)
    }

    /// Categorize one line. Each seeking phase answers exactly one question;
    /// the transaction section runs the full shape cascade.
    pub fn classify(&self, line: &str, phase: ScanPhase) -> Category {
        match phase {
            ScanPhase::SeekingLastFour => {
                if self.last_four.is_match(line) {
                    Category::LastFourMarker
                } else {
                    Category::Ignored
                }
            }
            ScanPhase::SeekingSectionTitle => {
                if self.section_title.is_match(line) {
                    Category::SectionTitle
                } else {
                    Category::Ignored
                }
            }
            ScanPhase::InTransactionSection => self.classify_transaction(line),
        }
    }

    /// First shape wins. Interest is tried before the old layout because an
    /// interest line, having no reference number, also fits the old shape.
    /// A shape match that is also on the skip list never becomes a
    /// transaction.
    fn classify_transaction(&self, line: &str) -> Category {
        let shape = if self.new_transaction.is_match(line) {
            Some(Category::NewTransaction)
        } else if self.interest_charge.is_match(line) {
            Some(Category::InterestCharge)
        } else if self.old_transaction.is_match(line) {
            Some(Category::OldTransaction)
        } else {
            None
        };

        match shape {
            Some(_) if self.skip.is_match(line) => Category::Skipped,
            Some(category) => category,
            None if self.relevant.is_match(line) => Category::Skipped,
            None => Category::Ignored,
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("pattern is a checked literal")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_section(line: &str) -> Category {
        Classifier::new().classify(line, ScanPhase::InTransactionSection)
    }

    #[test]
    fn should_match_new_layout_transaction() {
        assert_eq!(
            in_section("1234   01/15  REF001234   STORE PURCHASE          45.67"),
            Category::NewTransaction
        );
    }

    #[test]
    fn should_match_old_layout_transaction() {
        assert_eq!(
            in_section("01/16  REF005678   OLD STYLE GROCERY          1,234.56"),
            Category::OldTransaction
        );
    }

    #[test]
    fn should_match_interest_charge() {
        assert_eq!(
            in_section("01/31   INTEREST CHARGE ON PURCHASES           12.34"),
            Category::InterestCharge
        );
    }

    #[test]
    fn should_match_negative_amounts() {
        assert_eq!(
            in_section("1234   01/20  REF009999   RETURNED MERCHANDISE          -45.67"),
            Category::NewTransaction
        );
    }

    #[test]
    fn should_never_classify_both_layouts_at_once() {
        // The shapes are mutually exclusive: a line starting with a
        // last-four token cannot start with a date, and vice versa.
        let classifier = Classifier::new();
        let new_line = "1234   01/15  REF001234   STORE PURCHASE          45.67";
        let old_line = "01/15  REF001234   STORE PURCHASE          45.67";

        assert!(classifier.new_transaction.is_match(new_line));
        assert!(!classifier.old_transaction.is_match(new_line));
        assert!(classifier.old_transaction.is_match(old_line));
        assert!(!classifier.new_transaction.is_match(old_line));
    }

    #[test]
    fn should_skip_transaction_shaped_noise() {
        assert_eq!(
            in_section("1234   01/20  REF009999   ONLINE PAYMENT THANK YOU          -200.00"),
            Category::Skipped
        );
        assert_eq!(
            in_section("01/02  REF000001   AUTOMATIC PAYMENT - THANK YOU          -50.00"),
            Category::Skipped
        );
    }

    #[test]
    fn should_skip_relevant_looking_lines() {
        // Carries a date and an amount but fits no exact shape.
        assert_eq!(in_section("01/17 SHORT 45.67"), Category::Skipped);
    }

    #[test]
    fn should_ignore_plain_text() {
        assert_eq!(in_section("Totals for this period"), Category::Ignored);
        assert_eq!(in_section(""), Category::Ignored);
    }

    #[test]
    fn should_find_last_four_marker_only_in_seeking_phase() {
        let classifier = Classifier::new();
        let line = "Statement for Account Ending in 9876";

        assert_eq!(
            classifier.classify(line, ScanPhase::SeekingLastFour),
            Category::LastFourMarker
        );
        assert_eq!(
            classifier.classify(line, ScanPhase::SeekingSectionTitle),
            Category::Ignored
        );
    }

    #[test]
    fn should_find_section_title() {
        let classifier = Classifier::new();

        assert_eq!(
            classifier.classify("Transactions", ScanPhase::SeekingSectionTitle),
            Category::SectionTitle
        );
        assert_eq!(
            classifier.classify("Transactions in summary", ScanPhase::SeekingSectionTitle),
            Category::SectionTitle
        );
        assert_eq!(
            classifier.classify("Payment Information", ScanPhase::SeekingSectionTitle),
            Category::Ignored
        );
    }

    #[test]
    fn should_match_statement_file_names() {
        let classifier = Classifier::new();

        assert!(classifier.is_statement_file("011524 statement.pdf"));
        assert!(classifier.is_statement_file("123123.PDF"));
        assert!(!classifier.is_statement_file("statement.pdf"));
        assert!(!classifier.is_statement_file("011524 statement.txt"));
        assert!(!classifier.is_statement_file("2024 taxes.pdf"));
    }
}
