use crate::classify::{Category, Classifier};
use crate::extract::extract_transaction;
use crate::transaction::Transaction;
use log::{debug, warn};

/// Phases of a statement scan. Transitions only run forward; no phase is
/// revisited within a statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanPhase {
    /// Still looking for the account's last-four marker.
    SeekingLastFour,

    /// Last four known; waiting for the transaction section to begin.
    SeekingSectionTitle,

    /// Past the second section-title sighting. Terminal.
    InTransactionSection,
}

/// What the scanner decided about one line.
#[derive(Debug)]
pub enum ScanOutcome {
    /// The line parsed into a transaction record.
    Transaction(Transaction),

    /// The line was deliberately excluded and belongs in the skip log.
    Skipped,

    /// The line carried nothing of interest.
    Ignored,
}

/// Section-title sightings before transaction parsing starts. The first
/// sighting is the copy of the heading inside the statement-summary block.
const SECTION_TITLE_SIGHTINGS: u8 = 2;

/// Walks one statement's lines in order, tracking phase across page
/// boundaries. Build a fresh scanner per statement; no state carries over.
pub struct StatementScanner<'a> {
    classifier: &'a Classifier,
    statement_year: i32,
    january_statement: bool,
    last_four: Option<String>,
    titles_seen: u8,
}

impl<'a> StatementScanner<'a> {
    pub fn new(classifier: &'a Classifier, statement_year: i32, january_statement: bool) -> Self {
        Self {
            classifier,
            statement_year,
            january_statement,
            last_four: None,
            titles_seen: 0,
        }
    }

    /// The phase the next line will be scanned under.
    pub fn phase(&self) -> ScanPhase {
        if self.titles_seen >= SECTION_TITLE_SIGHTINGS {
            ScanPhase::InTransactionSection
        } else if self.last_four.is_none() {
            ScanPhase::SeekingLastFour
        } else {
            ScanPhase::SeekingSectionTitle
        }
    }

    pub fn last_four(&self) -> Option<&str> {
        self.last_four.as_deref()
    }

    /// Scan one line. Pages of a statement are fed as one continuous
    /// stream; a line consumed by one search satisfies no other search on
    /// the same pass.
    pub fn scan_line(&mut self, line: &str) -> ScanOutcome {
        // The last-four search stays active until it hits, no matter how
        // far the section scan has progressed.
        if self.last_four.is_none()
            && self.classifier.classify(line, ScanPhase::SeekingLastFour)
                == Category::LastFourMarker
        {
            let last_four = trailing_token_prefix(line);
            debug!("found last four digits: {}", last_four);
            self.last_four = Some(last_four);
            return ScanOutcome::Ignored;
        }

        if self.titles_seen < SECTION_TITLE_SIGHTINGS {
            if self.classifier.classify(line, ScanPhase::SeekingSectionTitle)
                == Category::SectionTitle
            {
                self.titles_seen += 1;
                debug!("section title sighting {}", self.titles_seen);
            }
            return ScanOutcome::Ignored;
        }

        match self.classifier.classify(line, ScanPhase::InTransactionSection) {
            Category::NewTransaction => self.extract(line, false, false),
            Category::InterestCharge => self.extract(line, false, true),
            Category::OldTransaction => self.extract(line, true, false),
            Category::Skipped => ScanOutcome::Skipped,
            _ => ScanOutcome::Ignored,
        }
    }

    fn extract(&self, line: &str, old_format: bool, interest_charge: bool) -> ScanOutcome {
        let last_four = match &self.last_four {
            Some(value) => value,
            None => {
                // Without the account marker the record would have no
                // last-four tag, so audit the line instead.
                warn!(
                    "transaction line seen before the account marker: {}",
                    line.trim()
                );
                return ScanOutcome::Skipped;
            }
        };

        match extract_transaction(
            line,
            self.statement_year,
            self.january_statement,
            last_four,
            old_format,
            interest_charge,
        ) {
            Ok(transaction) => ScanOutcome::Transaction(transaction),
            Err(err) => {
                warn!("excluding malformed transaction line: {}", err);
                ScanOutcome::Skipped
            }
        }
    }
}

/// First four characters of the line's trailing whitespace-delimited token.
fn trailing_token_prefix(line: &str) -> String {
    let token = line.split_whitespace().last().unwrap_or("");
    token.chars().take(4).collect()
}
