use crate::classify::Classifier;
use crate::errors::{DiscoveryError, OutputError, ProcessError};
use crate::pdf::PageSource;
use crate::scanner::{ScanOutcome, StatementScanner};
use crate::skiplog::SkipLog;
use crate::sort::quicksort_by;
use crate::transaction::Transaction;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Sentinel written when a run produced no transactions at all.
const EMPTY_OUTPUT: &str = "None";

/// One discovered statement file and the date encoded in its name.
#[derive(Debug)]
pub struct StatementFile {
    pub path: PathBuf,
    pub month: u32,
    pub day: u32,
    pub year: i32,
}

impl StatementFile {
    /// Decode the leading MMDDYY segment. The file-name pattern has already
    /// matched, but a date segment like `99` for a month still disqualifies
    /// the file.
    fn from_file_name(path: PathBuf, name: &str) -> Option<Self> {
        let month: u32 = name.get(0..2)?.parse().ok()?;
        let day: u32 = name.get(2..4)?.parse().ok()?;
        let year: i32 = name.get(4..6)?.parse().ok()?;
        if !(1..=12).contains(&month) {
            return None;
        }

        Some(Self {
            path,
            month,
            day,
            year: 2000 + year,
        })
    }
}

/// Drives a full conversion run: discover statement files, scan their pages
/// into transaction records, order the records, and write the CSV report.
pub struct StatementProcessor {
    classifier: Classifier,
    statements: Vec<StatementFile>,
    transactions: Vec<Transaction>,
}

impl StatementProcessor {
    pub fn new() -> Self {
        Self {
            classifier: Classifier::new(),
            statements: Vec::new(),
            transactions: Vec::new(),
        }
    }

    pub fn statements(&self) -> &[StatementFile] {
        &self.statements
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Walk the input directory and keep every file that follows the
    /// statement naming convention. Everything else is reported to the
    /// skipped-files log.
    pub fn gather_statement_files(
        &mut self,
        dir: &Path,
        skipped: &mut SkipLog,
    ) -> Result<(), DiscoveryError> {
        if !dir.exists() {
            return Err(DiscoveryError::PathNotFound(dir.to_path_buf()));
        }
        info!("gathering statement files from {}", dir.display());

        let mut paths = Vec::new();
        let reader = fs::read_dir(dir)
            .map_err(|err| DiscoveryError::Unreadable(dir.to_path_buf(), err))?;
        for entry in reader {
            let entry = entry.map_err(|err| DiscoveryError::Unreadable(dir.to_path_buf(), err))?;
            paths.push(entry.path());
        }
        // Directory iteration order is platform-dependent, and discovery
        // order feeds the sort tie-break, so fix the order up front.
        paths.sort();

        for path in paths {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("")
                .to_string();
            if self.classifier.is_statement_file(&name) {
                if let Some(statement) = StatementFile::from_file_name(path, &name) {
                    debug!("gathered statement file {}", name);
                    self.statements.push(statement);
                    continue;
                }
            }

            debug!("{} does not look like a statement, skipping", name);
            skipped.record(&name).map_err(DiscoveryError::SkipLog)?;
        }

        info!("gathered {} statement files", self.statements.len());
        Ok(())
    }

    /// Scan every gathered statement. Each statement gets a fresh scanner,
    /// and its pages are fed through as one continuous line stream.
    pub fn process_statements(
        &mut self,
        source: &impl PageSource,
        skipped: &mut SkipLog,
    ) -> Result<(), ProcessError> {
        for statement in &self.statements {
            info!("processing {}", statement.path.display());
            let pages = source.page_lines(&statement.path)?;

            let mut scanner =
                StatementScanner::new(&self.classifier, statement.year, statement.month == 1);
            for page in &pages {
                for line in page {
                    match scanner.scan_line(line) {
                        ScanOutcome::Transaction(mut transaction) => {
                            transaction.sequence = self.transactions.len();
                            self.transactions.push(transaction);
                        }
                        ScanOutcome::Skipped => {
                            skipped.record(line.trim()).map_err(ProcessError::SkipLog)?;
                        }
                        ScanOutcome::Ignored => {}
                    }
                }
            }
        }

        info!("extracted {} transactions", self.transactions.len());
        Ok(())
    }

    /// Order the collection by transaction date, discovery order breaking
    /// ties, with an in-place quicksort.
    pub fn sort_transactions(&mut self) {
        info!("sorting {} transactions", self.transactions.len());
        quicksort_by(&mut self.transactions, &Transaction::chronological);
    }

    /// Write the report: one row per transaction, columns date, reference,
    /// name, amount, last four. A run that found nothing writes the literal
    /// `None` instead.
    pub fn write_csv(&self, path: &Path) -> Result<(), OutputError> {
        if self.transactions.is_empty() {
            info!("no transactions found, writing {:?} to {}", EMPTY_OUTPUT, path.display());
            return fs::write(path, EMPTY_OUTPUT)
                .map_err(|err| OutputError::Unavailable(path.to_path_buf(), err));
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;
        for transaction in &self.transactions {
            writer.serialize(transaction.csv_row())?;
        }
        writer
            .flush()
            .map_err(|err| OutputError::Unavailable(path.to_path_buf(), err))?;

        Ok(())
    }
}

impl Default for StatementProcessor {
    fn default() -> Self {
        Self::new()
    }
}
