use std::error::Error;
use std::fmt;
use std::fmt::Formatter;
use std::io;
use std::path::PathBuf;

/// The PDF collaborator could not open or parse a statement file. There is
/// no skip-and-continue for documents: this aborts the whole run.
#[derive(Debug)]
pub struct DocumentLoadError {
    file: PathBuf,
    reason: String,
}

impl DocumentLoadError {
    pub fn new(file: PathBuf, reason: String) -> Self {
        Self { file, reason }
    }
}

#[derive(Debug)]
pub enum DiscoveryError {
    PathNotFound(PathBuf),
    Unreadable(PathBuf, io::Error),
    SkipLog(io::Error),
}

#[derive(Debug)]
pub enum ProcessError {
    DocumentLoad(DocumentLoadError),
    SkipLog(io::Error),
}

/// A line matched a transaction shape but could not be broken into fields.
/// Each variant carries the offending line; the scanner routes these to the
/// skipped-lines log rather than aborting the run.
#[derive(Debug, PartialEq)]
pub enum MalformedLineError {
    Truncated(String),
    MissingDate(String),
    InvalidDate(String),
    MissingReference(String),
    MissingAmount(String),
    InvalidAmount(String),
    EmptyName(String),
}

#[derive(Debug)]
pub enum OutputError {
    Unavailable(PathBuf, io::Error),
    Write(csv::Error),
}

impl fmt::Display for DocumentLoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not extract text from {}: {}",
            self.file.display(),
            self.reason
        )
    }
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DiscoveryError::PathNotFound(path) => {
                write!(f, "input directory {} does not exist", path.display())
            }
            DiscoveryError::Unreadable(path, err) => {
                write!(
                    f,
                    "failed to read input directory {}: {}",
                    path.display(),
                    err
                )
            }
            DiscoveryError::SkipLog(err) => {
                write!(f, "failed to write to the skipped files log: {}", err)
            }
        }
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::DocumentLoad(err) => write!(f, "{}", err),
            ProcessError::SkipLog(err) => {
                write!(f, "failed to write to the skipped lines log: {}", err)
            }
        }
    }
}

impl fmt::Display for MalformedLineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MalformedLineError::Truncated(line) => {
                write!(f, "transaction line ended before its fields: {}", line)
            }
            MalformedLineError::MissingDate(line) => {
                write!(f, "no date delimiter found in transaction line: {}", line)
            }
            MalformedLineError::InvalidDate(line) => {
                write!(f, "transaction line has an out-of-range date: {}", line)
            }
            MalformedLineError::MissingReference(line) => {
                write!(
                    f,
                    "transaction line is too short to hold a reference number: {}",
                    line
                )
            }
            MalformedLineError::MissingAmount(line) => {
                write!(f, "no amount found in transaction line: {}", line)
            }
            MalformedLineError::InvalidAmount(line) => {
                write!(f, "transaction line amount is not a number: {}", line)
            }
            MalformedLineError::EmptyName(line) => {
                write!(f, "transaction line has no name: {}", line)
            }
        }
    }
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::Unavailable(path, err) => {
                write!(f, "couldn't open {}: {}", path.display(), err)
            }
            OutputError::Write(err) => write!(f, "failed to write csv report: {}", err),
        }
    }
}

impl From<DocumentLoadError> for ProcessError {
    fn from(err: DocumentLoadError) -> Self {
        ProcessError::DocumentLoad(err)
    }
}

impl From<csv::Error> for OutputError {
    fn from(err: csv::Error) -> Self {
        OutputError::Write(err)
    }
}

impl Error for DocumentLoadError {}
impl Error for DiscoveryError {}
impl Error for ProcessError {}
impl Error for MalformedLineError {}
impl Error for OutputError {}
