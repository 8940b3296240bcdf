use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Append-only audit log for inputs deliberately excluded from the output.
///
/// The handle is acquired for the scope of a run phase and flushed when the
/// value is dropped, so every exit path leaves a complete log behind.
pub struct SkipLog {
    writer: BufWriter<File>,
}

impl SkipLog {
    /// Create the log file and write its banner line.
    pub fn create(path: &Path, banner: &str) -> io::Result<Self> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", banner)?;
        Ok(Self { writer })
    }

    /// Append one excluded entry.
    pub fn record(&mut self, entry: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn should_write_banner_and_entries_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skipped_lines.txt");

        let mut log = SkipLog::create(&path, "-- SKIPPED LINES --").unwrap();
        log.record("ONLINE PAYMENT THANK YOU").unwrap();
        log.record("01/17 SHORT 45.67").unwrap();
        drop(log);

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "-- SKIPPED LINES --\nONLINE PAYMENT THANK YOU\n01/17 SHORT 45.67\n"
        );
    }

    #[test]
    fn should_fail_to_create_a_log_in_a_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("skipped_files.txt");

        assert!(SkipLog::create(&path, "-- SKIPPED FILES --").is_err());
    }
}
