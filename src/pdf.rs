use crate::errors::DocumentLoadError;
use std::path::Path;

/// Supplies the text of a statement file as ordered pages of ordered lines.
///
/// The engine only ever needs this one view of a document, so tests swap in
/// an in-memory implementation.
pub trait PageSource {
    fn page_lines(&self, file: &Path) -> Result<Vec<Vec<String>>, DocumentLoadError>;
}

/// Production source backed by the pdf-extract crate.
pub struct PdfTextSource;

impl PageSource for PdfTextSource {
    fn page_lines(&self, file: &Path) -> Result<Vec<Vec<String>>, DocumentLoadError> {
        let pages = pdf_extract::extract_text_by_pages(file)
            .map_err(|err| DocumentLoadError::new(file.to_path_buf(), err.to_string()))?;
        Ok(pages
            .into_iter()
            .map(|page| page.lines().map(str::to_string).collect())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn should_fail_to_load_a_missing_document() {
        let missing = PathBuf::from("no_such_statement.pdf");

        assert!(PdfTextSource.page_lines(&missing).is_err());
    }
}
