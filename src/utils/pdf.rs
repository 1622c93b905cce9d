use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::{debug, error};

use crate::error::{ResumeError, Result};

/// Turns a document into per-page text.
///
/// Each element is one page: `Some(text)`, or `None` when the page yields
/// nothing.
pub trait PageSource {
    fn pages(&self, path: &Path) -> Result<Vec<Option<String>>>;
}

/// [`PageSource`] backed by `pdf-extract`
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractSource;

impl PageSource for PdfExtractSource {
    fn pages(&self, path: &Path) -> Result<Vec<Option<String>>> {
        // The handle is closed once the bytes are read, whatever decoding does
        let bytes = std::fs::read(path).map_err(|e| ResumeError::extraction(path, e))?;

        // pdf-extract panics on some malformed input instead of returning an error
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(&bytes)
        }));

        let pages = match result {
            Ok(Ok(pages)) => pages,
            Ok(Err(e)) => return Err(ResumeError::extraction(path, e.to_string())),
            Err(_) => {
                return Err(ResumeError::extraction(
                    path,
                    "PDF decoder panicked (malformed document)",
                ));
            }
        };

        Ok(pages
            .into_iter()
            .map(|text| if text.is_empty() { None } else { Some(text) })
            .collect())
    }
}

/// Extracts the text of every page that has any, joined with newlines.
///
/// Failures are logged before they are returned.
pub fn extract_text(source: &dyn PageSource, path: &Path) -> Result<String> {
    let pages = source.pages(path).inspect_err(|e| {
        error!("{}", e);
    })?;

    let total = pages.len();
    let texts: Vec<String> = pages.into_iter().flatten().collect();
    debug!("Extracted text from {} of {} pages", texts.len(), total);

    Ok(texts.join("\n"))
}
