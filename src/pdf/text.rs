use crate::pdf::PdfDocument;
use anyhow::{anyhow, Context, Result};

impl PdfDocument {
    /// Extract the plain text of a 1-indexed page.
    ///
    /// Returns `Ok(None)` for a page without any content stream; there is
    /// nothing to search on such a page, but it is not an error either.
    pub fn page_text(&self, page: u32) -> Result<Option<String>> {
        let page_id = self
            .page_id(page)
            .ok_or_else(|| anyhow!("Page {} is out of range (1-{})", page, self.page_count()))?;

        if self.doc.get_page_contents(page_id).is_empty() {
            return Ok(None);
        }

        let text = self
            .doc
            .extract_text(&[page])
            .with_context(|| format!("Failed to extract text from page {}", page))?;
        Ok(Some(text))
    }
}
