use anyhow::{Context, Result};
use lopdf::{Document, ObjectId};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub struct PdfDocument {
    pub doc: Document,
    pages: BTreeMap<u32, ObjectId>,
}

impl PdfDocument {
    /// Read and parse a PDF. The file is closed before this returns.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file =
            File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
        let size = file
            .metadata()
            .with_context(|| format!("Failed to stat: {}", path.display()))?
            .len();

        let mut bytes = Vec::with_capacity(size as usize);
        file.read_to_end(&mut bytes)
            .with_context(|| format!("Failed to read: {}", path.display()))?;

        Self::load_mem(&bytes).with_context(|| format!("Failed to parse PDF: {}", path.display()))
    }

    pub fn load_mem(bytes: &[u8]) -> Result<Self> {
        let doc = Document::load_mem(bytes)?;
        let pages = doc.get_pages();
        Ok(PdfDocument { doc, pages })
    }

    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Object ID of a 1-indexed page
    pub fn page_id(&self, page: u32) -> Option<ObjectId> {
        self.pages.get(&page).copied()
    }
}
