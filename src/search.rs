use crate::output::{MatchRecord, OutputStyle, Printer};
use crate::pdf::PdfDocument;
use crate::scan::scan;
use crate::walk::pdf_files;
use anyhow::Result;
use log::debug;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct SearchRequest {
    pub pattern: String,
    pub targets: Vec<PathBuf>,
    pub context_chars: usize,
    pub color: bool,
    pub style: OutputStyle,
}

impl Default for SearchRequest {
    fn default() -> Self {
        SearchRequest {
            pattern: String::new(),
            targets: vec![PathBuf::from(".")],
            context_chars: 30,
            color: true,
            style: OutputStyle::Grep,
        }
    }
}

/// Something that could not be searched: a path, a whole file or one page
#[derive(Debug)]
pub struct Failure {
    pub path: PathBuf,
    pub page: Option<u32>,
    pub error: anyhow::Error,
}

impl Failure {
    pub fn file<P: AsRef<Path>>(path: P, error: anyhow::Error) -> Self {
        Failure {
            path: path.as_ref().to_path_buf(),
            page: None,
            error,
        }
    }

    pub fn page<P: AsRef<Path>>(path: P, page: u32, error: anyhow::Error) -> Self {
        Failure {
            path: path.as_ref().to_path_buf(),
            page: Some(page),
            error,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.page {
            Some(page) => write!(
                f,
                "could not search in file \"{}\", page {}: {:#}",
                self.path.display(),
                page,
                self.error
            ),
            None => write!(
                f,
                "could not search in file \"{}\": {:#}",
                self.path.display(),
                self.error
            ),
        }
    }
}

/// Search every target, printing matches as they are found.
///
/// Unreadable paths, broken PDFs and pages that fail to extract are skipped
/// and returned as failures. Only errors writing the output end the run.
pub fn run<W: Write>(request: &SearchRequest, printer: &mut Printer<W>) -> Result<Vec<Failure>> {
    let mut failures = Vec::new();

    printer.begin()?;

    for target in &request.targets {
        for file in pdf_files(target) {
            match file {
                Ok(path) => search_file(&path, request, printer, &mut failures)?,
                Err(failure) => failures.push(failure),
            }
        }
    }

    printer.finish()?;
    Ok(failures)
}

fn search_file<W: Write>(
    path: &Path,
    request: &SearchRequest,
    printer: &mut Printer<W>,
    failures: &mut Vec<Failure>,
) -> Result<()> {
    debug!("scanning {}", path.display());

    let doc = match PdfDocument::open(path) {
        Ok(doc) => doc,
        Err(e) => {
            failures.push(Failure::file(path, e));
            return Ok(());
        }
    };

    let page_count = doc.page_count();
    debug!("{}: {} page(s)", path.display(), page_count);

    let file = path.display().to_string();
    for page in 1..=page_count {
        let text = match doc.page_text(page) {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!("{}: page {} has no content", file, page);
                continue;
            }
            Err(e) => {
                failures.push(Failure::page(path, page, e));
                continue;
            }
        };

        for hit in scan(&text, &request.pattern, request.context_chars, request.color) {
            printer.print(&MatchRecord {
                file: file.clone(),
                page,
                offset: hit.offset,
                context: hit.context,
            })?;
        }
    }

    Ok(())
}
