use crate::search::Failure;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expand a target into the PDF files to scan.
///
/// A regular file is returned as is, whatever its extension. A directory is
/// walked recursively and only `.pdf` files (any case) are kept. Errors are
/// yielded in place so the caller can record them and carry on.
pub fn pdf_files(target: &Path) -> Box<dyn Iterator<Item = Result<PathBuf, Failure>>> {
    let meta = match fs::metadata(target) {
        Ok(meta) => meta,
        Err(e) => {
            let err = anyhow::Error::new(e).context("Failed to stat path");
            return Box::new(std::iter::once(Err(Failure::file(target, err))));
        }
    };

    if !meta.is_dir() {
        return Box::new(std::iter::once(Ok(target.to_path_buf())));
    }

    let root = target.to_path_buf();
    let entries = WalkDir::new(target)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && has_pdf_extension(entry.path()) {
                    Some(Ok(entry.into_path()))
                } else {
                    None
                }
            }
            Err(e) => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
                let err = anyhow::Error::new(e).context("Failed to walk directory");
                Some(Err(Failure::file(path, err)))
            }
        });

    Box::new(entries)
}

fn has_pdf_extension(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(".pdf"))
        .unwrap_or(false)
}
