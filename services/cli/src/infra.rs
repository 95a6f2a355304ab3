use chrono::NaiveDate;
use cv_screening::screening::{DocumentFailure, RawDocument};
use std::path::Path;
use tracing::warn;

const DOCUMENT_EXTENSION: &str = "txt";

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Reads every `.txt` file in `dir`, sorted by file name.
///
/// Files that cannot be read as UTF-8 become failures so the rest of the batch
/// still runs; other extensions are skipped with a warning.
pub(crate) fn load_documents(
    dir: &Path,
) -> Result<(Vec<RawDocument>, Vec<DocumentFailure>), std::io::Error> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut documents = Vec::new();
    let mut failures = Vec::new();
    for path in paths {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let is_text = path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| extension.eq_ignore_ascii_case(DOCUMENT_EXTENSION));
        if !is_text {
            warn!(filename = %filename, "skipping unsupported document type");
            continue;
        }

        match std::fs::read_to_string(&path) {
            Ok(text) => documents.push(RawDocument::new(filename, text)),
            Err(err) => failures.push(DocumentFailure::new(
                filename,
                format!("document could not be read: {err}"),
            )),
        }
    }

    Ok((documents, failures))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(
            parse_date(" 2025-10-16 "),
            Ok(NaiveDate::from_ymd_opt(2025, 10, 16).expect("valid date"))
        );
        assert!(parse_date("16/10/2025").is_err());
    }

    #[test]
    fn load_documents_reads_text_files_in_name_order() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("b.txt"), "Budi Santoso").expect("write b");
        std::fs::write(dir.path().join("a.TXT"), "Ayu Lestari").expect("write a");
        std::fs::write(dir.path().join("scan.pdf"), "%PDF-1.4").expect("write pdf");
        std::fs::write(dir.path().join("broken.txt"), [0xff, 0xfe, 0x00, 0xc3])
            .expect("write broken");
        std::fs::create_dir(dir.path().join("nested.txt")).expect("create dir");

        let (documents, failures) = load_documents(dir.path()).expect("directory loads");

        let names: Vec<_> = documents.iter().map(|doc| doc.filename.as_str()).collect();
        assert_eq!(names, vec!["a.TXT", "b.txt"]);
        assert_eq!(documents[0].text, "Ayu Lestari");
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].filename, "broken.txt");
    }

    #[test]
    fn load_documents_reports_missing_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(load_documents(&dir.path().join("missing")).is_err());
    }
}
