use super::domain::{CandidateRecord, DocumentFailure, JobProfile, RawDocument};
use super::extraction::AttributeExtractor;
use super::matcher::KeywordMatcher;
use super::normalizer::TextNormalizer;
use super::ScreeningError;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Reasons a single document is dropped from the output.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("unreadable text: {0}")]
    Unreadable(&'static str),
    #[error(transparent)]
    Screening(#[from] ScreeningError),
    #[error("processing aborted: {0}")]
    Aborted(String),
}

/// Builds one [`CandidateRecord`] per document and turns every per-document
/// failure into a [`DocumentFailure`].
pub struct CandidateRecordAssembler {
    normalizer: TextNormalizer,
    matcher: KeywordMatcher,
    extractor: AttributeExtractor,
}

impl CandidateRecordAssembler {
    pub fn new(normalizer: TextNormalizer, extractor: AttributeExtractor) -> Self {
        Self {
            matcher: KeywordMatcher::new(normalizer.clone()),
            normalizer,
            extractor,
        }
    }

    pub fn assemble(
        &self,
        document: &RawDocument,
        profile: &JobProfile,
    ) -> Result<CandidateRecord, DocumentFailure> {
        panic::catch_unwind(AssertUnwindSafe(|| self.build(document, profile)))
            .unwrap_or_else(|payload| Err(DocumentError::Aborted(panic_message(payload))))
            .map_err(|err| DocumentFailure::new(&document.filename, err.to_string()))
    }

    fn build(
        &self,
        document: &RawDocument,
        profile: &JobProfile,
    ) -> Result<CandidateRecord, DocumentError> {
        check_readable(&document.text)?;

        let normalized = self.normalizer.normalize(&document.text);
        let match_result = self.matcher.match_profile(&normalized, profile)?;
        let attributes = self.extractor.extract(&document.text, &normalized);

        Ok(CandidateRecord {
            filename: document.filename.clone(),
            attributes,
            match_result,
        })
    }
}

// Binary residue from a failed text extraction, not a résumé.
fn check_readable(text: &str) -> Result<(), DocumentError> {
    if text.contains('\0') {
        return Err(DocumentError::Unreadable("text contains NUL bytes"));
    }

    let visible = text.chars().filter(|ch| !ch.is_whitespace()).count();
    let replaced = text.chars().filter(|ch| *ch == char::REPLACEMENT_CHARACTER).count();
    if visible > 0 && replaced * 2 > visible {
        return Err(DocumentError::Unreadable(
            "text is mostly undecodable characters",
        ));
    }

    Ok(())
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unexpected failure".to_string()
    }
}
