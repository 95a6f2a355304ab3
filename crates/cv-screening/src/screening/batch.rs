use super::assembler::CandidateRecordAssembler;
use super::domain::{CandidateRecord, DocumentFailure, JobProfile, RawDocument};
use super::extraction::{AttributeExtractor, ExtractionSettings};
use super::gazetteer::Gazetteer;
use super::heuristics::{HeuristicTables, HeuristicsError};
use super::normalizer::TextNormalizer;
use super::ScreeningError;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Records in input order plus descriptors for the documents that were dropped.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchOutcome {
    pub records: Vec<CandidateRecord>,
    pub failures: Vec<DocumentFailure>,
}

/// Drives one document at a time through normalization, matching and extraction.
pub struct BatchRunner {
    assembler: CandidateRecordAssembler,
}

impl BatchRunner {
    pub fn new(
        tables: &HeuristicTables,
        gazetteer: Gazetteer,
        settings: ExtractionSettings,
    ) -> Result<Self, HeuristicsError> {
        let extractor = AttributeExtractor::new(tables, gazetteer, settings)?;
        Ok(Self::from_assembler(CandidateRecordAssembler::new(
            TextNormalizer::new(tables),
            extractor,
        )))
    }

    pub fn from_assembler(assembler: CandidateRecordAssembler) -> Self {
        Self { assembler }
    }

    /// Fails only for an empty profile, before any document is processed.
    pub fn run<I>(&self, documents: I, profile: &JobProfile) -> Result<BatchOutcome, ScreeningError>
    where
        I: IntoIterator<Item = RawDocument>,
    {
        if profile.keywords.is_empty() {
            return Err(ScreeningError::EmptyProfile {
                profile_id: profile.id.clone(),
            });
        }

        let mut outcome = BatchOutcome::default();
        for document in documents {
            match self.assembler.assemble(&document, profile) {
                Ok(record) => {
                    debug!(
                        filename = %record.filename,
                        percentage = record.match_result.percentage,
                        "screened document"
                    );
                    outcome.records.push(record);
                }
                Err(failure) => {
                    warn!(filename = %failure.filename, error = %failure.message, "skipping document");
                    outcome.failures.push(failure);
                }
            }
        }

        info!(
            profile = %profile.id,
            screened = outcome.records.len(),
            failed = outcome.failures.len(),
            "screening batch finished"
        );
        Ok(outcome)
    }
}
