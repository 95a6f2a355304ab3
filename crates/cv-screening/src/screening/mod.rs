//! Résumé screening: keyword matching plus heuristic attribute extraction
//! over plain-text candidate documents.

pub mod assembler;
pub mod batch;
pub mod domain;
pub mod export;
pub mod extraction;
pub mod gazetteer;
pub mod heuristics;
pub mod matcher;
pub mod normalizer;
pub mod profiles;

#[cfg(test)]
mod tests;

pub use assembler::{CandidateRecordAssembler, DocumentError};
pub use batch::{BatchOutcome, BatchRunner};
pub use domain::{
    AttributeSet, BirthInfo, CandidateRecord, DocumentFailure, Gender, JobProfile, KeywordHit,
    MatchResult, Provenance, RawDocument, Religion,
};
pub use export::{read_records, write_records, ExportError};
pub use extraction::{AttributeExtractor, ExtractionSettings};
pub use gazetteer::{CityPrecedence, Gazetteer, GazetteerError};
pub use heuristics::{HeuristicTables, HeuristicsError, Substitution};
pub use matcher::KeywordMatcher;
pub use normalizer::TextNormalizer;
pub use profiles::{CatalogError, ProfileCatalog};

/// Batch-level failure: nothing was screened.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    #[error("job profile '{profile_id}' has no keywords")]
    EmptyProfile { profile_id: String },
}
