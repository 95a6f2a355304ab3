//! Heuristic attribute extraction.
//!
//! Every field is resolved by its own [`FallbackChain`]; the strategy that
//! fired is kept as [`Provenance`] so callers can audit weak inferences.

mod birth;
mod chain;
mod city;
mod gender;
mod gpa;
mod religion;

pub use birth::AnchoredBirthDate;
pub use chain::{DocumentView, FallbackChain, Resolved, Strategy};
pub use city::GazetteerCity;
pub use gender::{ExplicitGenderToken, GivenNameGender, NameConfidence};
pub use gpa::GpaAnchor;
pub use religion::{ExplicitReligionKeyword, IslamicNamePrefix};

use super::domain::{AttributeSet, BirthInfo, Gender, Provenance, Religion};
use super::gazetteer::{CityPrecedence, Gazetteer};
use super::heuristics::{HeuristicTables, HeuristicsError};
use chrono::NaiveDate;

/// Per-batch inputs that are not part of the heuristic tables.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionSettings {
    pub reference_date: NaiveDate,
    pub city_precedence: CityPrecedence,
}

impl ExtractionSettings {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            city_precedence: CityPrecedence::default(),
        }
    }

    pub fn with_city_precedence(mut self, city_precedence: CityPrecedence) -> Self {
        self.city_precedence = city_precedence;
        self
    }
}

/// Runs the five independent sub-extractors over one document.
pub struct AttributeExtractor {
    gpa: FallbackChain<f64>,
    gender: FallbackChain<Gender>,
    religion: FallbackChain<Religion>,
    city: FallbackChain<String>,
    birth: FallbackChain<BirthInfo>,
}

impl AttributeExtractor {
    pub fn new(
        tables: &HeuristicTables,
        gazetteer: Gazetteer,
        settings: ExtractionSettings,
    ) -> Result<Self, HeuristicsError> {
        tables.validate()?;

        Ok(Self {
            gpa: FallbackChain::new().then(GpaAnchor),
            gender: FallbackChain::new()
                .then(ExplicitGenderToken)
                .then(GivenNameGender::new(
                    tables.female_names.clone(),
                    tables.male_names.clone(),
                    tables.gender_confidence_threshold,
                )),
            religion: FallbackChain::new()
                .then(ExplicitReligionKeyword)
                .then(IslamicNamePrefix::new(tables.islamic_name_prefixes.clone())),
            city: FallbackChain::new()
                .then(GazetteerCity::new(gazetteer, settings.city_precedence)),
            birth: FallbackChain::new()
                .then(AnchoredBirthDate::new(tables, settings.reference_date)?),
        })
    }

    #[cfg(test)]
    pub(crate) fn with_gender_chain(mut self, gender: FallbackChain<Gender>) -> Self {
        self.gender = gender;
        self
    }

    /// `normalized` must be the normalizer output for `raw`.
    pub fn extract(&self, raw: &str, normalized: &str) -> AttributeSet {
        let document = DocumentView::new(raw, normalized);
        let mut provenance = Provenance::default();

        let gpa = resolve_into(&self.gpa, &document, &mut provenance.gpa);
        let gender = resolve_into(&self.gender, &document, &mut provenance.gender)
            .unwrap_or(Gender::Unknown);
        let religion = resolve_into(&self.religion, &document, &mut provenance.religion)
            .unwrap_or(Religion::Unknown);
        let city = resolve_into(&self.city, &document, &mut provenance.city);
        let birth = resolve_into(&self.birth, &document, &mut provenance.birth)
            .unwrap_or(BirthInfo::NotFound);

        AttributeSet {
            gpa,
            gender,
            religion,
            city,
            birth,
            provenance,
        }
    }
}

fn resolve_into<T>(
    chain: &FallbackChain<T>,
    document: &DocumentView<'_>,
    provenance: &mut Option<&'static str>,
) -> Option<T> {
    chain.resolve(document).map(|resolved| {
        *provenance = Some(resolved.strategy);
        resolved.value
    })
}
