use super::chain::{DocumentView, Strategy};
use crate::screening::domain::Gender;
use once_cell::sync::Lazy;
use regex::Regex;

// Whole-word so that "female" never counts as "male".
static MALE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bmale\b").expect("male pattern"));
static FEMALE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bfemale\b").expect("female pattern"));

/// Explicit normalized gender token; "male" is checked first.
pub struct ExplicitGenderToken;

impl Strategy<Gender> for ExplicitGenderToken {
    fn name(&self) -> &'static str {
        "explicit_token"
    }

    fn attempt(&self, document: &DocumentView<'_>) -> Option<Gender> {
        let text = document.normalized();
        if MALE_TOKEN.is_match(text) {
            Some(Gender::Male)
        } else if FEMALE_TOKEN.is_match(text) {
            Some(Gender::Female)
        } else {
            None
        }
    }
}

/// Compares the apparent first name with curated given-name fragments and
/// commits only when one list holds at least `threshold` of the evidence.
pub struct GivenNameGender {
    female: Vec<String>,
    male: Vec<String>,
    threshold: f64,
}

/// Share of the given-name evidence each list holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NameConfidence {
    pub female: f64,
    pub male: f64,
}

impl GivenNameGender {
    pub fn new(female: Vec<String>, male: Vec<String>, threshold: f64) -> Self {
        Self {
            female,
            male,
            threshold,
        }
    }

    /// `None` when neither list matches the name at all.
    pub fn confidence(&self, first_name: &str) -> Option<NameConfidence> {
        let count = |list: &[String]| {
            list.iter()
                .filter(|fragment| first_name.contains(fragment.as_str()))
                .count()
        };
        let female = count(&self.female);
        let male = count(&self.male);
        let total = female + male;
        if total == 0 {
            return None;
        }

        Some(NameConfidence {
            female: female as f64 / total as f64,
            male: male as f64 / total as f64,
        })
    }
}

impl Strategy<Gender> for GivenNameGender {
    fn name(&self) -> &'static str {
        "given_name"
    }

    fn attempt(&self, document: &DocumentView<'_>) -> Option<Gender> {
        let confidence = self.confidence(document.first_name()?)?;
        if confidence.female >= self.threshold {
            Some(Gender::Female)
        } else if confidence.male >= self.threshold {
            Some(Gender::Male)
        } else {
            None
        }
    }
}
