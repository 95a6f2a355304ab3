//! Swappable data tables behind the normalizer and the heuristic extractors.
//!
//! The built-in defaults cover Indonesian and English résumés. A JSON file with
//! the same shape replaces any subset of them; missing keys keep the default.

use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Literal token rewrite applied during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    pub from: String,
    pub to: String,
}

impl Substitution {
    fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicTables {
    pub substitutions: Vec<Substitution>,
    pub female_names: Vec<String>,
    pub male_names: Vec<String>,
    pub islamic_name_prefixes: Vec<String>,
    pub birth_anchors: Vec<String>,
    pub about_me_markers: Vec<String>,
    pub gender_confidence_threshold: f64,
    pub birth_window_chars: usize,
}

impl Default for HeuristicTables {
    fn default() -> Self {
        Self {
            substitutions: vec![
                Substitution::new("ipk", "gpa"),
                Substitution::new("laki-laki", "male"),
                Substitution::new("perempuan", "female"),
                Substitution::new("wanita", "female"),
                Substitution::new("protestan", "christian"),
                Substitution::new("kristen", "christian"),
                Substitution::new("katolik", "catholic"),
                Substitution::new("buddha", "buddhist"),
                Substitution::new("budha", "buddhist"),
                Substitution::new("muslim", "islam"),
                Substitution::new("islam", "islam"),
                Substitution::new("hindu", "hindu"),
            ],
            female_names: strings(&[
                "ayu", "putri", "dewi", "sari", "siti", "indah", "lestari", "wulan", "fitri",
                "rina", "rini", "maya", "anisa", "nisa", "ratna", "intan", "citra", "mega",
                "yuni", "novi", "wati", "ningsih", "aisyah", "nabila", "amelia",
            ]),
            male_names: strings(&[
                "budi", "agus", "eko", "andi", "rizky", "dimas", "fajar", "bayu", "joko",
                "hendra", "arif", "reza", "yoga", "wahyu", "bambang", "teguh", "putra", "iwan",
                "rudi", "yusuf", "ahmad", "muhammad", "ilham", "gilang", "kevin",
            ]),
            islamic_name_prefixes: strings(&[
                "muhammad", "muhamad", "mohammad", "mohamad", "ahmad", "abdul", "abdullah",
            ]),
            birth_anchors: strings(&["born", "lahir", "kelahiran"]),
            about_me_markers: strings(&["about me"]),
            gender_confidence_threshold: 0.75,
            birth_window_chars: 500,
        }
    }
}

impl HeuristicTables {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, HeuristicsError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, HeuristicsError> {
        let mut tables: Self = serde_json::from_reader(reader)?;
        tables.canonicalize();
        tables.validate()?;
        Ok(tables)
    }

    pub fn validate(&self) -> Result<(), HeuristicsError> {
        if !(self.gender_confidence_threshold > 0.0 && self.gender_confidence_threshold <= 1.0) {
            return Err(HeuristicsError::Invalid(format!(
                "gender_confidence_threshold must be within (0, 1], got {}",
                self.gender_confidence_threshold
            )));
        }
        if self.birth_anchors.is_empty() {
            return Err(HeuristicsError::Invalid(
                "birth_anchors must name at least one anchor token".to_string(),
            ));
        }
        if self.birth_window_chars == 0 {
            return Err(HeuristicsError::Invalid(
                "birth_window_chars must be positive".to_string(),
            ));
        }
        if let Some(entry) = self.substitutions.iter().find(|entry| entry.from.is_empty()) {
            return Err(HeuristicsError::Invalid(format!(
                "substitution to '{}' has an empty source token",
                entry.to
            )));
        }
        Ok(())
    }

    // Lookups run against lower-cased text.
    fn canonicalize(&mut self) {
        for list in [
            &mut self.female_names,
            &mut self.male_names,
            &mut self.islamic_name_prefixes,
            &mut self.birth_anchors,
            &mut self.about_me_markers,
        ] {
            *list = list
                .iter()
                .map(|entry| entry.trim().to_lowercase())
                .filter(|entry| !entry.is_empty())
                .collect();
        }
        for entry in &mut self.substitutions {
            entry.from = entry.from.to_lowercase();
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[derive(Debug, thiserror::Error)]
pub enum HeuristicsError {
    #[error("failed to read heuristic tables: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid heuristic tables JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid heuristic tables: {0}")]
    Invalid(String),
    #[error("could not compile extraction pattern: {0}")]
    Pattern(#[from] regex::Error),
}
