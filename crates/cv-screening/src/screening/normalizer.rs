use super::heuristics::{HeuristicTables, Substitution};

/// Lower-cases text and rewrites regional tokens to the canonical English
/// tokens the matchers look for.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    substitutions: Vec<Substitution>,
}

impl TextNormalizer {
    pub fn new(tables: &HeuristicTables) -> Self {
        Self {
            substitutions: tables.substitutions.clone(),
        }
    }

    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        self.substitutions
            .iter()
            .filter(|entry| entry.from != entry.to)
            .fold(lowered, |acc, entry| {
                if acc.contains(entry.from.as_str()) {
                    acc.replace(entry.from.as_str(), &entry.to)
                } else {
                    acc
                }
            })
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(&HeuristicTables::default())
    }
}
