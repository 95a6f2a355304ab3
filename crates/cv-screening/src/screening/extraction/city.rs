use super::chain::{DocumentView, Strategy};
use crate::screening::gazetteer::{CityPrecedence, Gazetteer};

/// Gazetteer lookup over the normalized text.
pub struct GazetteerCity {
    gazetteer: Gazetteer,
    precedence: CityPrecedence,
}

impl GazetteerCity {
    pub fn new(gazetteer: Gazetteer, precedence: CityPrecedence) -> Self {
        Self {
            gazetteer,
            precedence,
        }
    }
}

impl Strategy<String> for GazetteerCity {
    fn name(&self) -> &'static str {
        "gazetteer"
    }

    fn attempt(&self, document: &DocumentView<'_>) -> Option<String> {
        self.gazetteer
            .lookup(document.normalized(), self.precedence)
            .map(title_case)
    }
}

pub(crate) fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        if at_word_start {
            result.extend(ch.to_uppercase());
        } else {
            result.push(ch);
        }
        at_word_start = !ch.is_alphabetic();
    }
    result
}
