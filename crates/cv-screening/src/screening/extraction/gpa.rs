use super::chain::{DocumentView, Strategy};
use crate::screening::domain::round2;
use once_cell::sync::Lazy;
use regex::Regex;

// "gpa", optional separator, a number with one or two fractional digits and an
// optional "/4.0" style denominator that is matched but not captured.
static GPA_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bgpa\s*[:=\-]?\s*(\d)[.,](\d{1,2})\b(?:\s*/\s*4(?:[.,]0{1,2})?)?")
        .expect("gpa pattern compiles")
});

const GPA_SCALE_MAX: f64 = 4.0;

/// Reads the first in-range GPA following a `gpa` anchor.
pub struct GpaAnchor;

impl Strategy<f64> for GpaAnchor {
    fn name(&self) -> &'static str {
        "gpa_anchor"
    }

    fn attempt(&self, document: &DocumentView<'_>) -> Option<f64> {
        parse_gpa(document.normalized())
    }
}

pub(crate) fn parse_gpa(normalized: &str) -> Option<f64> {
    GPA_PATTERN.captures_iter(normalized).find_map(|captures| {
        let value = format!("{}.{}", &captures[1], &captures[2])
            .parse::<f64>()
            .ok()?;
        (0.0..=GPA_SCALE_MAX)
            .contains(&value)
            .then(|| round2(value))
    })
}
