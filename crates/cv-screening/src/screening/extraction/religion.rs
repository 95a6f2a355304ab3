use super::chain::{DocumentView, Strategy};
use crate::screening::domain::Religion;

/// First canonical religion keyword present, in fixed priority order.
pub struct ExplicitReligionKeyword;

impl Strategy<Religion> for ExplicitReligionKeyword {
    fn name(&self) -> &'static str {
        "explicit_keyword"
    }

    fn attempt(&self, document: &DocumentView<'_>) -> Option<Religion> {
        let text = document.normalized();
        Religion::ordered()
            .into_iter()
            .find(|religion| text.contains(religion.keyword()))
    }
}

/// Islamic given-name prefixes on the apparent first name.
pub struct IslamicNamePrefix {
    prefixes: Vec<String>,
}

impl IslamicNamePrefix {
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }
}

impl Strategy<Religion> for IslamicNamePrefix {
    fn name(&self) -> &'static str {
        "name_prefix"
    }

    fn attempt(&self, document: &DocumentView<'_>) -> Option<Religion> {
        let first_name = document.first_name()?;
        self.prefixes
            .iter()
            .any(|prefix| first_name.starts_with(prefix.as_str()))
            .then_some(Religion::Islam)
    }
}
