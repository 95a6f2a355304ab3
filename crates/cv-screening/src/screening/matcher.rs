use super::domain::{round2, JobProfile, KeywordHit, MatchResult};
use super::normalizer::TextNormalizer;
use super::ScreeningError;

/// Scores normalized text against a profile's literal keywords.
///
/// Keywords go through the same normalizer as the document, so a regional
/// keyword such as "kristen" is looked up as "christian".
#[derive(Debug, Clone, Default)]
pub struct KeywordMatcher {
    normalizer: TextNormalizer,
}

impl KeywordMatcher {
    pub fn new(normalizer: TextNormalizer) -> Self {
        Self { normalizer }
    }

    pub fn match_profile(
        &self,
        normalized: &str,
        profile: &JobProfile,
    ) -> Result<MatchResult, ScreeningError> {
        if profile.keywords.is_empty() {
            return Err(ScreeningError::EmptyProfile {
                profile_id: profile.id.clone(),
            });
        }

        let per_keyword: Vec<KeywordHit> = profile
            .keywords
            .iter()
            .map(|keyword| KeywordHit {
                keyword: keyword.clone(),
                matched: normalized.contains(self.normalizer.normalize(keyword).as_str()),
            })
            .collect();

        let matched = per_keyword.iter().filter(|hit| hit.matched).count();
        let percentage = round2(matched as f64 / per_keyword.len() as f64 * 100.0);

        Ok(MatchResult {
            per_keyword,
            percentage,
        })
    }
}
