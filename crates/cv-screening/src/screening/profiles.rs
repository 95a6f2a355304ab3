use super::domain::JobProfile;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Static mapping from job identifier to its keyword profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCatalog {
    profiles: Vec<JobProfile>,
}

#[derive(Debug, Deserialize)]
struct ProfileEntry {
    id: String,
    #[serde(default)]
    label: Option<String>,
    keywords: Vec<String>,
}

impl ProfileCatalog {
    pub fn builtin() -> Self {
        Self {
            profiles: vec![
                JobProfile::new(
                    "frontend",
                    "Frontend (FE)",
                    ["javascript", "react", "vue", "next", "frontend"],
                ),
                JobProfile::new(
                    "backend",
                    "Backend (BE)",
                    ["golang", "sql", "rest api", "backend", "nodejs"],
                ),
                JobProfile::new(
                    "ui-ux",
                    "UI/UX",
                    ["figma", "prototyping", "wireframe", "mockup", "adobe"],
                ),
                JobProfile::new(
                    "machine-learning",
                    "Machine Learning (ML)",
                    ["python", "machine learning", "tensorflow", "sklearn", "model"],
                ),
            ],
        }
    }

    pub fn from_profiles(profiles: Vec<JobProfile>) -> Self {
        Self { profiles }
    }

    /// Loads a JSON array of `{ "id", "label"?, "keywords" }` entries.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let entries: Vec<ProfileEntry> = serde_json::from_reader(reader)?;
        let profiles = entries
            .into_iter()
            .map(|entry| {
                let label = entry.label.unwrap_or_else(|| entry.id.clone());
                JobProfile::new(entry.id, label, entry.keywords)
            })
            .collect();
        Ok(Self { profiles })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn profiles(&self) -> &[JobProfile] {
        &self.profiles
    }

    /// Resolves a profile by id or display label, ignoring case.
    pub fn get(&self, key: &str) -> Result<&JobProfile, CatalogError> {
        let key = key.trim();
        self.profiles
            .iter()
            .find(|profile| profile.id.eq_ignore_ascii_case(key) || profile.label.eq_ignore_ascii_case(key))
            .ok_or_else(|| CatalogError::UnknownProfile {
                key: key.to_string(),
                known: self
                    .profiles
                    .iter()
                    .map(|profile| profile.id.clone())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl Default for ProfileCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read profile catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid profile catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown job profile '{key}' (known: {known})")]
    UnknownProfile { key: String, known: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_four_non_empty_profiles() {
        let catalog = ProfileCatalog::builtin();
        assert_eq!(catalog.profiles().len(), 4);
        assert!(catalog
            .profiles()
            .iter()
            .all(|profile| !profile.keywords.is_empty()));
    }

    #[test]
    fn resolves_by_id_or_label() {
        let catalog = ProfileCatalog::builtin();
        assert_eq!(catalog.get("Backend").expect("by id").id, "backend");
        assert_eq!(
            catalog.get("Machine Learning (ML)").expect("by label").id,
            "machine-learning"
        );
        match catalog.get("devops") {
            Err(CatalogError::UnknownProfile { key, known }) => {
                assert_eq!(key, "devops");
                assert!(known.contains("ui-ux"));
            }
            other => panic!("expected unknown profile, got {other:?}"),
        }
    }

    #[test]
    fn json_catalog_lowercases_keywords_and_defaults_label() {
        let json = r#"[{ "id": "data", "keywords": ["SQL", " Spark "] }, { "id": "empty", "keywords": [] }]"#;
        let catalog = ProfileCatalog::from_reader(json.as_bytes()).expect("catalog loads");
        let data = catalog.get("data").expect("profile present");
        assert_eq!(data.label, "data");
        assert_eq!(data.keywords, vec!["sql", "spark"]);
        assert!(catalog.get("empty").expect("kept").keywords.is_empty());
    }
}
