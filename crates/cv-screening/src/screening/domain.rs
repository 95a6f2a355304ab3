use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Plain text of one candidate document, as returned by the text extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    pub filename: String,
    pub text: String,
}

impl RawDocument {
    pub fn new(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            text: text.into(),
        }
    }
}

/// Named set of literal keywords a role screens for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobProfile {
    pub id: String,
    pub label: String,
    pub keywords: Vec<String>,
}

impl JobProfile {
    /// Keywords are trimmed and lower-cased; blank entries are dropped.
    pub fn new<I, S>(id: impl Into<String>, label: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            id: id.into(),
            label: label.into(),
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.as_ref().trim().to_lowercase())
                .filter(|keyword| !keyword.is_empty())
                .collect(),
        }
    }

    /// Builds an ad hoc profile from a comma separated list such as `"Python, SQL"`.
    pub fn from_keyword_list(id: impl Into<String>, raw: &str) -> Self {
        let id = id.into();
        Self::new(id.clone(), id, raw.split(','))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "Male" => Ok(Self::Male),
            "Female" => Ok(Self::Female),
            "Unknown" => Ok(Self::Unknown),
            other => Err(format!("unknown gender label '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Religion {
    Islam,
    Christian,
    Catholic,
    Buddhist,
    Hindu,
    Unknown,
}

impl Religion {
    /// Detectable religions in keyword priority order.
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Islam,
            Self::Christian,
            Self::Catholic,
            Self::Buddhist,
            Self::Hindu,
        ]
    }

    /// Canonical token looked up in normalized text.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Islam => "islam",
            Self::Christian => "christian",
            Self::Catholic => "catholic",
            Self::Buddhist => "buddhist",
            Self::Hindu => "hindu",
            Self::Unknown => "unknown",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Islam => "Islam",
            Self::Christian => "Christian",
            Self::Catholic => "Catholic",
            Self::Buddhist => "Buddhist",
            Self::Hindu => "Hindu",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Religion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Religion {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .chain([Self::Unknown])
            .find(|religion| religion.label() == trimmed)
            .ok_or_else(|| format!("unknown religion label '{trimmed}'"))
    }
}

const BIRTH_NOT_FOUND: &str = "Not found";
const BIRTH_FORMAT_NOT_RECOGNIZED: &str = "Format not recognized";
const BIRTH_DATE_FORMAT: &str = "%d %B %Y";

/// Birth date outcome. The two sentinels stay distinct: `NotFound` means no
/// anchored date expression was seen, `FormatNotRecognized` means one was seen
/// but could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum BirthInfo {
    Parsed { date: NaiveDate, age: u32 },
    FormatNotRecognized,
    NotFound,
}

impl BirthInfo {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Parsed { date, .. } => Some(*date),
            _ => None,
        }
    }

    pub fn age(&self) -> Option<u32> {
        match self {
            Self::Parsed { age, .. } => Some(*age),
            _ => None,
        }
    }
}

impl fmt::Display for BirthInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsed { date, age } => {
                write!(f, "{} ({} Tahun)", date.format(BIRTH_DATE_FORMAT), age)
            }
            Self::FormatNotRecognized => f.write_str(BIRTH_FORMAT_NOT_RECOGNIZED),
            Self::NotFound => f.write_str(BIRTH_NOT_FOUND),
        }
    }
}

impl FromStr for BirthInfo {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        match trimmed {
            BIRTH_NOT_FOUND => return Ok(Self::NotFound),
            BIRTH_FORMAT_NOT_RECOGNIZED => return Ok(Self::FormatNotRecognized),
            _ => {}
        }

        let invalid = || format!("unrecognized birth value '{trimmed}'");
        let (date_part, rest) = trimmed.split_once(" (").ok_or_else(invalid)?;
        let age = rest
            .strip_suffix(" Tahun)")
            .and_then(|age| age.parse::<u32>().ok())
            .ok_or_else(invalid)?;
        let date = NaiveDate::parse_from_str(date_part, BIRTH_DATE_FORMAT).map_err(|_| invalid())?;

        Ok(Self::Parsed { date, age })
    }
}

impl From<BirthInfo> for String {
    fn from(value: BirthInfo) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for BirthInfo {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Name of the strategy that produced each field. `None` means every strategy
/// came up empty and the field holds its default sentinel. A strategy that
/// reports a sentinel itself, such as `BirthInfo::FormatNotRecognized`, is
/// still named.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Provenance {
    pub gpa: Option<&'static str>,
    pub gender: Option<&'static str>,
    pub religion: Option<&'static str>,
    pub city: Option<&'static str>,
    pub birth: Option<&'static str>,
}

/// Inferred personal attributes of one candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeSet {
    pub gpa: Option<f64>,
    pub gender: Gender,
    pub religion: Religion,
    pub city: Option<String>,
    pub birth: BirthInfo,
    #[serde(skip)]
    pub provenance: Provenance,
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self {
            gpa: None,
            gender: Gender::Unknown,
            religion: Religion::Unknown,
            city: None,
            birth: BirthInfo::NotFound,
            provenance: Provenance::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordHit {
    pub keyword: String,
    pub matched: bool,
}

/// Per-keyword hits in profile order plus the rounded match percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub per_keyword: Vec<KeywordHit>,
    pub percentage: f64,
}

impl MatchResult {
    pub fn matched_count(&self) -> usize {
        self.per_keyword.iter().filter(|hit| hit.matched).count()
    }

    pub fn is_matched(&self, keyword: &str) -> Option<bool> {
        self.per_keyword
            .iter()
            .find(|hit| hit.keyword == keyword)
            .map(|hit| hit.matched)
    }
}

/// One successfully screened document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub filename: String,
    pub attributes: AttributeSet,
    pub match_result: MatchResult,
}

/// Error descriptor for a document dropped from the batch output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFailure {
    pub filename: String,
    pub message: String,
}

impl DocumentFailure {
    pub fn new(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for DocumentFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.filename, self.message)
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
