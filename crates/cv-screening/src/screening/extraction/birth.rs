use super::chain::{DocumentView, Strategy};
use crate::screening::domain::BirthInfo;
use crate::screening::heuristics::{HeuristicTables, HeuristicsError};
use chrono::{Datelike, NaiveDate};
use regex::Regex;

// English and Indonesian month names and common abbreviations.
const MONTHS: &[(&str, u32)] = &[
    ("january", 1),
    ("januari", 1),
    ("jan", 1),
    ("february", 2),
    ("februari", 2),
    ("pebruari", 2),
    ("feb", 2),
    ("peb", 2),
    ("march", 3),
    ("maret", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("may", 5),
    ("mei", 5),
    ("june", 6),
    ("juni", 6),
    ("jun", 6),
    ("july", 7),
    ("juli", 7),
    ("jul", 7),
    ("august", 8),
    ("agustus", 8),
    ("aug", 8),
    ("agu", 8),
    ("agt", 8),
    ("september", 9),
    ("sept", 9),
    ("sep", 9),
    ("october", 10),
    ("oktober", 10),
    ("oct", 10),
    ("okt", 10),
    ("november", 11),
    ("nopember", 11),
    ("nov", 11),
    ("december", 12),
    ("desember", 12),
    ("dec", 12),
    ("des", 12),
];

/// Anchored birth date inside the leading window of the raw text.
///
/// Yields `None` when no anchored date expression exists, and
/// `Some(BirthInfo::FormatNotRecognized)` when one exists but does not parse.
pub struct AnchoredBirthDate {
    pattern: Regex,
    markers: Vec<String>,
    window_chars: usize,
    reference_date: NaiveDate,
}

impl AnchoredBirthDate {
    pub fn new(tables: &HeuristicTables, reference_date: NaiveDate) -> Result<Self, HeuristicsError> {
        let anchors = tables
            .birth_anchors
            .iter()
            .map(|anchor| regex::escape(anchor))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(
            r"\b(?:{anchors})\b[^0-9]{{0,40}}?\b(\d{{1,2}})(?:st|nd|rd|th)?\b\s*[-/.]?\s*([a-z]+|\b\d{{1,2}}\b)\.?\s*[-/.,]?\s*\b(\d{{2,4}})\b"
        ))?;

        Ok(Self {
            pattern,
            markers: tables.about_me_markers.clone(),
            window_chars: tables.birth_window_chars,
            reference_date,
        })
    }

    /// Lower-cased text before the first "about me" marker, else the leading
    /// `window_chars` characters.
    fn search_window(&self, raw: &str) -> String {
        let lowered = raw.to_lowercase();
        let marker_at = self
            .markers
            .iter()
            .filter_map(|marker| lowered.find(marker.as_str()))
            .min();

        match marker_at {
            Some(at) => lowered[..at].to_string(),
            None => lowered.chars().take(self.window_chars).collect(),
        }
    }
}

impl Strategy<BirthInfo> for AnchoredBirthDate {
    fn name(&self) -> &'static str {
        "anchored_date"
    }

    fn attempt(&self, document: &DocumentView<'_>) -> Option<BirthInfo> {
        let window = self.search_window(document.raw());
        let captures = self.pattern.captures(&window)?;

        let parsed = parse_loose_date(&captures[1], &captures[2], &captures[3])
            .and_then(|date| age_on(date, self.reference_date).map(|age| (date, age)));

        Some(match parsed {
            Some((date, age)) => BirthInfo::Parsed { date, age },
            None => BirthInfo::FormatNotRecognized,
        })
    }
}

fn parse_loose_date(day: &str, month: &str, year: &str) -> Option<NaiveDate> {
    if year.len() != 4 {
        return None;
    }
    let day = day.parse::<u32>().ok()?;
    let year = year.parse::<i32>().ok()?;
    let month = match month.parse::<u32>() {
        Ok(number) => number,
        Err(_) => MONTHS
            .iter()
            .find(|(name, _)| *name == month)
            .map(|(_, number)| *number)?,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Completed years at `reference`; `None` for dates after it.
pub(crate) fn age_on(birth: NaiveDate, reference: NaiveDate) -> Option<u32> {
    let before_birthday = (reference.month(), reference.day()) < (birth.month(), birth.day());
    let age = reference.year() - birth.year() - i32::from(before_birthday);
    u32::try_from(age).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn strategy(reference: NaiveDate) -> AnchoredBirthDate {
        AnchoredBirthDate::new(&HeuristicTables::default(), reference).expect("pattern compiles")
    }

    fn extract(raw: &str, reference: NaiveDate) -> Option<BirthInfo> {
        strategy(reference).attempt(&DocumentView::new(raw, ""))
    }

    #[test]
    fn parses_indonesian_birth_line() {
        let birth = extract("lahir 17 agustus 1998", date(2025, 10, 16)).expect("anchored");
        assert_eq!(
            birth,
            BirthInfo::Parsed {
                date: date(1998, 8, 17),
                age: 27
            }
        );
        assert!(birth.to_string().contains("17 August 1998"));
        assert_eq!(birth.to_string(), "17 August 1998 (27 Tahun)");
    }

    #[test]
    fn age_drops_by_one_before_birthday() {
        let birth = extract("Tempat, tanggal lahir: Jakarta, 17 Agustus 1998", date(2025, 8, 16))
            .expect("anchored");
        assert_eq!(birth.age(), Some(26));
        let birth = extract("Born on 17th August 1998", date(2025, 8, 17)).expect("anchored");
        assert_eq!(birth.age(), Some(27));
    }

    #[test]
    fn accepts_abbreviated_and_numeric_months() {
        let reference = date(2024, 1, 1);
        assert_eq!(
            extract("born: 03 Okt 2000", reference).and_then(|birth| birth.date()),
            Some(date(2000, 10, 3))
        );
        assert_eq!(
            extract("lahir 03-10-2000", reference).and_then(|birth| birth.date()),
            Some(date(2000, 10, 3))
        );
    }

    #[test]
    fn unparsable_date_is_distinct_from_missing_date() {
        let reference = date(2025, 1, 1);
        assert_eq!(
            extract("lahir 17 agustos 1998", reference),
            Some(BirthInfo::FormatNotRecognized)
        );
        assert_eq!(
            extract("lahir 31 februari 1998", reference),
            Some(BirthInfo::FormatNotRecognized)
        );
        assert_eq!(
            extract("lahir 17 agustus 98", reference),
            Some(BirthInfo::FormatNotRecognized)
        );
        assert_eq!(extract("lahir di jakarta", reference), None);
        assert_eq!(extract("graduated 17 august 2019", reference), None);
        assert_eq!(extract("", reference), None);
    }

    #[test]
    fn digit_runs_after_anchor_are_not_dates() {
        let reference = date(2025, 1, 1);
        assert_eq!(
            extract("Ayu Lestari\nTempat lahir: Jakarta\nNo. HP: 0812-3456-7890", reference),
            None
        );
        assert_eq!(extract("born in 1998 in Bandung", reference), None);
        assert_eq!(extract("lahir: kamar 123 jalan merdeka", reference), None);
    }

    #[test]
    fn kelahiran_label_anchors_the_date() {
        let birth = extract("Tanggal Kelahiran: 17 Agustus 1998", date(2025, 10, 16))
            .expect("anchored");
        assert_eq!(birth.to_string(), "17 August 1998 (27 Tahun)");
    }

    #[test]
    fn future_birth_dates_are_not_recognized() {
        assert_eq!(
            extract("born 01 january 2030", date(2025, 1, 1)),
            Some(BirthInfo::FormatNotRecognized)
        );
    }

    #[test]
    fn search_stops_at_about_me_marker() {
        let raw = "Ayu Lestari\nAbout Me\nI was born 17 August 1998 in Bandung";
        assert_eq!(extract(raw, date(2025, 1, 1)), None);
    }

    #[test]
    fn search_is_limited_to_leading_window() {
        let padding = "x".repeat(600);
        let raw = format!("Ayu Lestari\n{padding}\nlahir 17 agustus 1998");
        assert_eq!(extract(&raw, date(2025, 1, 1)), None);
    }

    #[test]
    fn age_on_handles_leap_day_birthdays() {
        assert_eq!(age_on(date(2000, 2, 29), date(2024, 2, 28)), Some(23));
        assert_eq!(age_on(date(2000, 2, 29), date(2024, 2, 29)), Some(24));
        assert_eq!(age_on(date(2025, 6, 1), date(2025, 1, 1)), None);
    }
}
