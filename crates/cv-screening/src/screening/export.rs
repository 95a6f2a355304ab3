//! Flat tabular export of candidate records.
//!
//! Columns: `Filename`, one `1`/`0` column per keyword in profile order, then
//! `GPA`, `Gender`, `Religion`, `City`, `Birth` and `Total_Match (%)`.

use super::domain::{
    round2, AttributeSet, BirthInfo, CandidateRecord, Gender, KeywordHit, MatchResult, Religion,
};
use std::io::{Read, Write};

const FILENAME: &str = "Filename";
const GPA: &str = "GPA";
const GENDER: &str = "Gender";
const RELIGION: &str = "Religion";
const CITY: &str = "City";
const BIRTH: &str = "Birth";
const TOTAL_MATCH: &str = "Total_Match (%)";
const TRAILING_COLUMNS: [&str; 6] = [GPA, GENDER, RELIGION, CITY, BIRTH, TOTAL_MATCH];

const CITY_UNKNOWN: &str = "Unknown";
const MATCHED: &str = "1";
const NOT_MATCHED: &str = "0";

/// Writes the header plus one row per record. Every record must carry the
/// `keywords` in the same order.
pub fn write_records<W: Write>(
    writer: W,
    keywords: &[String],
    records: &[CandidateRecord],
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let header = std::iter::once(FILENAME)
        .chain(keywords.iter().map(String::as_str))
        .chain(TRAILING_COLUMNS);
    csv_writer.write_record(header)?;

    for record in records {
        let hits = &record.match_result.per_keyword;
        let aligned = hits.len() == keywords.len()
            && hits.iter().zip(keywords).all(|(hit, keyword)| &hit.keyword == keyword);
        if !aligned {
            return Err(ExportError::KeywordMismatch {
                filename: record.filename.clone(),
            });
        }

        let attributes = &record.attributes;
        let mut row = Vec::with_capacity(keywords.len() + TRAILING_COLUMNS.len() + 1);
        row.push(record.filename.clone());
        row.extend(
            hits.iter()
                .map(|hit| (if hit.matched { MATCHED } else { NOT_MATCHED }).to_string()),
        );
        row.push(attributes.gpa.map(|gpa| format!("{gpa:.2}")).unwrap_or_default());
        row.push(attributes.gender.to_string());
        row.push(attributes.religion.to_string());
        row.push(
            attributes
                .city
                .clone()
                .unwrap_or_else(|| CITY_UNKNOWN.to_string()),
        );
        row.push(attributes.birth.to_string());
        row.push(format!("{:.2}", record.match_result.percentage));
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Parses rows produced by [`write_records`]. Provenance is not exported and
/// comes back empty.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<CandidateRecord>, ExportError> {
    let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);
    let header = csv_reader.headers()?.clone();

    let column = |name: &'static str| {
        header
            .iter()
            .position(|value| value == name)
            .ok_or(ExportError::MissingColumn(name))
    };
    let filename_at = column(FILENAME)?;
    let gpa_at = column(GPA)?;
    let gender_at = column(GENDER)?;
    let religion_at = column(RELIGION)?;
    let city_at = column(CITY)?;
    let birth_at = column(BIRTH)?;
    let total_at = column(TOTAL_MATCH)?;
    let keywords: Vec<(usize, String)> = header
        .iter()
        .enumerate()
        .skip(filename_at + 1)
        .take_while(|(at, _)| *at < gpa_at)
        .map(|(at, keyword)| (at, keyword.to_string()))
        .collect();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let cell = |at: usize| row.get(at).unwrap_or_default();

        let per_keyword = keywords
            .iter()
            .map(|(at, keyword)| {
                let matched = match cell(*at) {
                    MATCHED => true,
                    NOT_MATCHED => false,
                    other => return Err(invalid(keyword, other)),
                };
                Ok(KeywordHit {
                    keyword: keyword.clone(),
                    matched,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let gpa = match cell(gpa_at) {
            "" => None,
            raw => Some(raw.parse::<f64>().map(round2).map_err(|_| invalid(GPA, raw))?),
        };
        let city = match cell(city_at) {
            CITY_UNKNOWN | "" => None,
            raw => Some(raw.to_string()),
        };
        let percentage = cell(total_at)
            .parse::<f64>()
            .map_err(|_| invalid(TOTAL_MATCH, cell(total_at)))?;

        records.push(CandidateRecord {
            filename: cell(filename_at).to_string(),
            attributes: AttributeSet {
                gpa,
                gender: cell(gender_at)
                    .parse::<Gender>()
                    .map_err(|_| invalid(GENDER, cell(gender_at)))?,
                religion: cell(religion_at)
                    .parse::<Religion>()
                    .map_err(|_| invalid(RELIGION, cell(religion_at)))?,
                city,
                birth: cell(birth_at)
                    .parse::<BirthInfo>()
                    .map_err(|_| invalid(BIRTH, cell(birth_at)))?,
                provenance: Default::default(),
            },
            match_result: MatchResult {
                per_keyword,
                percentage,
            },
        });
    }

    Ok(records)
}

fn invalid(column: &str, value: &str) -> ExportError {
    ExportError::InvalidValue {
        column: column.to_string(),
        value: value.to_string(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("failed to flush export: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing column '{0}'")]
    MissingColumn(&'static str),
    #[error("invalid value '{value}' in column '{column}'")]
    InvalidValue { column: String, value: String },
    #[error("record '{filename}' was screened against a different keyword set")]
    KeywordMismatch { filename: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn keywords() -> Vec<String> {
        vec!["python".to_string(), "rest api".to_string()]
    }

    fn record() -> CandidateRecord {
        CandidateRecord {
            filename: "ayu.txt".to_string(),
            attributes: AttributeSet {
                gpa: Some(3.5),
                gender: Gender::Female,
                religion: Religion::Islam,
                city: Some("Tangerang Selatan".to_string()),
                birth: BirthInfo::Parsed {
                    date: NaiveDate::from_ymd_opt(1998, 8, 17).expect("valid date"),
                    age: 27,
                },
                provenance: Default::default(),
            },
            match_result: MatchResult {
                per_keyword: vec![
                    KeywordHit {
                        keyword: "python".to_string(),
                        matched: true,
                    },
                    KeywordHit {
                        keyword: "rest api".to_string(),
                        matched: false,
                    },
                ],
                percentage: 50.0,
            },
        }
    }

    #[test]
    fn writes_header_and_two_decimal_percentages() {
        let mut buffer = Vec::new();
        write_records(&mut buffer, &keywords(), &[record()]).expect("export succeeds");
        let csv = String::from_utf8(buffer).expect("utf-8 output");
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Filename,python,rest api,GPA,Gender,Religion,City,Birth,Total_Match (%)")
        );
        assert_eq!(
            lines.next(),
            Some("ayu.txt,1,0,3.50,Female,Islam,Tangerang Selatan,17 August 1998 (27 Tahun),50.00")
        );
    }

    #[test]
    fn rejects_records_from_another_profile() {
        let error = write_records(Vec::new(), &["sql".to_string()], &[record()])
            .expect_err("mismatch detected");
        assert!(matches!(error, ExportError::KeywordMismatch { .. }));
    }

    #[test]
    fn reports_missing_columns_and_bad_cells() {
        let error = read_records("Filename,GPA\nx,3.00\n".as_bytes()).expect_err("missing");
        assert!(matches!(error, ExportError::MissingColumn(GENDER)));

        let csv = "Filename,sql,GPA,Gender,Religion,City,Birth,Total_Match (%)\n\
x.txt,yes,,Unknown,Unknown,Unknown,Not found,0.00\n";
        let error = read_records(csv.as_bytes()).expect_err("bad marker");
        assert!(matches!(error, ExportError::InvalidValue { ref column, .. } if column == "sql"));
    }
}
