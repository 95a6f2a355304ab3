use super::common::*;
use crate::screening::{
    read_records, write_records, BirthInfo, Gender, JobProfile, ProfileCatalog, RawDocument,
};

#[test]
fn percentage_matches_formula_for_every_builtin_profile() {
    let documents = vec![ayu_resume(), budi_resume(), sparse_resume()];
    for profile in ProfileCatalog::builtin().profiles() {
        let outcome = runner()
            .run(documents.clone(), profile)
            .expect("builtin profiles have keywords");
        for record in &outcome.records {
            let k = profile.keywords.len() as f64;
            let matched = record.match_result.matched_count() as f64;
            let expected = (100.0 * matched / k * 100.0).round() / 100.0;
            assert!((0.0..=100.0).contains(&record.match_result.percentage));
            assert!((record.match_result.percentage - expected).abs() < 1e-9);
        }
    }
}

#[test]
fn gpa_comma_separator_is_normalized_and_stable() {
    let document = RawDocument::new("gpa.txt", "gpa: 3,75");
    let first = runner()
        .run(vec![document.clone()], &backend_profile())
        .expect("batch runs");
    let second = runner()
        .run(vec![document], &backend_profile())
        .expect("batch runs");
    assert_eq!(first.records[0].attributes.gpa, Some(3.75));
    assert_eq!(
        first.records[0].attributes.gpa,
        second.records[0].attributes.gpa
    );
}

#[test]
fn given_name_fallback_only_commits_on_strong_evidence() {
    let outcome = runner()
        .run(
            vec![
                RawDocument::new("ayu.txt", "Ayu\nfrontend engineer"),
                RawDocument::new("xander.txt", "Xander\nfrontend engineer"),
            ],
            &backend_profile(),
        )
        .expect("batch runs");
    assert_eq!(outcome.records[0].attributes.gender, Gender::Female);
    assert_eq!(outcome.records[1].attributes.gender, Gender::Unknown);
    assert_eq!(outcome.records[1].attributes.provenance.gender, None);
}

#[test]
fn birth_sentinels_stay_distinguishable() {
    let outcome = runner()
        .run(
            vec![
                RawDocument::new("parsed.txt", "lahir 17 agustus 1998"),
                RawDocument::new("unparsable.txt", "lahir 17 agustos 1998"),
                RawDocument::new("absent.txt", "no birth information"),
            ],
            &backend_profile(),
        )
        .expect("batch runs");

    let parsed = &outcome.records[0].attributes.birth;
    assert!(parsed.to_string().contains("17 August 1998"));
    let age = parsed.age().expect("age computed") as i32;
    assert!((2025 - 1998 - 1..=2025 - 1998).contains(&age));

    assert_eq!(
        outcome.records[1].attributes.birth,
        BirthInfo::FormatNotRecognized
    );
    assert_eq!(outcome.records[2].attributes.birth, BirthInfo::NotFound);
    assert_ne!(
        outcome.records[1].attributes.birth.to_string(),
        outcome.records[2].attributes.birth.to_string()
    );
}

#[test]
fn export_round_trip_reproduces_every_field() {
    let profile = JobProfile::from_keyword_list("custom", "Golang, SQL, rest api, Kubernetes");
    let outcome = runner()
        .run(
            vec![
                ayu_resume(),
                budi_resume(),
                sparse_resume(),
                malformed_birth_resume(),
            ],
            &profile,
        )
        .expect("batch runs");

    let mut buffer = Vec::new();
    write_records(&mut buffer, &profile.keywords, &outcome.records).expect("export succeeds");
    let parsed = read_records(buffer.as_slice()).expect("export parses");

    assert_eq!(parsed.len(), outcome.records.len());
    for (original, restored) in outcome.records.iter().zip(&parsed) {
        assert_eq!(restored.filename, original.filename);
        assert_eq!(restored.match_result, original.match_result);
        assert_eq!(restored.attributes.gpa, original.attributes.gpa);
        assert_eq!(restored.attributes.gender, original.attributes.gender);
        assert_eq!(restored.attributes.religion, original.attributes.religion);
        assert_eq!(restored.attributes.city, original.attributes.city);
        assert_eq!(restored.attributes.birth, original.attributes.birth);
    }
}
