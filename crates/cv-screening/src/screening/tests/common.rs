use chrono::NaiveDate;

use crate::screening::extraction::{DocumentView, FallbackChain, Strategy};
use crate::screening::{
    AttributeExtractor, BatchRunner, CandidateRecordAssembler, CityPrecedence,
    ExtractionSettings, Gazetteer, Gender, HeuristicTables, JobProfile, RawDocument,
    TextNormalizer,
};

pub(super) fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 16).expect("valid date")
}

pub(super) fn gazetteer() -> Gazetteer {
    Gazetteer::from_names(["jakarta", "bandung", "surabaya", "yogyakarta", "tangerang selatan"])
}

pub(super) fn runner() -> BatchRunner {
    runner_with(CityPrecedence::GazetteerOrder)
}

pub(super) fn runner_with(precedence: CityPrecedence) -> BatchRunner {
    BatchRunner::new(
        &HeuristicTables::default(),
        gazetteer(),
        ExtractionSettings::new(reference_date()).with_city_precedence(precedence),
    )
    .expect("runner builds")
}

/// Gender strategy that panics on documents mentioning "segfault".
struct PanicsOnSegfault;

impl Strategy<Gender> for PanicsOnSegfault {
    fn name(&self) -> &'static str {
        "panics_on_segfault"
    }

    fn attempt(&self, document: &DocumentView<'_>) -> Option<Gender> {
        if document.normalized().contains("segfault") {
            panic!("gender strategy crashed on {}", document.first_name().unwrap_or("?"));
        }
        None
    }
}

pub(super) fn runner_with_crashing_strategy() -> BatchRunner {
    let extractor = AttributeExtractor::new(
        &HeuristicTables::default(),
        gazetteer(),
        ExtractionSettings::new(reference_date()),
    )
    .expect("extractor builds")
    .with_gender_chain(FallbackChain::new().then(PanicsOnSegfault));
    BatchRunner::from_assembler(CandidateRecordAssembler::new(
        TextNormalizer::default(),
        extractor,
    ))
}

pub(super) fn backend_profile() -> JobProfile {
    JobProfile::new(
        "backend",
        "Backend (BE)",
        ["golang", "sql", "rest api", "backend", "nodejs"],
    )
}

pub(super) fn ayu_resume() -> RawDocument {
    RawDocument::new(
        "ayu_lestari.txt",
        "Ayu Lestari\n\
Tempat, tanggal lahir: Bandung, 17 Agustus 1998\n\
Domisili: Jakarta Selatan\n\
Pendidikan: Universitas Padjadjaran, IPK: 3,75 / 4.00\n\
About Me\n\
Backend developer building REST API services in Golang and SQL.",
    )
}

pub(super) fn budi_resume() -> RawDocument {
    RawDocument::new(
        "budi_santoso.txt",
        "Budi Santoso\n\
Jenis kelamin: Laki-laki | Agama: Islam\n\
Surabaya\n\
Born on 2 March 2001\n\
Skills: nodejs, backend, docker",
    )
}

pub(super) fn sparse_resume() -> RawDocument {
    RawDocument::new("sparse.txt", "Xander\nPortfolio available on request.")
}

pub(super) fn malformed_birth_resume() -> RawDocument {
    RawDocument::new(
        "malformed_birth.txt",
        "Intan Permata\nlahir 31 februari 1999\nGPA 3.10\nwanita",
    )
}

pub(super) fn corrupt_document() -> RawDocument {
    RawDocument::new("scan_0001.txt", "%PDF-1.4\0\0\0\u{1}\u{2}stream")
}
