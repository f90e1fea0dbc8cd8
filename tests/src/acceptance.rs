use chrono::NaiveDate;
use ehr_parser::{build_index_from_paths, PatientIndex};
use pretty_assertions::assert_eq;

use crate::{write_extracts, LABS_FILE, PATIENT_FILE};

fn parse_fixtures() -> PatientIndex {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().expect("tempdir");
    let (patients, labs) = write_extracts(dir.path(), PATIENT_FILE, LABS_FILE).expect("write");
    build_index_from_paths(patients, labs).expect("index")
}

#[test]
fn parse_data_keeps_demographics() {
    let records = parse_fixtures();
    let patient = &records["016A590E-D093-4667-A5DA-D68EA6987D93"];
    assert_eq!(patient.race(), "White");
    assert_eq!(patient.gender(), "Male");
    assert_eq!(patient.labs().len(), 5);
}

#[test]
fn age_on_reference_date() {
    let records = parse_fixtures();
    let patient = &records["0BC491C5-5A45-4067-BD11-A78BEA00D3BE"];
    let reference = NaiveDate::from_ymd_opt(2022, 4, 18).expect("date");
    assert_eq!(patient.age_on(reference), Ok(101));
}

#[test]
fn age_today_is_at_least_the_fixture_age() {
    let records = parse_fixtures();
    let patient = &records["0BC491C5-5A45-4067-BD11-A78BEA00D3BE"];
    assert!(patient.age().expect("age") >= 101);
}

#[test]
fn is_sick_thresholds() {
    let records = parse_fixtures();
    let patient = &records["016A590E-D093-4667-A5DA-D68EA6987D93"];
    let lab_name = "URINALYSIS: RED BLOOD CELLS";
    assert_eq!(patient.is_sick(lab_name, ">", 2.8), Ok(true));
    assert_eq!(patient.is_sick(lab_name, "<", 0.1), Ok(false));
}

#[test]
fn age_first_visit_uses_earliest_lab() {
    let records = parse_fixtures();
    let patient = &records["016A590E-D093-4667-A5DA-D68EA6987D93"];
    assert_eq!(patient.age_first_visit(), Ok(25));

    let other = &records["0BC491C5-5A45-4067-BD11-A78BEA00D3BE"];
    assert_eq!(other.age_first_visit(), Ok(20));
}

#[test]
fn parsing_twice_gives_the_same_index() {
    assert_eq!(parse_fixtures(), parse_fixtures());
}
