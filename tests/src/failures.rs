use ehr_model::ModelError;
use ehr_parser::{build_index_from_paths, ParseError, SourceKind};

use crate::{write_extracts, LABS_FILE, PATIENT_FILE};

fn parse(patients: &str, labs: &str) -> Result<ehr_parser::PatientIndex, ParseError> {
    let dir = tempfile::tempdir().expect("tempdir");
    let (patient_path, lab_path) = write_extracts(dir.path(), patients, labs).expect("write");
    build_index_from_paths(patient_path, lab_path)
}

#[test]
fn patient_without_labs() {
    let patients = format!(
        "{PATIENT_FILE}7A025E77-7832-4F53-B9A7-09A3F98AC17E\tFemale\t1983-02-04 10:22:57.010\tAsian\tSingle\tSpanish\t6.67\n"
    );
    let records = parse(&patients, LABS_FILE).expect("index");
    assert_eq!(
        records["7A025E77-7832-4F53-B9A7-09A3F98AC17E"].age_first_visit(),
        Err(ModelError::NoVisitRecorded {
            patient_id: "7A025E77-7832-4F53-B9A7-09A3F98AC17E".into()
        })
    );
}

#[test]
fn unsupported_operator() {
    let records = parse(PATIENT_FILE, LABS_FILE).expect("index");
    let patient = &records["016A590E-D093-4667-A5DA-D68EA6987D93"];
    assert_eq!(
        patient.is_sick("URINALYSIS: RED BLOOD CELLS", "==", 2.8),
        Err(ModelError::InvalidOperator("==".into()))
    );
}

#[test]
fn unknown_lab_name() {
    let records = parse(PATIENT_FILE, LABS_FILE).expect("index");
    let patient = &records["016A590E-D093-4667-A5DA-D68EA6987D93"];
    assert!(matches!(
        patient.is_sick("LIPIDS: LDL", "<", 100.0),
        Err(ModelError::NoMatchingLab { .. })
    ));
}

#[test]
fn lab_for_unknown_patient() {
    let labs = format!("{LABS_FILE}FFFFFFFF\t1\tMETABOLIC: CREATININE\t0.5\tmg/dL\t1986-12-05 17:46:42.850\n");
    match parse(PATIENT_FILE, &labs) {
        Err(ParseError::UnknownPatientReference { patient_id, line }) => {
            assert_eq!(patient_id, "FFFFFFFF");
            assert_eq!(line, 11);
        }
        other => panic!("expected unknown patient reference, got {other:?}"),
    }
}

#[test]
fn header_without_required_column() {
    let patients = PATIENT_FILE.replacen("PatientLanguage", "Language", 1);
    assert!(matches!(
        parse(&patients, LABS_FILE),
        Err(ParseError::MissingColumn {
            kind: SourceKind::Patients,
            column: "PatientLanguage"
        })
    ));
}
