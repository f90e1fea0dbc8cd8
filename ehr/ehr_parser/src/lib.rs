//! Parser for tab-delimited patient and laboratory extracts.
//!
//! Two extracts feed the index: a patient file with one patient per line and
//! a lab file with one test result per line. The first line of each is a
//! header naming the columns. [`build_index`] reads both and returns every
//! patient keyed by identifier, with the patient's labs attached in file
//! order.
//!
//! ```
//! use ehr_parser::build_index;
//!
//! let patients = "PatientID\tPatientGender\tPatientDateOfBirth\tPatientRace\t\
//! PatientMaritalStatus\tPatientLanguage\tPatientPopulationPercentageBelowPoverty\n\
//! p1\tFemale\t1921-04-18 01:56:01.807\tUnknown\tMarried\tEnglish\t18.05\n";
//! let labs = "PatientID\tAdmissionID\tLabName\tLabValue\tLabUnits\tLabDateTime\n\
//! p1\t1\tMETABOLIC: CREATININE\t0.5\tmg/dL\t1941-11-15 01:43:03.937\n";
//!
//! let index = build_index(patients.as_bytes(), labs.as_bytes()).unwrap();
//! let patient = &index["p1"];
//! assert_eq!(patient.labs().len(), 1);
//! assert_eq!(patient.age_first_visit().unwrap(), 20);
//! ```
//!
//! Each line is assumed to carry as many fields as its header. Lines that
//! are too short fail with a [`ParseError::Record`]; extra fields are
//! ignored.

pub mod config;
pub mod error;
pub mod header;
pub mod index;
pub mod record;

pub use config::IndexConfig;
pub use error::{ParseError, ParseResult, SourceKind};
pub use header::{resolve_header, strip_bom_artifact, ColumnMap, BOM_ARTIFACT};
pub use index::{build_index, build_index_from_paths, IndexBuilder, PatientIndex};
pub use record::{split_record, LabColumns, PatientColumns};
