//! Entity model for electronic health record extracts.
//!
//! This crate holds the two record types produced by the extract parser,
//! [`Patient`] and [`Lab`], together with the per-patient queries that run
//! over a patient's laboratory history: current age, age at first visit and
//! threshold-based illness checks.
//!
//! Entities are assembled through builders that validate every field at once,
//! so a constructed value is always complete.
//!
//! ```
//! use chrono::NaiveDate;
//! use ehr_model::{Lab, Operator, Patient};
//!
//! let mut patient = Patient::builder()
//!     .id("p1")
//!     .gender("Female")
//!     .dob("1960-12-06 06:37:05.640")
//!     .race("White")
//!     .marital_status("Married")
//!     .language("English")
//!     .poverty_percentage("15.02")
//!     .build()
//!     .unwrap();
//!
//! patient.add_lab(
//!     Lab::builder()
//!         .patient_id("p1")
//!         .admission_id("1")
//!         .name("METABOLIC: CREATININE")
//!         .value("0.9")
//!         .units("mg/dL")
//!         .date_time("1986-12-06 04:11:32.937")
//!         .build()
//!         .unwrap(),
//! );
//!
//! let on = NaiveDate::from_ymd_opt(2022, 4, 18).unwrap();
//! assert_eq!(patient.age_on(on).unwrap(), 61);
//! assert_eq!(patient.age_first_visit().unwrap(), 26);
//! assert!(patient
//!     .is_sick_with("METABOLIC: CREATININE", Operator::GreaterThan, 0.5)
//!     .unwrap());
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod lab;
pub mod operator;
pub mod patient;
pub mod timestamp;

pub use error::{ModelError, ModelResult};
pub use lab::{Lab, LabBuilder, LabField};
pub use operator::Operator;
pub use patient::{Patient, PatientBuilder, PatientField};
pub use timestamp::{parse_timestamp, years_between, TIMESTAMP_PATTERN};
