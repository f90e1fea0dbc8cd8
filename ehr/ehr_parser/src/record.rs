//! Data line extraction.

use ehr_model::{Lab, LabField, ModelResult, Patient, PatientField};

use crate::error::{ParseResult, SourceKind};
use crate::header::ColumnMap;

/// Split a line on `delimiter`, trimming trailing whitespace (including the
/// line terminator) from the last field only.
pub fn split_record(line: &str, delimiter: char) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(delimiter).collect();
    if let Some(last) = fields.last_mut() {
        *last = last.trim_end();
    }
    fields
}

/// Header column that feeds each patient field.
pub fn patient_column(field: PatientField) -> &'static str {
    match field {
        PatientField::Id => "PatientID",
        PatientField::Gender => "PatientGender",
        PatientField::DateOfBirth => "PatientDateOfBirth",
        PatientField::Race => "PatientRace",
        PatientField::MaritalStatus => "PatientMaritalStatus",
        PatientField::Language => "PatientLanguage",
        PatientField::PovertyPercentage => "PatientPopulationPercentageBelowPoverty",
    }
}

/// Header column that feeds each lab field.
pub fn lab_column(field: LabField) -> &'static str {
    match field {
        LabField::PatientId => "PatientID",
        LabField::AdmissionId => "AdmissionID",
        LabField::Name => "LabName",
        LabField::Value => "LabValue",
        LabField::Units => "LabUnits",
        LabField::DateTime => "LabDateTime",
    }
}

/// Where each patient field sits on a patient data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientColumns {
    positions: Vec<(PatientField, usize)>,
}

impl PatientColumns {
    /// Look up every patient column in `columns`.
    pub fn locate(columns: &ColumnMap) -> ParseResult<Self> {
        let positions = PatientField::ALL
            .iter()
            .map(|&field| {
                columns
                    .require(patient_column(field), SourceKind::Patients)
                    .map(|pos| (field, pos))
            })
            .collect::<ParseResult<Vec<_>>>()?;
        Ok(Self { positions })
    }

    /// Build a patient from split fields. A field beyond the end of a short
    /// line stays unset and is reported by the builder.
    pub fn extract(&self, fields: &[&str]) -> ModelResult<Patient> {
        self.positions
            .iter()
            .filter_map(|&(field, pos)| fields.get(pos).map(|value| (field, *value)))
            .fold(Patient::builder(), |builder, (field, value)| {
                builder.set(field, value)
            })
            .build()
    }
}

/// Where each lab field sits on a lab data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabColumns {
    positions: Vec<(LabField, usize)>,
}

impl LabColumns {
    /// Look up every lab column in `columns`.
    pub fn locate(columns: &ColumnMap) -> ParseResult<Self> {
        let positions = LabField::ALL
            .iter()
            .map(|&field| {
                columns
                    .require(lab_column(field), SourceKind::Labs)
                    .map(|pos| (field, pos))
            })
            .collect::<ParseResult<Vec<_>>>()?;
        Ok(Self { positions })
    }

    pub fn extract(&self, fields: &[&str]) -> ModelResult<Lab> {
        self.positions
            .iter()
            .filter_map(|&(field, pos)| fields.get(pos).map(|value| (field, *value)))
            .fold(Lab::builder(), |builder, (field, value)| builder.set(field, value))
            .build()
    }
}
